//! Smooth the aliased curve with a 2x2 box filter.
//!
//! Every pixel inside the padded bounding box of the control points is replaced by the mean of
//! four sub-samples taken at quarter pixel offsets. Where the sub-samples are read from depends
//! on the [`FilterMode`]:
//!
//! - [`FilterMode::Compatible`] reads them from a snapshot of the surface itself. Offsets that
//!   stay inside a pixel truncate back onto that pixel, so only a region starting at a
//!   fractional position actually blends neighbouring pixels.
//! - [`FilterMode::Supersampled`] draws the curve into a buffer of twice the resolution, where
//!   the four offsets address four distinct cells, and downsamples it.
//!
//! Sub-samples outside their source are skipped and the mean is taken over the rest.

use log::debug;

use crate::bounding_box::BoundingBox;
use crate::config::{FilterMode, RasterConfig};
use crate::error::Result;
use crate::evaluate::{CubicCurve, Evaluator};
use crate::point::{point, Point};
use crate::raster::{rasterize, PassStats};
use crate::surface::{Rgb, Surface};

/// Offsets of the four sub-samples relative to a pixel position
pub const SUB_SAMPLE_OFFSETS: [(f64, f64); 4] = [(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)];

/// Resolution factor of the supersampled backing buffer
const SCALE: f64 = 2.0;

/// Counters describing a filter run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Pixels that were replaced by their mean
    pub pixels: usize,
    /// Sub-samples left out because they fell outside their source
    pub skipped_samples: usize,
}

/// Result of [`antialias`]: the curve pass and the filter run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AntialiasStats {
    /// The pass marking the curve
    pub pass: PassStats,
    /// The box filter
    pub filter: FilterStats,
}

/// The part of a `width` x `height` surface the filter works on.
///
/// This is the control points' bounding box grown by `margin`, clamped to the surface.
pub fn filter_region(curve: &CubicCurve, margin: f64, width: usize, height: usize) -> Option<BoundingBox> {
    curve.bounding_box().padded(margin).clamp_to(width, height)
}

/// Draw `curve` into the de Casteljau channel and smooth it.
pub fn antialias(curve: &CubicCurve, surface: &mut Surface, config: &RasterConfig) -> Result<AntialiasStats> {
    let stats = match config.filter {
        FilterMode::Compatible => compatible(curve, surface, config)?,
        FilterMode::Supersampled => supersampled(curve, surface, config)?,
    };
    debug!(
        "{:?} filter: {} pixels, {} sub-samples skipped",
        config.filter, stats.filter.pixels, stats.filter.skipped_samples
    );
    Ok(stats)
}

fn compatible(curve: &CubicCurve, surface: &mut Surface, config: &RasterConfig) -> Result<AntialiasStats> {
    let pass = rasterize(
        curve,
        surface,
        config.castlejau_channel,
        config.castlejau_step,
        Evaluator::DeCasteljau,
    )?;

    let filter = match filter_region(curve, config.margin, surface.width(), surface.height()) {
        Some(region) => {
            // Averages are taken over pre-filter values only
            let snapshot = surface.clone();
            box_filter(surface, &snapshot, &region, |p: Point| p)
        }
        None => FilterStats::default(),
    };
    Ok(AntialiasStats { pass, filter })
}

fn supersampled(curve: &CubicCurve, surface: &mut Surface, config: &RasterConfig) -> Result<AntialiasStats> {
    let region = match filter_region(curve, config.margin, surface.width(), surface.height()) {
        Some(region) => region,
        None => {
            // Nothing to filter, the pass alone clamps the curve onto the border
            let pass = rasterize(
                curve,
                surface,
                config.castlejau_channel,
                config.castlejau_step,
                Evaluator::DeCasteljau,
            )?;
            return Ok(AntialiasStats {
                pass,
                filter: FilterStats::default(),
            });
        }
    };

    // Align the region to whole pixels
    let origin = point(region.min.x.floor(), region.min.y.floor());
    let region = BoundingBox {
        min: origin,
        max: point(region.max.x.floor(), region.max.y.floor()),
    };
    let (cols, rows) = region.steps();
    let (left, top) = (origin.x as usize, origin.y as usize);

    let mut backing = Surface::new(cols * 2, rows * 2);
    for row in 0..rows {
        for col in 0..cols {
            let color = surface.pixel(left + col, top + row)?;
            for (dx, dy) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                backing.set_pixel(2 * col + dx, 2 * row + dy, color)?;
            }
        }
    }

    let to_backing = move |p: Point| (p - origin) * SCALE;
    let scaled = CubicCurve::new(&curve.points().map(to_backing))?;
    let pass = rasterize(
        &scaled,
        &mut backing,
        config.castlejau_channel,
        config.castlejau_step / SCALE,
        Evaluator::DeCasteljau,
    )?;

    let filter = box_filter(surface, &backing, &region, to_backing);
    Ok(AntialiasStats { pass, filter })
}

/// Replace every position of `region` in `target` by the mean of its sub-samples in `source`.
///
/// Positions start at `region.min` and advance by whole pixels, column by column.
fn box_filter<F>(target: &mut Surface, source: &Surface, region: &BoundingBox, to_source: F) -> FilterStats
where
    F: Fn(Point) -> Point,
{
    let mut stats = FilterStats::default();
    let (cols, rows) = region.steps();
    for i in 0..cols {
        let x = region.min.x + i as f64;
        for j in 0..rows {
            let y = region.min.y + j as f64;
            let (mean, skipped) = box_mean(source, point(x, y), &to_source);
            stats.skipped_samples += skipped;
            if let Some(color) = mean {
                if target.set(x, y, color).is_ok() {
                    stats.pixels += 1;
                }
            }
        }
    }
    stats
}

/// Mean of the sub-samples of `p` that lie inside `source`, truncated per channel,
/// and the number of sub-samples that didn't.
fn box_mean<F>(source: &Surface, p: Point, to_source: &F) -> (Option<Rgb>, usize)
where
    F: Fn(Point) -> Point,
{
    let mut sum = [0u32; 3];
    let mut count = 0u32;
    let mut skipped = 0;
    for (dx, dy) in SUB_SAMPLE_OFFSETS {
        let s = to_source(p + point(dx, dy));
        match source.get(s.x, s.y) {
            Ok(color) => {
                for (total, channel) in sum.iter_mut().zip(color.0) {
                    *total += u32::from(channel);
                }
                count += 1;
            }
            Err(_) => skipped += 1,
        }
    }
    let mean = (count > 0).then(|| Rgb(sum.map(|total| (total / count) as u8)));
    (mean, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_truncates() {
        let mut source = Surface::new(2, 2);
        source.set_pixel(0, 0, Rgb([255, 0, 1])).unwrap();
        source.set_pixel(1, 1, Rgb([255, 0, 2])).unwrap();
        // Offsets from (0.5, 0.5) reach all four pixels
        let (mean, skipped) = box_mean(&source, point(0.5, 0.5), &|p: Point| p);
        assert_eq!(mean, Some(Rgb([127, 0, 0])));
        assert_eq!(skipped, 0);
    }

    #[test]
    fn mean_skips_outside() {
        let source = Surface::filled(2, 2, Rgb([40, 80, 120]));
        let (mean, skipped) = box_mean(&source, point(1.5, 0.0), &|p: Point| p);
        assert_eq!(mean, Some(Rgb([40, 80, 120])));
        assert_eq!(skipped, 2);

        let (mean, skipped) = box_mean(&source, point(5.0, 5.0), &|p: Point| p);
        assert_eq!(mean, None);
        assert_eq!(skipped, 4);
    }

    #[test]
    fn whole_pixel_positions_are_left_alone() {
        let mut target = Surface::new(4, 4);
        target.set_pixel(1, 2, Rgb([0, 255, 0])).unwrap();
        let source = target.clone();
        let region = BoundingBox {
            min: point(0.0, 0.0),
            max: point(3.0, 3.0),
        };
        let stats = box_filter(&mut target, &source, &region, |p: Point| p);
        assert_eq!(stats, FilterStats { pixels: 16, skipped_samples: 0 });
        assert_eq!(target, source);
    }
}
