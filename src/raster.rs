//! Turn a continuous curve into lit pixels.
//!
//! A pass sweeps `t` over `[0, 1]`, evaluates the curve at every sample and sets one channel
//! of the pixel the sample falls into to full intensity. There is no coverage blending, so the
//! result is aliased; see [`antialias`](crate::antialias) for the smoothing pass.

use log::{debug, trace};

use crate::antialias::{self, AntialiasStats};
use crate::config::RasterConfig;
use crate::error::{RasterError, Result};
use crate::evaluate::{CubicCurve, Evaluator};
use crate::point::Point;
use crate::surface::{Channel, Rgb, Surface};

/// Counters describing a single pass over the curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Samples that lit a pixel
    pub samples: usize,
    /// Samples that fell off the surface and were moved onto its border
    pub clamped: usize,
    /// Samples that could not be placed at all
    pub skipped: usize,
}

/// The parameters `0, 1/n, 2/n, .., 1` with `n = round(1 / step)`.
///
/// Computing each value from its index instead of accumulating `step` guarantees that the
/// sweep ends exactly at `t = 1`.
pub fn parameters(step: f64) -> Result<impl Iterator<Item = f64>> {
    if step.is_nan() || step <= 0.0 || step > 1.0 {
        return Err(RasterError::InvalidStep(step));
    }
    let n = (1.0 / step).round() as usize;
    Ok((0..=n).map(move |i| i as f64 / n as f64))
}

/// Light `channel` of every pixel `curve` passes through, sampling it every `step`.
///
/// Samples outside the surface are clamped onto its border. A sample that still can't be
/// placed is skipped without aborting the pass.
pub fn rasterize(
    curve: &CubicCurve,
    surface: &mut Surface,
    channel: Channel,
    step: f64,
    evaluator: Evaluator,
) -> Result<PassStats> {
    let mut stats = PassStats::default();
    for t in parameters(step)? {
        let p = evaluator.evaluate(curve, t);
        let written = surface
            .clamped_index(&p)
            .and_then(|((col, row), clamped)| {
                surface.set_channel(col, row, channel, u8::MAX)?;
                Ok(clamped)
            });
        match written {
            Ok(clamped) => {
                if clamped {
                    trace!("clamped sample ({}, {}) at t = {}", p.x, p.y, t);
                    stats.clamped += 1;
                }
                stats.samples += 1;
            }
            Err(err) => {
                trace!("skipped sample at t = {}: {}", t, err);
                stats.skipped += 1;
            }
        }
    }
    debug!(
        "{:?} pass into {:?}: {} samples, {} clamped, {} skipped",
        evaluator, channel, stats.samples, stats.clamped, stats.skipped
    );
    Ok(stats)
}

/// Paint a filled disc of `radius` pixels around every control point.
///
/// Pixels off the surface are left out. Returns the number of pixels painted.
pub fn draw_control_points(points: &[Point], surface: &mut Surface, radius: f64, color: Rgb) -> usize {
    let reach = radius.max(0.0).floor() as i64;
    let mut painted = 0;
    for p in points {
        let (cx, cy) = (p.x.trunc(), p.y.trunc());
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) > radius * radius {
                    continue;
                }
                if surface.set(cx + dx as f64, cy + dy as f64, color).is_ok() {
                    painted += 1;
                }
            }
        }
    }
    painted
}

/// Runs the passes with a fixed [`RasterConfig`].
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    /// Create a rasterizer using `config`.
    pub fn new(config: RasterConfig) -> Rasterizer {
        Rasterizer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Bernstein pass: coarse steps into the naive channel.
    pub fn naive(&self, points: &[Point], surface: &mut Surface) -> Result<PassStats> {
        let curve = CubicCurve::new(points)?;
        rasterize(
            &curve,
            surface,
            self.config.naive_channel,
            self.config.naive_step,
            Evaluator::Bernstein,
        )
    }

    /// De Casteljau pass: fine steps into the de Casteljau channel.
    pub fn decasteljau(&self, points: &[Point], surface: &mut Surface) -> Result<PassStats> {
        let curve = CubicCurve::new(points)?;
        rasterize(
            &curve,
            surface,
            self.config.castlejau_channel,
            self.config.castlejau_step,
            Evaluator::DeCasteljau,
        )
    }

    /// De Casteljau pass smoothed by the 2x2 box filter.
    pub fn antialiased(&self, points: &[Point], surface: &mut Surface) -> Result<AntialiasStats> {
        let curve = CubicCurve::new(points)?;
        antialias::antialias(&curve, surface, &self.config)
    }

    /// Mark the control points with white discs.
    pub fn control_points(&self, points: &[Point], surface: &mut Surface) -> usize {
        draw_control_points(points, surface, self.config.handle_radius, Rgb::WHITE)
    }
}

/// Draw the curve through exactly four `points` with the Bernstein polynomial in red.
pub fn rasterize_naive(points: &[Point], surface: &mut Surface) -> Result<PassStats> {
    Rasterizer::default().naive(points, surface)
}

/// Draw the curve through exactly four `points` with de Casteljau's algorithm in green.
pub fn rasterize_decasteljau(points: &[Point], surface: &mut Surface) -> Result<PassStats> {
    Rasterizer::default().decasteljau(points, surface)
}

/// Draw the curve through exactly four `points` in green and smooth it.
pub fn rasterize_antialiased(points: &[Point], surface: &mut Surface) -> Result<AntialiasStats> {
    Rasterizer::default().antialiased(points, surface)
}
