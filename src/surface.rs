//! A fixed size grid of RGB pixels with bounds checked access.
//!
//! Pixels are stored in a [`DMatrix`] whose rows are the surface's rows,
//! so `(x, y)` addresses the matrix entry `(y, x)`.
//!
//! Real valued coordinates are quantized by truncation toward zero, the same rule
//! array indexing uses. The addressable extent is `[0, width) x [0, height)`:
//! anything outside it (including `-0.5` or NaN) is [`RasterError::OutOfBounds`].

use std::ops::{Index, IndexMut};

use nalgebra::DMatrix;
use num::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::point::Point;

/// An 8-bit RGB triple, stored in the channel order `[r, g, b]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// All channels off
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// All channels at full intensity
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
}

/// One of the three color channels of a [`Rgb`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// `Rgb.0[0]`
    Red,
    /// `Rgb.0[1]`
    Green,
    /// `Rgb.0[2]`
    Blue,
}

impl Channel {
    /// Position of the channel inside [`Rgb`]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl Index<Channel> for Rgb {
    type Output = u8;
    fn index(&self, channel: Channel) -> &u8 {
        &self.0[channel.index()]
    }
}
impl IndexMut<Channel> for Rgb {
    fn index_mut(&mut self, channel: Channel) -> &mut u8 {
        &mut self.0[channel.index()]
    }
}

/// The raster every pass draws into.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pixels: DMatrix<Rgb>,
}

impl Surface {
    /// Create a black surface of the given size.
    pub fn new(width: usize, height: usize) -> Surface {
        Surface::filled(width, height, Rgb::BLACK)
    }

    /// Create a surface of the given size with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Surface {
        Surface {
            pixels: DMatrix::from_element(height, width, color),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Set every pixel to black.
    pub fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }

    /// Quantize a real valued coordinate to a pixel index.
    pub fn index(&self, x: f64, y: f64) -> Result<(usize, usize)> {
        match (quantize(x, self.width()), quantize(y, self.height())) {
            (Some(col), Some(row)) => Ok((col, row)),
            _ => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Index of the pixel nearest to `p`, and whether `p` had to be moved onto the surface.
    ///
    /// Fails only if the surface is empty or a coordinate is NaN.
    pub fn clamped_index(&self, p: &Point) -> Result<((usize, usize), bool)> {
        let (width, height) = (self.width(), self.height());
        if let Ok(index) = self.index(p.x, p.y) {
            return Ok((index, false));
        }
        if width == 0 || height == 0 || p.x.is_nan() || p.y.is_nan() {
            return Err(self.out_of_bounds(p.x, p.y));
        }
        let x = num::clamp(p.x, 0.0, (width - 1) as f64);
        let y = num::clamp(p.y, 0.0, (height - 1) as f64);
        Ok((self.index(x, y)?, true))
    }

    /// Read the pixel at a real valued coordinate.
    pub fn get(&self, x: f64, y: f64) -> Result<Rgb> {
        let (col, row) = self.index(x, y)?;
        Ok(self.pixels[(row, col)])
    }

    /// Write the pixel at a real valued coordinate.
    pub fn set(&mut self, x: f64, y: f64, color: Rgb) -> Result<()> {
        let (col, row) = self.index(x, y)?;
        self.pixels[(row, col)] = color;
        Ok(())
    }

    /// Read the pixel in column `col` and row `row`.
    pub fn pixel(&self, col: usize, row: usize) -> Result<Rgb> {
        self.pixels
            .get((row, col))
            .copied()
            .ok_or_else(|| self.out_of_bounds(col as f64, row as f64))
    }

    /// Write the pixel in column `col` and row `row`.
    pub fn set_pixel(&mut self, col: usize, row: usize, color: Rgb) -> Result<()> {
        let err = self.out_of_bounds(col as f64, row as f64);
        let pixel = self.pixels.get_mut((row, col)).ok_or(err)?;
        *pixel = color;
        Ok(())
    }

    /// Overwrite a single channel of the pixel in column `col` and row `row`.
    pub fn set_channel(&mut self, col: usize, row: usize, channel: Channel, value: u8) -> Result<()> {
        let err = self.out_of_bounds(col as f64, row as f64);
        let pixel = self.pixels.get_mut((row, col)).ok_or(err)?;
        pixel[channel] = value;
        Ok(())
    }

    /// Iterate over `((col, row), color)` for every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = ((usize, usize), Rgb)> + '_ {
        let width = self.width();
        (0..self.height())
            .flat_map(move |row| (0..width).map(move |col| (col, row)))
            .map(move |(col, row)| ((col, row), self.pixels[(row, col)]))
    }

    /// Export the surface as row-major RGB8 bytes.
    ///
    /// This is the layout `image::RgbImage` (and most other 8-bit RGB encoders) expect:
    /// three bytes per pixel in the order red, green, blue, rows top to bottom.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width() * self.height() * 3);
        for (_, color) in self.pixels() {
            bytes.extend_from_slice(&color.0);
        }
        bytes
    }

    fn out_of_bounds(&self, x: f64, y: f64) -> RasterError {
        RasterError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Truncate `v` toward zero, if it lies within `[0, len)`.
fn quantize(v: f64, len: usize) -> Option<usize> {
    if v.is_nan() || v < 0.0 {
        return None;
    }
    v.trunc().to_usize().filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::point;

    #[test]
    fn quantize_truncates() {
        assert_eq!(quantize(0.0, 4), Some(0));
        assert_eq!(quantize(0.99, 4), Some(0));
        assert_eq!(quantize(3.999, 4), Some(3));
        assert_eq!(quantize(4.0, 4), None);
        assert_eq!(quantize(-0.5, 4), None);
        assert_eq!(quantize(f64::NAN, 4), None);
        assert_eq!(quantize(f64::INFINITY, 4), None);
    }

    #[test]
    fn addressing() {
        let mut surface = Surface::new(3, 2);
        surface.set(2.7, 1.2, Rgb([1, 2, 3])).unwrap();
        assert_eq!(surface.pixel(2, 1), Ok(Rgb([1, 2, 3])));
        assert_eq!(surface.get(2.0, 1.9), Ok(Rgb([1, 2, 3])));

        assert!(matches!(
            surface.get(3.0, 0.0),
            Err(RasterError::OutOfBounds { width: 3, height: 2, .. })
        ));
        assert!(surface.set_pixel(0, 2, Rgb::WHITE).is_err());
        assert!(surface.pixel(5, 0).is_err());
    }

    #[test]
    fn channels() {
        let mut surface = Surface::new(1, 1);
        surface.set_channel(0, 0, Channel::Green, 255).unwrap();
        surface.set_channel(0, 0, Channel::Blue, 7).unwrap();
        assert_eq!(surface.pixel(0, 0), Ok(Rgb([0, 255, 7])));
    }

    #[test]
    fn clamping() {
        let surface = Surface::new(10, 5);
        assert_eq!(surface.clamped_index(&point(3.5, 2.5)), Ok(((3, 2), false)));
        assert_eq!(surface.clamped_index(&point(10.0, 2.0)), Ok(((9, 2), true)));
        assert_eq!(surface.clamped_index(&point(-4.0, 99.0)), Ok(((0, 4), true)));
        assert!(surface.clamped_index(&point(f64::NAN, 0.0)).is_err());
        assert!(Surface::new(0, 0).clamped_index(&point(0.0, 0.0)).is_err());
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let mut surface = Surface::new(2, 2);
        surface.set_pixel(1, 0, Rgb([1, 2, 3])).unwrap();
        surface.set_pixel(0, 1, Rgb([4, 5, 6])).unwrap();
        assert_eq!(
            surface.to_rgb_bytes(),
            vec![0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]
        );
    }
}
