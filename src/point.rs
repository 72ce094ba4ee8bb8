//! 2D points in surface pixel space.
//!
//! Points are plain [`nalgebra::Vector2`]s: `a + b` adds componentwise and `p * s` scales.

use nalgebra::Vector2;

/// A coordinate `(x, y)` in pixel space. `x` grows to the right and `y` downwards.
pub type Point = Vector2<f64>;

/// Construct a point from its coordinates.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Linear interpolation `(1 - t) * a + t * b`.
///
/// Returns `a` exactly for `t = 0` and `b` exactly for `t = 1`.
#[inline]
pub fn lerp(a: &Point, b: &Point, t: f64) -> Point {
    a * (1.0 - t) + b * t
}

/// Whether both coordinates are finite.
#[inline]
pub fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
