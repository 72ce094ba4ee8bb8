//! Two independent ways of finding the point on a bezier curve at parameter `t`.
//!
//! - The closed form Bernstein polynomial of a cubic:
//!   $B(t) = (1-t)^3 P_0 + 3t(1-t)^2 P_1 + 3t^2(1-t) P_2 + t^3 P_3$
//! - De Casteljau's algorithm: repeatedly replace `n` points by the `n - 1` points
//!   interpolated between neighbours until a single point remains.
//!
//! Both agree up to floating point rounding, which makes each a check on the other.

use smallvec::SmallVec;

use crate::bounding_box::BoundingBox;
use crate::error::{RasterError, Result};
use crate::point::{is_finite, lerp, Point};

/// Number of control points of a cubic curve
pub const CUBIC_POINTS: usize = 4;

/// Evaluate a cubic curve at `t` using its Bernstein polynomial.
///
/// Fails unless exactly four control points are given.
pub fn evaluate_naive(points: &[Point], t: f64) -> Result<Point> {
    match points {
        [p0, p1, p2, p3] => Ok(bernstein(p0, p1, p2, p3, t)),
        _ => Err(RasterError::InvalidControlPoints {
            expected: CUBIC_POINTS,
            actual: points.len(),
        }),
    }
}

/// Evaluate a bezier curve of any degree at `t` using de Casteljau's algorithm.
///
/// A single point is returned unchanged. Fails for an empty sequence.
pub fn evaluate_decasteljau(points: &[Point], t: f64) -> Result<Point> {
    castlejau(points, t).ok_or(RasterError::InvalidControlPoints {
        expected: 1,
        actual: 0,
    })
}

fn bernstein(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
    let s = 1.0 - t;
    p0 * (s * s * s) + p1 * (3.0 * t * s * s) + p2 * (3.0 * t * t * s) + p3 * (t * t * t)
}

/// Each level is one shorter than the last, so the recursion is `points.len() - 1` deep.
fn castlejau(points: &[Point], t: f64) -> Option<Point> {
    match points {
        [] => None,
        [p] => Some(*p),
        _ => {
            let reduced: SmallVec<[Point; CUBIC_POINTS]> = points
                .windows(2)
                .map(|pair| lerp(&pair[0], &pair[1], t))
                .collect();
            castlejau(&reduced, t)
        }
    }
}

/// Strategy used to turn a parameter into a point on the curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Evaluator {
    /// Closed form cubic polynomial, see [`evaluate_naive`]
    Bernstein,
    /// Recursive interpolation, see [`evaluate_decasteljau`]
    DeCasteljau,
}

impl Evaluator {
    /// Get the point on `curve` at position `t`.
    pub fn evaluate(self, curve: &CubicCurve, t: f64) -> Point {
        match self {
            Evaluator::Bernstein => curve.bernstein_eval(t),
            Evaluator::DeCasteljau => curve.castlejau_eval(t),
        }
    }
}

/// A cubic bezier curve: exactly four ordered, finite control points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCurve([Point; CUBIC_POINTS]);

impl CubicCurve {
    /// Validate the control points and wrap them into a curve.
    pub fn new(points: &[Point]) -> Result<CubicCurve> {
        let points: [Point; CUBIC_POINTS] =
            points
                .try_into()
                .map_err(|_| RasterError::InvalidControlPoints {
                    expected: CUBIC_POINTS,
                    actual: points.len(),
                })?;
        if let Some(index) = points.iter().position(|p| !is_finite(p)) {
            return Err(RasterError::NonFiniteControlPoint { index });
        }
        Ok(CubicCurve(points))
    }

    /// The control points in order
    pub fn points(&self) -> &[Point; CUBIC_POINTS] {
        &self.0
    }

    /// The point the curve starts in, i.e. at `t = 0`
    pub fn start(&self) -> Point {
        self.0[0]
    }

    /// The point the curve ends in, i.e. at `t = 1`
    pub fn end(&self) -> Point {
        self.0[CUBIC_POINTS - 1]
    }

    /// Get the point on the curve at position `t` using the Bernstein polynomial.
    pub fn bernstein_eval(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = &self.0;
        bernstein(p0, p1, p2, p3, t)
    }

    /// Get the point on the curve at position `t` using de Casteljau's algorithm.
    pub fn castlejau_eval(&self, t: f64) -> Point {
        // Four points always reduce to one
        castlejau(&self.0, t).unwrap_or(self.0[0])
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// By the convex hull property it contains the whole curve as well.
    pub fn bounding_box(&self) -> BoundingBox {
        let [p0, p1, p2, p3] = self.0;
        let min = p0.inf(&p1).inf(&p2).inf(&p3);
        let max = p0.sup(&p1).sup(&p2).sup(&p3);
        BoundingBox { min, max }
    }
}

impl TryFrom<&[Point]> for CubicCurve {
    type Error = RasterError;
    fn try_from(points: &[Point]) -> Result<CubicCurve> {
        CubicCurve::new(points)
    }
}
