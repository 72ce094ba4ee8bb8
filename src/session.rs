//! Collects the control points of one curve as the user clicks them.

use log::{info, warn};
use smallvec::SmallVec;

use crate::evaluate::{CubicCurve, CUBIC_POINTS};
use crate::point::{point, Point};

/// The clicked control points of the curve being built, in click order.
///
/// The shell owns the session and hands its points to the rasterizer once it is complete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveSession {
    points: SmallVec<[Point; CUBIC_POINTS]>,
}

impl CurveSession {
    /// An empty session
    pub fn new() -> CurveSession {
        CurveSession::default()
    }

    /// Record a click at `(x, y)`.
    ///
    /// Returns `false` and ignores the click once four points are recorded.
    pub fn push(&mut self, x: f64, y: f64) -> bool {
        if self.is_complete() {
            warn!("ignoring click at ({}, {}), the curve is complete", x, y);
            return false;
        }
        info!("control point {} at ({}, {})", self.points.len(), x, y);
        self.points.push(point(x, y));
        true
    }

    /// Whether all four control points are recorded
    pub fn is_complete(&self) -> bool {
        self.points.len() == CUBIC_POINTS
    }

    /// The points recorded so far
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The curve, once it is complete and its points are valid
    pub fn curve(&self) -> Option<CubicCurve> {
        if !self.is_complete() {
            return None;
        }
        CubicCurve::new(&self.points).ok()
    }

    /// Forget every recorded point.
    pub fn reset(&mut self) {
        self.points.clear();
    }
}
