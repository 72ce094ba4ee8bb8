//! Errors reported by the evaluators, the surface and the rasterizer.

use thiserror::Error;

/// Everything that can go wrong while evaluating or rasterizing a curve.
///
/// Geometry is deterministic, so none of these are worth retrying:
/// they stem either from malformed input or from a coordinate leaving the surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// The wrong number of control points was handed to an entry point.
    #[error("expected {expected} control points, got {actual}")]
    InvalidControlPoints {
        /// Number of points the entry point requires (`1` means "at least one")
        expected: usize,
        /// Number of points actually supplied
        actual: usize,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite")]
    NonFiniteControlPoint {
        /// Position of the offending point in the input sequence
        index: usize,
    },

    /// A coordinate falls outside the surface's addressable grid.
    #[error("({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        /// Requested column, before quantization
        x: f64,
        /// Requested row, before quantization
        y: f64,
        /// Surface width in pixels
        width: usize,
        /// Surface height in pixels
        height: usize,
    },

    /// The parameter step of a sweep is not within `(0, 1]`.
    #[error("parameter step {0} is not within (0, 1]")]
    InvalidStep(f64),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, RasterError>;
