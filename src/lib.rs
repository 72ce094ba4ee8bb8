#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod antialias;
pub mod bounding_box;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod point;
pub mod raster;
pub mod session;
pub mod surface;

pub use crate::config::{FilterMode, RasterConfig};
pub use crate::error::{RasterError, Result};
pub use crate::evaluate::{evaluate_decasteljau, evaluate_naive, CubicCurve, Evaluator};
pub use crate::point::{point, Point};
pub use crate::raster::{rasterize_antialiased, rasterize_decasteljau, rasterize_naive, Rasterizer};
pub use crate::session::CurveSession;
pub use crate::surface::{Channel, Rgb, Surface};
