//! Tunables of the rasterization passes.
//!
//! [`RasterConfig::default`] reproduces the classic setup: a coarse red Bernstein pass,
//! a fine green de Casteljau pass and a 6 pixel margin around the filtered region.
//! Every field can be overridden from a serialized config, missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::surface::Channel;

/// How the anti-aliasing filter obtains its four sub-samples per pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Sample the 1x surface at quarter pixel offsets.
    ///
    /// Offsets within the same cell truncate to the same stored pixel, so pixels only blend
    /// with their neighbours when the filtered region starts at a fractional position.
    Compatible,

    /// Draw the curve into a 2x backing buffer and average each 2x2 block.
    #[default]
    Supersampled,
}

/// Parameters shared by all passes of a [`Rasterizer`](crate::raster::Rasterizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Parameter increment of the Bernstein pass
    pub naive_step: f64,
    /// Parameter increment of the de Casteljau and anti-aliased passes
    pub castlejau_step: f64,
    /// Channel the Bernstein pass lights up
    pub naive_channel: Channel,
    /// Channel the de Casteljau and anti-aliased passes light up
    pub castlejau_channel: Channel,
    /// Padding around the control points' bounding box scoping the filter
    pub margin: f64,
    /// Sub-sampling strategy of the filter
    pub filter: FilterMode,
    /// Radius of the discs marking control points
    pub handle_radius: f64,
}

impl Default for RasterConfig {
    fn default() -> Self {
        RasterConfig {
            naive_step: 0.001,
            castlejau_step: 0.0001,
            naive_channel: Channel::Red,
            castlejau_channel: Channel::Green,
            margin: 6.0,
            filter: FilterMode::default(),
            handle_radius: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RasterConfig =
            serde_json::from_str(r#"{ "filter": "compatible", "naive_channel": "blue" }"#).unwrap();
        assert_eq!(config.filter, FilterMode::Compatible);
        assert_eq!(config.naive_channel, Channel::Blue);
        assert_eq!(config.castlejau_step, 0.0001);
        assert_eq!(config.margin, 6.0);
    }
}
