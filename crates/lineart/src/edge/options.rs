//! Edge extraction options.
//!
//! This module provides the [`EdgeOptions`] struct for configuring the
//! line-art pipeline.

use serde::{Deserialize, Serialize};

/// Default edge intensity. Recommended range is 30–38.
pub const DEFAULT_INTENSITY: i32 = 34;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_OUTPUT_WIDTH: u32 = 900;

/// Default range sigma of the denoise kernel, in intensity levels.
pub const DEFAULT_RANGE_SIGMA: f32 = 18.0;

/// Configuration for [`EdgeExtractor`](super::EdgeExtractor).
///
/// # Defaults
///
/// - Intensity: 34 (higher keeps more, fainter edges)
/// - Max output width: 900 px
/// - Range sigma: 18 (denoise similarity falloff)
///
/// # Example
///
/// ```
/// use lineart::EdgeOptions;
///
/// let options = EdgeOptions::new()
///     .intensity(38)
///     .max_output_width(600);
///
/// assert_eq!(options.intensity, 38);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Edge intensity, roughly 20..=50. Controls the hysteresis percentile.
    pub intensity: i32,

    /// Upper bound of the output width. Smaller sources are not upscaled.
    pub max_output_width: u32,

    /// Range sigma of the edge-preserving denoise.
    pub range_sigma: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            max_output_width: DEFAULT_MAX_OUTPUT_WIDTH,
            range_sigma: DEFAULT_RANGE_SIGMA,
        }
    }
}

impl EdgeOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge intensity.
    #[inline]
    pub fn intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the maximum output width.
    #[inline]
    pub fn max_output_width(mut self, width: u32) -> Self {
        self.max_output_width = width;
        self
    }

    /// Set the denoise range sigma.
    #[inline]
    pub fn range_sigma(mut self, sigma: f32) -> Self {
        self.range_sigma = sigma;
        self
    }
}
