//! Dominant-color extraction options.

use serde::{Deserialize, Serialize};

/// Default number of requested colors.
pub const DEFAULT_COLOR_COUNT: usize = 10;

/// Default sampling width. Larger sources are downscaled before sampling.
pub const DEFAULT_MAX_SAMPLE_WIDTH: u32 = 480;

/// Configuration for [`DominantColorExtractor`](super::DominantColorExtractor).
///
/// # Example
///
/// ```
/// use lineart::DominantOptions;
///
/// let options = DominantOptions::new().k(6);
/// assert_eq!(options.k, 6);
/// assert_eq!(options.max_sample_width, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominantOptions {
    /// Requested number of colors. The result holds at most `max(3, k)`.
    pub k: usize,

    /// Sources wider than this are downscaled before sampling.
    pub max_sample_width: u32,
}

impl Default for DominantOptions {
    fn default() -> Self {
        Self {
            k: DEFAULT_COLOR_COUNT,
            max_sample_width: DEFAULT_MAX_SAMPLE_WIDTH,
        }
    }
}

impl DominantOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested number of colors.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the sampling width.
    #[inline]
    pub fn max_sample_width(mut self, width: u32) -> Self {
        self.max_sample_width = width;
        self
    }
}
