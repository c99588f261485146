//! Line-art extraction
//!
//! [`EdgeExtractor`] runs a Canny-style pipeline on a supersampled working
//! canvas:
//!
//! 1. Resample to twice the target size (triangle filter)
//! 2. Rec. 709 grayscale, transparency composited over white
//! 3. 3×3 range-only bilateral denoise
//! 4. Sobel gradient and non-maximum suppression
//! 5. Percentile dual thresholds driven by `intensity`
//! 6. Hysteresis linking to a fixed point
//! 7. One 3×3 majority seal pass
//! 8. Render black on white and downscale with Lanczos3
//!
//! Every stage reads the previous stage's field and allocates a new one.
//! The individual stages are public so they can be inspected in isolation.

mod denoise;
mod extractor;
mod gradient;
mod hysteresis;
mod options;
mod threshold;

pub use denoise::{denoise, grayscale};
pub use extractor::EdgeExtractor;
pub use gradient::{non_max_suppression, sobel, Gradient};
pub use hysteresis::{EdgeMap, EdgeState};
pub use options::{EdgeOptions, DEFAULT_INTENSITY, DEFAULT_MAX_OUTPUT_WIDTH, DEFAULT_RANGE_SIGMA};
pub use threshold::{high_percentile, percentile_thresholds, Thresholds};
