//! Raster containers shared by both pipelines.
//!
//! - [`PixelBuffer`]: borrowed, validated RGBA input.
//! - [`ScalarField`]: dense per-stage intermediate (intensity, magnitude, angle).
//!
//! Resampling goes through the `image` crate's filters: triangle (bilinear)
//! when preparing working canvases, Lanczos3 for the final anti-aliasing
//! downscale.

mod field;
mod pixel_buffer;
mod resize;

pub use field::ScalarField;
pub use pixel_buffer::PixelBuffer;
pub(crate) use resize::{fit_width, resize_rgba};
