//! Output types for the line-art pipeline.
//!
//! [`LineArt`] is the final anti-aliased raster: black edges on a white,
//! fully opaque background, in the same RGBA layout as the input
//! [`PixelBuffer`](crate::raster::PixelBuffer).

mod line_art;

pub use line_art::LineArt;
