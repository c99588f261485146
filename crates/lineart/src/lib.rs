//! lineart: coloring-book line art and color analysis for photographs
//!
//! This library turns a decoded RGBA image into clean black-on-white line
//! art, finds the image's dominant subject colors, and matches colors
//! against a reference palette such as a set of marker or pencil colors.
//!
//! All three pipelines are synchronous, pure functions over borrowed input.
//! Decoding, encoding and palette loading are the caller's business.
//!
//! # Quick Start
//!
//! ```
//! use lineart::{EdgeExtractor, PixelBuffer};
//!
//! let samples = vec![255u8; 32 * 16 * 4];
//! let buffer = PixelBuffer::new(32, 16, &samples).unwrap();
//!
//! let art = EdgeExtractor::new()
//!     .intensity(34)
//!     .max_output_width(900)
//!     .extract(&buffer)
//!     .unwrap();
//!
//! // Never upscaled
//! assert_eq!((art.width(), art.height()), (32, 16));
//! ```
//!
//! # Palette Matching
//!
//! ```
//! use lineart::{DistanceMetric, PaletteEntry, PaletteMatcher, ReferencePalette};
//!
//! let palette = ReferencePalette::new(vec![
//!     PaletteEntry::new(199, "Black", "#000000"),
//!     PaletteEntry::new(101, "White", "#ffffff"),
//! ])
//! .unwrap();
//!
//! let matcher = PaletteMatcher::new(&palette).metric(DistanceMetric::DeltaE2000);
//! let result = matcher.match_color("#0a0a0a", 1).unwrap();
//! assert_eq!(result.matches[0].entry.id, 199);
//! ```
//!
//! # Pipelines
//!
//! - [`EdgeExtractor`]: supersampled Canny-style tracing with percentile
//!   thresholds. Deterministic.
//! - [`DominantColorExtractor`]: filtered k-means++ in sRGB. Randomness is
//!   injected through [`rand::Rng`].
//! - [`PaletteMatcher`]: ΔE76 or CIEDE2000 ranking against a
//!   [`ReferencePalette`] with precomputed Lab.
//!
//! # Color Science
//!
//! Lab conversions use the sRGB transfer curve, the standard sRGB→XYZ
//! matrix and the D65 white point. [`delta_e2000`] implements the full
//! CIEDE2000 formula with unit weighting factors. Both pipelines that need
//! color math share the [`color`] module.

pub mod api;
pub mod color;
pub mod dominant;
pub mod edge;
pub mod output;
pub mod palette;
pub mod raster;


pub use api::LineArtError;
pub use color::{delta_e2000, delta_e76, Lab, Rgb};
pub use dominant::{DominantColorExtractor, DominantOptions};
pub use edge::{EdgeExtractor, EdgeMap, EdgeOptions, EdgeState};
pub use output::LineArt;
pub use palette::{
    DistanceMetric, MatchResult, PaletteEntry, PaletteError, PaletteMatch, PaletteMatcher,
    ParseColorError, ReferencePalette,
};
pub use raster::{PixelBuffer, ScalarField};
