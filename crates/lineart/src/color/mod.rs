//! Color types and perceptual distance
//!
//! This module is the single home for color math shared by the palette
//! matcher and the dominant-color pipeline.
//!
//! # Color Spaces
//!
//! - **Rgb**: 8-bit sRGB as found in pixel buffers and hex strings. Use for I/O
//!   and for the k-means clustering distance.
//! - **Lab**: CIE L\*a\*b\* (D65). Use for perceptual distance.
//!
//! # Example
//!
//! ```
//! use lineart::{delta_e2000, Lab, Rgb};
//!
//! let navy: Rgb = "#336699".parse().unwrap();
//! let lab = Lab::from(navy);
//!
//! // Back to sRGB for output
//! assert_eq!(Rgb::from(lab), navy);
//! assert_eq!(delta_e2000(lab, lab), 0.0);
//! ```

mod delta_e;
mod lab;
mod rgb;

pub use delta_e::{delta_e2000, delta_e76};
pub use lab::Lab;
pub use rgb::Rgb;
