//! Public error surface for the lineart crate.
//!
//! [`LineArtError`] wraps every failure the pipelines can report into a
//! single enum for convenient `?` propagation in application code.

mod error;

pub use error::LineArtError;
