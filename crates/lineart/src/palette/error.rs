//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length in {0:?} (expected 3 or 6 hex digits)")]
    InvalidLength(String),

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for reference palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// Two entries share the same id
    #[error("duplicate palette id {id}")]
    DuplicateId {
        /// The repeated id
        id: u32,
    },

    /// An entry's hex string could not be parsed
    #[error("palette entry {id} ({name}) has an invalid color: {source}")]
    InvalidColor {
        /// Id of the offending entry
        id: u32,
        /// Name of the offending entry
        name: String,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
