//! Unified error type for the lineart public API.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the lineart public API.
///
/// Every variant carries enough context (stage, offending value) to diagnose
/// a failure without re-running the pipeline.
///
/// # Example
///
/// ```
/// use lineart::{LineArtError, PixelBuffer};
///
/// let err = PixelBuffer::new(0, 10, &[]).unwrap_err();
/// assert!(matches!(err, LineArtError::InvalidInput { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineArtError {
    /// Zero-sized or malformed input, rejected before any stage runs
    #[error("invalid input ({stage}): {reason}")]
    InvalidInput {
        /// Stage that rejected the input
        stage: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Every pixel was discarded during sampling
    #[error("no usable samples after {stage} ({inspected} pixels inspected)")]
    EmptySampleSet {
        /// Stage that ended with nothing left
        stage: &'static str,
        /// Number of pixels looked at
        inspected: usize,
    },

    /// Malformed hex color
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Invalid reference palette
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

impl LineArtError {
    pub(crate) fn invalid(stage: &'static str, reason: impl Into<String>) -> Self {
        LineArtError::InvalidInput {
            stage,
            reason: reason.into(),
        }
    }
}
