//! A single reference palette entry.

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;
use crate::color::Rgb;

/// One named color of a reference palette (e.g. a thread or paint range).
///
/// `rgb` is optional precomputed data; when present it takes precedence over
/// parsing `hex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Numeric catalogue id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Hex color string as published by the palette source
    pub hex: String,
    /// Optional precomputed sRGB value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Rgb>,
}

impl PaletteEntry {
    /// Create an entry without a precomputed color.
    pub fn new(id: u32, name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hex: hex.into(),
            rgb: None,
        }
    }

    /// Attach a precomputed sRGB value.
    pub fn with_rgb(mut self, rgb: Rgb) -> Self {
        self.rgb = Some(rgb);
        self
    }

    /// The entry's sRGB color, from `rgb` if present, otherwise parsed from `hex`.
    pub fn color(&self) -> Result<Rgb, ParseColorError> {
        match self.rgb {
            Some(rgb) => Ok(rgb),
            None => self.hex.parse(),
        }
    }
}
