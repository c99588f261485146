//! Reference palette with precomputed Lab values.
//!
//! Every entry is validated and converted once at construction time, so
//! per-query matching is a linear scan over ready-made Lab values.

use std::collections::HashSet;

use super::entry::PaletteEntry;
use super::error::PaletteError;
use crate::color::{Lab, Rgb};

/// An immutable, validated reference palette.
///
/// Entry order is preserved; it is the tie-breaker when two entries are
/// equally distant from a query color.
///
/// # Example
///
/// ```
/// use lineart::{PaletteEntry, ReferencePalette};
///
/// let palette = ReferencePalette::new(vec![
///     PaletteEntry::new(199, "Black", "#000000"),
///     PaletteEntry::new(1, "White", "#ffffff"),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.entry(0).id, 199);
/// ```
#[derive(Debug, Clone)]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
    rgb: Vec<Rgb>,
    lab: Vec<Lab>,
}

impl ReferencePalette {
    /// Validate entries and precompute their colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateId`] if two entries share an id
    /// - [`PaletteError::InvalidColor`] if an entry has no usable color
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut rgb = Vec::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(PaletteError::DuplicateId { id: entry.id });
            }
            let color = entry.color().map_err(|source| PaletteError::InvalidColor {
                id: entry.id,
                name: entry.name.clone(),
                source,
            })?;
            rgb.push(color);
        }

        let lab = rgb.iter().map(|&c| Lab::from(c)).collect();

        tracing::debug!(entries = entries.len(), "Built reference palette");

        Ok(Self { entries, rgb, lab })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `idx`.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// All entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The sRGB color of the entry at `idx`.
    #[inline]
    pub fn rgb(&self, idx: usize) -> Rgb {
        self.rgb[idx]
    }

    /// The precomputed Lab color of the entry at `idx`.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// Index of the entry with the given id.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}
