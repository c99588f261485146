//! Reference palettes and perceptual matching
//!
//! A [`ReferencePalette`] is built once from externally loaded
//! [`PaletteEntry`] values and precomputes Lab for every entry, so matching
//! many colors never repeats a conversion. [`PaletteMatcher`] ranks the
//! nearest entries for each input color.

mod entry;
mod error;
mod matcher;
mod palette;

pub use entry::PaletteEntry;
pub use error::{PaletteError, ParseColorError};
pub use matcher::{DistanceMetric, MatchResult, PaletteMatch, PaletteMatcher, MAX_TOP_K};
pub use palette::ReferencePalette;
