//! Nearest-entry ranking against a [`ReferencePalette`].

use serde::{Deserialize, Serialize};

use super::entry::PaletteEntry;
use super::palette::ReferencePalette;
use crate::api::LineArtError;
use crate::color::{delta_e2000, delta_e76, Lab, Rgb};

/// Upper bound for the number of matches returned per color.
pub const MAX_TOP_K: usize = 5;

/// Distance function used to rank palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// CIE76: Euclidean distance in Lab. Fast, less uniform in saturated blues.
    #[serde(rename = "de76", alias = "deltaE76")]
    DeltaE76,

    /// CIEDE2000 with unit weights. Perceptually accurate.
    #[default]
    #[serde(rename = "de2000", alias = "deltaE2000")]
    DeltaE2000,
}

impl DistanceMetric {
    /// Distance between two Lab colors under this metric.
    #[inline]
    pub fn distance(self, a: Lab, b: Lab) -> f64 {
        match self {
            DistanceMetric::DeltaE76 => delta_e76(a, b),
            DistanceMetric::DeltaE2000 => delta_e2000(a, b),
        }
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de76" | "deltae76" | "cie76" => Ok(DistanceMetric::DeltaE76),
            "de2000" | "deltae2000" | "ciede2000" => Ok(DistanceMetric::DeltaE2000),
            other => Err(format!("unknown distance metric {other:?} (expected de76 or de2000)")),
        }
    }
}

/// One ranked palette entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteMatch {
    /// The matched palette entry
    pub entry: PaletteEntry,
    /// Perceptual distance from the source color
    pub distance: f64,
}

/// The ranked matches for one source color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// The source color as given by the caller
    pub source: String,
    /// Matches in ascending distance order, at most `top_k` long
    pub matches: Vec<PaletteMatch>,
}

impl MatchResult {
    /// The closest match, if any.
    pub fn best(&self) -> Option<&PaletteMatch> {
        self.matches.first()
    }
}

/// Ranks reference palette entries by perceptual distance.
///
/// # Example
///
/// ```
/// use lineart::{DistanceMetric, PaletteEntry, PaletteMatcher, ReferencePalette};
///
/// let palette = ReferencePalette::new(vec![
///     PaletteEntry::new(199, "Black", "#000000"),
///     PaletteEntry::new(1, "White", "#ffffff"),
/// ])
/// .unwrap();
///
/// let matcher = PaletteMatcher::new(&palette).metric(DistanceMetric::DeltaE2000);
/// let results = matcher.match_colors(&["#000000"], 1).unwrap();
///
/// assert_eq!(results[0].matches.len(), 1);
/// assert_eq!(results[0].matches[0].entry.id, 199);
/// assert!(results[0].matches[0].distance < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PaletteMatcher<'a> {
    palette: &'a ReferencePalette,
    metric: DistanceMetric,
}

impl<'a> PaletteMatcher<'a> {
    /// Create a matcher using CIEDE2000.
    pub fn new(palette: &'a ReferencePalette) -> Self {
        Self {
            palette,
            metric: DistanceMetric::default(),
        }
    }

    /// Select the distance metric.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The configured metric.
    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Rank the `top_k` nearest entries to `color`.
    ///
    /// `top_k` is clamped to `1..=MAX_TOP_K`. Equal distances keep palette
    /// order.
    pub fn rank(&self, color: Rgb, top_k: usize) -> Vec<PaletteMatch> {
        let top_k = top_k.clamp(1, MAX_TOP_K);
        let query = Lab::from(color);

        let mut scored: Vec<(usize, f64)> = (0..self.palette.len())
            .map(|idx| (idx, self.metric.distance(query, self.palette.lab(idx))))
            .collect();
        // sort_by is stable: ties keep palette order
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        scored
            .into_iter()
            .take(top_k)
            .map(|(idx, distance)| PaletteMatch {
                entry: self.palette.entry(idx).clone(),
                distance,
            })
            .collect()
    }

    /// Match a single hex color.
    pub fn match_color(&self, hex: &str, top_k: usize) -> Result<MatchResult, LineArtError> {
        let color: Rgb = hex.parse()?;
        Ok(MatchResult {
            source: hex.to_string(),
            matches: self.rank(color, top_k),
        })
    }

    /// Match every hex color in `source_hexes`, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`LineArtError::ParseColor`] for the first malformed hex.
    pub fn match_colors<S: AsRef<str>>(
        &self,
        source_hexes: &[S],
        top_k: usize,
    ) -> Result<Vec<MatchResult>, LineArtError> {
        let results = source_hexes
            .iter()
            .map(|hex| self.match_color(hex.as_ref(), top_k))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            colors = results.len(),
            palette = self.palette.len(),
            metric = ?self.metric,
            "Matched colors against palette"
        );

        Ok(results)
    }
}
