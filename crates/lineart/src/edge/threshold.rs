//! Percentile-based dual thresholds.

use crate::raster::ScalarField;

/// Lower bound of the high-threshold percentile.
const MIN_HIGH_PERCENTILE: f32 = 0.82;

/// Upper bound of the high-threshold percentile.
const MAX_HIGH_PERCENTILE: f32 = 0.92;

/// Percentile step per intensity unit above 30.
const PERCENTILE_PER_INTENSITY: f32 = 0.005;

/// The low threshold sits at this fraction of the high percentile.
const LOW_PERCENTILE_RATIO: f32 = 0.55;

/// Hysteresis thresholds in gradient-magnitude units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thresholds {
    pub high: f32,
    pub low: f32,
}

/// High-threshold percentile for an intensity setting, in `[0.82, 0.92]`.
#[inline]
pub fn high_percentile(intensity: i32) -> f32 {
    (MIN_HIGH_PERCENTILE + intensity.saturating_sub(30) as f32 * PERCENTILE_PER_INTENSITY)
        .clamp(MIN_HIGH_PERCENTILE, MAX_HIGH_PERCENTILE)
}

#[inline]
fn percentile_index(p: f32, n: usize) -> usize {
    ((p * n as f32).floor() as usize).min(n - 1)
}

/// Derive thresholds from the distribution of nonzero thinned magnitudes.
///
/// Returns `{high: 0, low: 0}` when no magnitude is nonzero.
pub fn percentile_thresholds(nms: &ScalarField<f32>, intensity: i32) -> Thresholds {
    let mut values: Vec<f32> = nms.as_slice().iter().copied().filter(|&m| m > 0.0).collect();
    if values.is_empty() {
        return Thresholds::default();
    }
    values.sort_unstable_by(f32::total_cmp);

    let hi_pct = high_percentile(intensity);
    let n = values.len();
    Thresholds {
        high: values[percentile_index(hi_pct, n)],
        low: values[percentile_index(hi_pct * LOW_PERCENTILE_RATIO, n)],
    }
}
