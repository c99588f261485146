//! DominantColorExtractor builder.

use image::imageops::FilterType;
use rand::Rng;

use super::kmeans::{cluster_count, kmeans, Cluster};
use super::options::DominantOptions;
use super::sampling::{opaque_samples, subject_samples};
use crate::api::LineArtError;
use crate::color::Rgb;
use crate::raster::{fit_width, resize_rgba, PixelBuffer};

/// Squared sRGB distance under which a later color counts as a duplicate.
const DEDUP_TOLERANCE_SQ: u32 = 8 * 8;

/// Smallest number of colors the result may be truncated to.
const MIN_RESULT_LEN: usize = 3;

/// Finds the most prominent subject colors of an image.
///
/// Paper-white and near-black pixels are ignored, the remaining samples are
/// clustered with k-means++, and cluster centers are returned as lowercase
/// `#rrggbb` strings, most common first.
///
/// Seeding is random. Use [`extract_with_rng`](Self::extract_with_rng) with
/// a seeded generator for reproducible output.
///
/// # Example
///
/// ```
/// use lineart::{DominantColorExtractor, PixelBuffer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let samples = [0x33, 0x66, 0x99, 0xff].repeat(64 * 64);
/// let buffer = PixelBuffer::new(64, 64, &samples).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let colors = DominantColorExtractor::new()
///     .k(5)
///     .extract_with_rng(&buffer, &mut rng)
///     .unwrap();
///
/// assert_eq!(colors, vec!["#336699".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DominantColorExtractor {
    options: DominantOptions,
}

impl DominantColorExtractor {
    /// Create an extractor with default options (k = 10).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from a complete options struct.
    pub fn with_options(options: DominantOptions) -> Self {
        Self { options }
    }

    /// Set the requested number of colors.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.options = self.options.k(k);
        self
    }

    /// The active options.
    #[inline]
    pub fn options(&self) -> &DominantOptions {
        &self.options
    }

    /// Extract dominant colors using the thread-local random generator.
    pub fn extract(&self, buffer: &PixelBuffer<'_>) -> Result<Vec<String>, LineArtError> {
        self.extract_with_rng(buffer, &mut rand::thread_rng())
    }

    /// Extract dominant colors, seeding k-means++ from `rng`.
    ///
    /// # Errors
    ///
    /// - [`LineArtError::InvalidInput`] if `k` or `max_sample_width` is zero
    /// - [`LineArtError::EmptySampleSet`] if every pixel is near-transparent
    pub fn extract_with_rng<R: Rng + ?Sized>(
        &self,
        buffer: &PixelBuffer<'_>,
        rng: &mut R,
    ) -> Result<Vec<String>, LineArtError> {
        let colors = self.extract_rgb_with_rng(buffer, rng)?;
        Ok(colors.into_iter().map(Rgb::to_hex).collect())
    }

    /// Like [`extract_with_rng`](Self::extract_with_rng), returning colors
    /// instead of hex strings.
    pub fn extract_rgb_with_rng<R: Rng + ?Sized>(
        &self,
        buffer: &PixelBuffer<'_>,
        rng: &mut R,
    ) -> Result<Vec<Rgb>, LineArtError> {
        let k = self.options.k;
        if k == 0 {
            return Err(LineArtError::invalid(
                "dominant colors",
                "k must be greater than zero",
            ));
        }
        if self.options.max_sample_width == 0 {
            return Err(LineArtError::invalid(
                "dominant colors",
                "max_sample_width must be greater than zero",
            ));
        }

        let (w, h) = fit_width(buffer.width(), buffer.height(), self.options.max_sample_width);
        let small = resize_rgba(buffer, w, h, FilterType::Triangle)?;

        let opaque = opaque_samples(&small);
        if opaque.is_empty() {
            return Err(LineArtError::EmptySampleSet {
                stage: "alpha filter",
                inspected: (w as usize) * (h as usize),
            });
        }

        let mut samples = subject_samples(&opaque);
        if samples.is_empty() {
            tracing::debug!(
                opaque = opaque.len(),
                "Subject filter removed every sample, clustering unfiltered pixels"
            );
            samples = opaque;
        }

        let clusters = cluster_count(k, samples.len());
        let mut centers = kmeans(&samples, clusters, rng);
        // Stable: equal weights keep seeding order
        centers.sort_by(|a, b| b.weight.cmp(&a.weight));
        tracing::debug!(
            samples = samples.len(),
            clusters,
            "Clustered dominant colors"
        );

        let mut colors = dedup_first_occurrence(&centers);
        colors.truncate(MIN_RESULT_LEN.max(k));
        Ok(colors)
    }
}

/// Drop every color that lies within tolerance of any earlier color.
///
/// Each entry is compared against all earlier entries, dropped ones
/// included, so a chain of small steps can remove colors that differ from
/// every kept color by more than the tolerance.
fn dedup_first_occurrence(clusters: &[Cluster]) -> Vec<Rgb> {
    let colors: Vec<Rgb> = clusters.iter().map(Cluster::rgb).collect();
    colors
        .iter()
        .enumerate()
        .filter(|&(i, &color)| {
            colors
                .iter()
                .position(|&other| other.distance_squared(color) <= DEDUP_TOLERANCE_SQ)
                == Some(i)
        })
        .map(|(_, &color)| color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cluster(r: u8, g: u8, b: u8, weight: usize) -> Cluster {
        Cluster {
            center: [r as f64, g as f64, b as f64],
            weight,
        }
    }

    #[test]
    fn test_dedup_drops_near_duplicates() {
        let clusters = [
            cluster(100, 100, 100, 9),
            cluster(104, 104, 100, 5),
            cluster(200, 0, 0, 3),
        ];
        assert_eq!(
            dedup_first_occurrence(&clusters),
            vec![Rgb::new(100, 100, 100), Rgb::new(200, 0, 0)]
        );
    }

    #[test]
    fn test_dedup_compares_against_dropped_entries() {
        // 0 -> 6 -> 12 on red: 12 is 12 away from the only kept color but
        // within 8 of the dropped 6, so it goes too
        let clusters = [
            cluster(0, 50, 50, 3),
            cluster(6, 50, 50, 2),
            cluster(12, 50, 50, 1),
        ];
        assert_eq!(dedup_first_occurrence(&clusters), vec![Rgb::new(0, 50, 50)]);
    }

    #[test]
    fn test_dedup_boundary_is_inclusive() {
        let clusters = [cluster(0, 0, 0, 2), cluster(8, 0, 0, 1), cluster(17, 0, 0, 1)];
        // (8,0,0) is exactly 8 away and dropped; (17,0,0) is 9 from (8,0,0)
        assert_eq!(
            dedup_first_occurrence(&clusters),
            vec![Rgb::new(0, 0, 0), Rgb::new(17, 0, 0)]
        );
    }

    #[test]
    fn test_k_zero_rejected() {
        let samples = [10u8, 20, 30, 255];
        let buffer = PixelBuffer::new(1, 1, &samples).unwrap();
        let err = DominantColorExtractor::new().k(0).extract(&buffer).unwrap_err();
        assert!(matches!(err, LineArtError::InvalidInput { .. }));
    }

    #[test]
    fn test_fully_transparent_is_empty_sample_set() {
        let samples = [0u8, 0, 0, 0].repeat(16);
        let buffer = PixelBuffer::new(4, 4, &samples).unwrap();
        let err = DominantColorExtractor::new().extract(&buffer).unwrap_err();
        assert_eq!(
            err,
            LineArtError::EmptySampleSet {
                stage: "alpha filter",
                inspected: 16
            }
        );
    }

    #[test]
    fn test_paper_only_falls_back_to_unfiltered() {
        let samples = [252u8, 252, 252, 255].repeat(100);
        let buffer = PixelBuffer::new(10, 10, &samples).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let colors = DominantColorExtractor::new()
            .extract_with_rng(&buffer, &mut rng)
            .unwrap();
        assert_eq!(colors, vec!["#fcfcfc".to_string()]);
    }

    #[test]
    fn test_two_color_image_orders_by_weight() {
        // 3/4 orange, 1/4 teal
        let mut samples = Vec::new();
        for _y in 0..40 {
            for x in 0..40 {
                let px = if x < 30 {
                    [230, 120, 20, 255]
                } else {
                    [20, 140, 140, 255]
                };
                samples.extend_from_slice(&px);
            }
        }
        let buffer = PixelBuffer::new(40, 40, &samples).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let colors = DominantColorExtractor::new()
            .k(4)
            .extract_with_rng(&buffer, &mut rng)
            .unwrap();

        assert!(colors.len() <= 4);
        assert_eq!(colors[0], "#e67814");
        assert!(colors.contains(&"#148c8c".to_string()));
    }

    #[test]
    fn test_downscales_wide_sources() {
        let samples = [200u8, 30, 30, 255].repeat(1000 * 2);
        let buffer = PixelBuffer::new(1000, 2, &samples).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let colors = DominantColorExtractor::new()
            .extract_rgb_with_rng(&buffer, &mut rng)
            .unwrap();
        assert_eq!(colors, vec![Rgb::new(200, 30, 30)]);
    }
}
