//! EdgeExtractor builder -- the entry point of the line-art pipeline.

use image::imageops::{self, FilterType};

use super::denoise::{denoise, grayscale};
use super::gradient::{non_max_suppression, sobel};
use super::hysteresis::EdgeMap;
use super::options::EdgeOptions;
use super::threshold::percentile_thresholds;
use crate::api::LineArtError;
use crate::output::LineArt;
use crate::raster::{fit_width, resize_rgba, PixelBuffer};

/// Working canvas scale relative to the output.
const SUPERSAMPLE: u32 = 2;

/// Converts photographs into clean black-on-white line art.
///
/// The source is resampled onto a canvas twice the output size, traced
/// there, and downscaled with Lanczos3 so line borders come out
/// anti-aliased. `extract` takes `&self`, so one extractor can process any
/// number of images. Identical input and options always give identical
/// output.
///
/// # Example
///
/// ```
/// use lineart::{EdgeExtractor, PixelBuffer};
///
/// // Left half black, right half white
/// let mut samples = Vec::new();
/// for _y in 0..20 {
///     for x in 0..40 {
///         let v = if x < 20 { 0 } else { 255 };
///         samples.extend_from_slice(&[v, v, v, 255]);
///     }
/// }
/// let buffer = PixelBuffer::new(40, 20, &samples).unwrap();
///
/// let art = EdgeExtractor::new()
///     .intensity(36)
///     .max_output_width(30)
///     .extract(&buffer)
///     .unwrap();
///
/// assert_eq!((art.width(), art.height()), (30, 15));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeExtractor {
    options: EdgeOptions,
}

impl EdgeExtractor {
    /// Create an extractor with default options (intensity 34, 900 px).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from a complete options struct.
    pub fn with_options(options: EdgeOptions) -> Self {
        Self { options }
    }

    /// Set the edge intensity.
    #[inline]
    pub fn intensity(mut self, intensity: i32) -> Self {
        self.options = self.options.intensity(intensity);
        self
    }

    /// Set the maximum output width.
    #[inline]
    pub fn max_output_width(mut self, width: u32) -> Self {
        self.options = self.options.max_output_width(width);
        self
    }

    /// Set the denoise range sigma.
    #[inline]
    pub fn range_sigma(mut self, sigma: f32) -> Self {
        self.options = self.options.range_sigma(sigma);
        self
    }

    /// The active options.
    #[inline]
    pub fn options(&self) -> &EdgeOptions {
        &self.options
    }

    /// Output size for a `width × height` source.
    ///
    /// # Errors
    ///
    /// [`LineArtError::InvalidInput`] if `max_output_width` or either source
    /// dimension is zero.
    pub fn target_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), LineArtError> {
        if self.options.max_output_width == 0 {
            return Err(LineArtError::invalid(
                "edge setup",
                "max_output_width must be greater than zero",
            ));
        }
        if width == 0 || height == 0 {
            return Err(LineArtError::invalid(
                "edge setup",
                format!("zero-sized image {width}x{height}"),
            ));
        }
        Ok(fit_width(width, height, self.options.max_output_width))
    }

    /// Trace `buffer` into anti-aliased line art.
    ///
    /// # Errors
    ///
    /// [`LineArtError::InvalidInput`] if `max_output_width` is zero. Nothing
    /// else can fail once a [`PixelBuffer`] exists.
    pub fn extract(&self, buffer: &PixelBuffer<'_>) -> Result<LineArt, LineArtError> {
        let (target_w, target_h) = self.target_dimensions(buffer.width(), buffer.height())?;
        let map = self.trace(buffer, target_w, target_h)?;

        let canvas = map.render();
        let image = imageops::resize(&canvas, target_w, target_h, FilterType::Lanczos3);
        Ok(LineArt::new(image))
    }

    /// The sealed edge map at working (2×) resolution, before rendering.
    pub fn edge_map(&self, buffer: &PixelBuffer<'_>) -> Result<EdgeMap, LineArtError> {
        let (target_w, target_h) = self.target_dimensions(buffer.width(), buffer.height())?;
        self.trace(buffer, target_w, target_h)
    }

    fn trace(
        &self,
        buffer: &PixelBuffer<'_>,
        target_w: u32,
        target_h: u32,
    ) -> Result<EdgeMap, LineArtError> {
        let work_w = target_w * SUPERSAMPLE;
        let work_h = target_h * SUPERSAMPLE;
        let canvas = resize_rgba(buffer, work_w, work_h, FilterType::Triangle)?;
        tracing::debug!(
            source_w = buffer.width(),
            source_h = buffer.height(),
            work_w,
            work_h,
            "Prepared working canvas"
        );

        let gray = grayscale(&canvas);
        let smooth = denoise(&gray, self.options.range_sigma);
        let gradient = sobel(&smooth);
        let thin = non_max_suppression(&gradient);

        let thresholds = percentile_thresholds(&thin, self.options.intensity);
        tracing::debug!(
            intensity = self.options.intensity,
            high = thresholds.high,
            low = thresholds.low,
            "Derived hysteresis thresholds"
        );

        let mut map = EdgeMap::classify(&thin, thresholds);
        let promoted = map.link();
        let sealed = map.seal();
        tracing::debug!(
            promoted,
            strong = sealed.strong_count(),
            "Linked and sealed edges"
        );

        Ok(sealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat((width * height) as usize)
    }

    #[test]
    fn test_target_dimensions() {
        let extractor = EdgeExtractor::new().max_output_width(400);
        assert_eq!(extractor.target_dimensions(1000, 500).unwrap(), (400, 200));
        assert_eq!(extractor.target_dimensions(200, 300).unwrap(), (200, 300));
        assert_eq!(extractor.target_dimensions(3001, 1000).unwrap(), (400, 133));
    }

    #[test]
    fn test_zero_max_width_rejected() {
        let samples = solid(4, 4, [0, 0, 0, 255]);
        let buffer = PixelBuffer::new(4, 4, &samples).unwrap();
        let err = EdgeExtractor::new()
            .max_output_width(0)
            .extract(&buffer)
            .unwrap_err();
        assert!(matches!(err, LineArtError::InvalidInput { stage: "edge setup", .. }));
    }

    #[test]
    fn test_uniform_image_is_blank() {
        let samples = solid(10, 6, [120, 40, 200, 255]);
        let buffer = PixelBuffer::new(10, 6, &samples).unwrap();
        let extractor = EdgeExtractor::new();

        assert_eq!(extractor.edge_map(&buffer).unwrap().strong_count(), 0);
        let art = extractor.extract(&buffer).unwrap();
        assert_eq!((art.width(), art.height()), (10, 6));
        assert!(art.as_raw().chunks_exact(4).all(|p| p[3] == 255 && p[0] > 250));
    }

    #[test]
    fn test_edge_map_is_working_resolution() {
        let samples = solid(50, 20, [0, 0, 0, 255]);
        let buffer = PixelBuffer::new(50, 20, &samples).unwrap();
        let map = EdgeExtractor::new()
            .max_output_width(25)
            .edge_map(&buffer)
            .unwrap();
        assert_eq!((map.width(), map.height()), (50, 20));
    }

    #[test]
    fn test_single_pixel_source() {
        let samples = [10, 20, 30, 255];
        let buffer = PixelBuffer::new(1, 1, &samples).unwrap();
        let art = EdgeExtractor::new().extract(&buffer).unwrap();
        assert_eq!((art.width(), art.height()), (1, 1));
        assert_eq!(art.pixel(0, 0)[3], 255);
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<u8> = (0..16 * 12)
            .flat_map(|i| {
                let v = ((i * 53) % 256) as u8;
                [v, v / 2, 255 - v, 255]
            })
            .collect();
        let buffer = PixelBuffer::new(16, 12, &samples).unwrap();
        let extractor = EdgeExtractor::new();
        assert_eq!(
            extractor.extract(&buffer).unwrap(),
            extractor.extract(&buffer).unwrap()
        );
    }

    #[test]
    fn test_extreme_intensity_does_not_overflow() {
        let samples: Vec<u8> = (0..10 * 10)
            .flat_map(|i| if i % 10 < 5 { [0, 0, 0, 255] } else { [255, 255, 255, 255] })
            .collect();
        let buffer = PixelBuffer::new(10, 10, &samples).unwrap();
        for intensity in [i32::MIN, i32::MAX] {
            let art = EdgeExtractor::new().intensity(intensity).extract(&buffer).unwrap();
            assert_eq!((art.width(), art.height()), (10, 10));
        }
    }
}
