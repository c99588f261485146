//! Borrowed RGBA input buffer.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::api::LineArtError;
use crate::color::Rgb;

/// A decoded RGBA raster supplied by the caller.
///
/// The buffer is borrowed read-only; neither pipeline keeps it beyond the
/// call. Construction validates the dimensions against the sample count, so
/// every pixel index of an existing `PixelBuffer` resolves to a quadruplet.
///
/// # Example
///
/// ```
/// use lineart::PixelBuffer;
///
/// let samples = vec![255u8; 2 * 3 * 4];
/// let buffer = PixelBuffer::new(2, 3, &samples).unwrap();
/// assert_eq!(buffer.pixel(1, 2), [255, 255, 255, 255]);
///
/// // Sample count must equal width * height * 4
/// assert!(PixelBuffer::new(2, 3, &samples[..20]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    samples: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap RGBA samples in row-major order.
    ///
    /// # Errors
    ///
    /// [`LineArtError::InvalidInput`] if either dimension is zero or
    /// `samples.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, samples: &'a [u8]) -> Result<Self, LineArtError> {
        if width == 0 || height == 0 {
            return Err(LineArtError::invalid(
                "pixel buffer",
                format!("zero-sized image {width}x{height}"),
            ));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                LineArtError::invalid(
                    "pixel buffer",
                    format!("dimensions {width}x{height} overflow"),
                )
            })?;

        if samples.len() != expected {
            return Err(LineArtError::invalid(
                "pixel buffer",
                format!(
                    "{width}x{height} RGBA needs {expected} samples, got {}",
                    samples.len()
                ),
            ));
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Borrow an `image` crate RGBA buffer.
    pub fn from_image(image: &'a RgbaImage) -> Result<Self, LineArtError> {
        Self::new(image.width(), image.height(), image.as_raw())
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA samples, row-major.
    #[inline]
    pub fn samples(&self) -> &'a [u8] {
        self.samples
    }

    /// The RGBA quadruplet at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.samples[i],
            self.samples[i + 1],
            self.samples[i + 2],
            self.samples[i + 3],
        ]
    }

    /// Iterate over `(Rgb, alpha)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (Rgb, u8)> + 'a {
        self.samples
            .chunks_exact(4)
            .map(|p| (Rgb::new(p[0], p[1], p[2]), p[3]))
    }

    /// Zero-copy view for the `image` crate's resampling filters.
    pub(crate) fn view(&self) -> Result<ImageBuffer<Rgba<u8>, &'a [u8]>, LineArtError> {
        ImageBuffer::from_raw(self.width, self.height, self.samples).ok_or_else(|| {
            LineArtError::invalid("pixel buffer", "samples do not fit the declared dimensions")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_rejected() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            let err = PixelBuffer::new(w, h, &[]).unwrap_err();
            assert!(
                matches!(err, LineArtError::InvalidInput { stage: "pixel buffer", .. }),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn test_sample_count_mismatch_rejected() {
        let samples = vec![0u8; 15];
        let err = PixelBuffer::new(2, 2, &samples).unwrap_err();
        assert!(err.to_string().contains("needs 16 samples, got 15"));
    }

    #[test]
    fn test_pixels_iterates_row_major() {
        let samples = [1, 2, 3, 4, 5, 6, 7, 8];
        let buffer = PixelBuffer::new(2, 1, &samples).unwrap();
        let pixels: Vec<_> = buffer.pixels().collect();
        assert_eq!(pixels, vec![(Rgb::new(1, 2, 3), 4), (Rgb::new(5, 6, 7), 8)]);
        assert_eq!(buffer.pixel(1, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn test_from_image() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]));
        let buffer = PixelBuffer::from_image(&image).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.view().unwrap().get_pixel(2, 1), &Rgba([9, 8, 7, 255]));
    }
}
