//! LineArt output raster.

use image::RgbaImage;

use crate::api::LineArtError;
use crate::raster::PixelBuffer;

/// The output of [`EdgeExtractor::extract`](crate::EdgeExtractor::extract).
///
/// Every pixel is opaque. Gray levels only appear along line borders, where
/// the final downscale anti-aliases the supersampled canvas.
///
/// # Example
///
/// ```
/// use lineart::{EdgeExtractor, PixelBuffer};
///
/// let samples = vec![255u8; 8 * 8 * 4];
/// let buffer = PixelBuffer::new(8, 8, &samples).unwrap();
///
/// let art = EdgeExtractor::new().extract(&buffer).unwrap();
/// assert_eq!((art.width(), art.height()), (8, 8));
/// // Nothing to trace on a blank page
/// assert!(art.ink_ratio() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineArt {
    image: RgbaImage,
}

impl LineArt {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA samples, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// The RGBA quadruplet at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Borrow the output as input for another pipeline run.
    pub fn as_buffer(&self) -> Result<PixelBuffer<'_>, LineArtError> {
        PixelBuffer::from_image(&self.image)
    }

    /// Consume the output, returning the underlying `image` buffer.
    #[inline]
    pub fn into_rgba_image(self) -> RgbaImage {
        self.image
    }

    /// Fraction of ink coverage, `0.0` for blank paper and `1.0` for solid
    /// black. Anti-aliased pixels count partially.
    pub fn ink_ratio(&self) -> f64 {
        let total = self.image.width() as u64 * self.image.height() as u64;
        if total == 0 {
            return 0.0;
        }
        let ink: u64 = self
            .image
            .pixels()
            .map(|p| 255 - p.0[0] as u64)
            .sum();
        ink as f64 / (total * 255) as f64
    }
}
