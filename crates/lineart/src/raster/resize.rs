//! Image resampling via the `image` crate.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::pixel_buffer::PixelBuffer;
use crate::api::LineArtError;

/// Dimensions that fit `width` into `max_width`, preserving aspect ratio.
///
/// Never upscales and never returns a zero dimension.
pub(crate) fn fit_width(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let target_w = width.min(max_width).max(1);
    if target_w == width {
        return (width, height);
    }
    let target_h = (target_w as f64 * height as f64 / width as f64).round() as u32;
    (target_w, target_h.max(1))
}

/// Resample `buffer` to `new_width × new_height`.
///
/// Copies without filtering when the dimensions already match.
pub(crate) fn resize_rgba(
    buffer: &PixelBuffer<'_>,
    new_width: u32,
    new_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, LineArtError> {
    let view = buffer.view()?;
    if buffer.width() == new_width && buffer.height() == new_height {
        return RgbaImage::from_raw(new_width, new_height, buffer.samples().to_vec())
            .ok_or_else(|| LineArtError::invalid("resize", "sample copy size mismatch"));
    }
    Ok(imageops::resize(&view, new_width, new_height, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_fit_width_preserves_aspect() {
        assert_eq!(fit_width(1000, 500, 400), (400, 200));
        assert_eq!(fit_width(300, 200, 900), (300, 200));
        assert_eq!(fit_width(3, 2, 2), (2, 1));
        // Extreme aspect ratios still yield at least one row
        assert_eq!(fit_width(1000, 1, 10), (10, 1));
    }

    #[test]
    fn test_resize_noop_same_dimensions() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([128, 128, 128, 255]));
        let buffer = PixelBuffer::from_image(&image).unwrap();
        let out = resize_rgba(&buffer, 4, 4, FilterType::Lanczos3).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_resize_changes_dimensions() {
        let image = RgbaImage::from_pixel(10, 6, Rgba([200, 10, 10, 255]));
        let buffer = PixelBuffer::from_image(&image).unwrap();
        let out = resize_rgba(&buffer, 5, 3, FilterType::Triangle).unwrap();
        assert_eq!(out.dimensions(), (5, 3));
        // Solid input stays solid
        assert!(out.pixels().all(|p| p.0 == [200, 10, 10, 255]));
    }
}
