//! Pixel sampling and the subject-color filter.

use image::RgbaImage;

use crate::color::Rgb;

/// Pixels with alpha below this are ignored.
pub(crate) const MIN_ALPHA: u8 = 8;

/// Every pixel of `image` that is not near-transparent, row-major.
pub(crate) fn opaque_samples(image: &RgbaImage) -> Vec<Rgb> {
    image
        .pixels()
        .filter(|p| p.0[3] >= MIN_ALPHA)
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect()
}

/// Whether a sample is likely subject matter rather than paper or shadow.
///
/// Near-white and near-black pixels are dropped. Of the rest, a pixel is
/// kept if it has some saturation or a mid-tone value.
#[inline]
pub(crate) fn is_subject_color(rgb: Rgb) -> bool {
    let min = rgb.min_channel();
    let max = rgb.max_channel();

    let near_white = min > 245 && max > 245;
    let near_black = max < 10 && min < 10;
    if near_white || near_black {
        return false;
    }

    max - min > 8 || (max > 30 && max < 230)
}

/// Apply [`is_subject_color`] to every sample.
pub(crate) fn subject_samples(samples: &[Rgb]) -> Vec<Rgb> {
    samples
        .iter()
        .copied()
        .filter(|&rgb| is_subject_color(rgb))
        .collect()
}
