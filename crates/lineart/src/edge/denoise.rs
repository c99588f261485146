//! Grayscale conversion and edge-preserving denoise.

use image::RgbaImage;

use crate::raster::ScalarField;

/// Rec. 709 luminance of the working canvas, truncated to a byte.
///
/// Partially transparent pixels are composited over white first so that
/// transparent backgrounds read as paper, not ink.
pub fn grayscale(canvas: &RgbaImage) -> ScalarField<u8> {
    let width = canvas.width() as usize;
    let height = canvas.height() as usize;
    let data = canvas
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            if a == 255 {
                luminance(r as f32, g as f32, b as f32)
            } else {
                let af = a as u16;
                let over_white = |c: u8| ((c as u16 * af + 255 * (255 - af)) / 255) as f32;
                luminance(over_white(r), over_white(g), over_white(b))
            }
        })
        .collect();
    ScalarField::from_vec(width, height, data)
}

#[inline]
fn luminance(r: f32, g: f32, b: f32) -> u8 {
    (0.2126 * r + 0.7152 * g + 0.0722 * b) as u8
}

/// 3×3 range-only bilateral approximation.
///
/// Each pixel becomes the average of its neighborhood weighted by
/// `exp(-Δ² / (2σ²))`, where Δ is the intensity difference to the center.
/// There is no spatial falloff term. Neighbor coordinates are clamped at the
/// border.
pub fn denoise(gray: &ScalarField<u8>, range_sigma: f32) -> ScalarField<u8> {
    let two_sigma_sq = 2.0 * range_sigma * range_sigma;
    let weights: Vec<f32> = (0..256)
        .map(|d| {
            if two_sigma_sq > 0.0 {
                (-((d * d) as f32) / two_sigma_sq).exp()
            } else if d == 0 {
                1.0
            } else {
                0.0
            }
        })
        .collect();

    ScalarField::from_fn(gray.width(), gray.height(), |x, y| {
        let center = gray.get(x, y);
        let mut sum = 0.0f32;
        let mut weight_sum = 0.0f32;

        for dy in -1..=1isize {
            for dx in -1..=1isize {
                let n = gray.get_clamped(x as isize + dx, y as isize + dy);
                let w = weights[center.abs_diff(n) as usize];
                sum += w * n as f32;
                weight_sum += w;
            }
        }

        if weight_sum > 0.0 {
            (sum / weight_sum).round().clamp(0.0, 255.0) as u8
        } else {
            center
        }
    })
}
