//! Sobel gradient and non-maximum suppression.

use crate::raster::ScalarField;

/// Gradient magnitude and direction of an intensity field.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// `hypot(gx, gy)`, zero on the 1-px border ring
    pub magnitude: ScalarField<f32>,
    /// `atan2(gy, gx)` in radians, zero on the 1-px border ring
    pub angle: ScalarField<f32>,
}

/// 3×3 Sobel operator.
///
/// The outermost ring of pixels is left at zero so no neighbor read ever
/// leaves the field. Fields narrower or shorter than 3 px are all zero.
pub fn sobel(gray: &ScalarField<u8>) -> Gradient {
    let width = gray.width();
    let height = gray.height();
    let mut magnitude = ScalarField::new(width, height);
    let mut angle = ScalarField::new(width, height);

    if width < 3 || height < 3 {
        return Gradient { magnitude, angle };
    }

    let p = |x: usize, y: usize| gray.get(x, y) as i32;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = (p(x + 1, y - 1) + 2 * p(x + 1, y) + p(x + 1, y + 1))
                - (p(x - 1, y - 1) + 2 * p(x - 1, y) + p(x - 1, y + 1));
            let gy = (p(x - 1, y + 1) + 2 * p(x, y + 1) + p(x + 1, y + 1))
                - (p(x - 1, y - 1) + 2 * p(x, y - 1) + p(x + 1, y - 1));

            let (gx, gy) = (gx as f32, gy as f32);
            magnitude.set(x, y, gx.hypot(gy));
            angle.set(x, y, gy.atan2(gx));
        }
    }

    Gradient { magnitude, angle }
}

/// Offsets of the two neighbors along the gradient direction.
///
/// The angle is folded into `[0°, 180°)` and quantized into four bins of
/// ±22.5°. Image y grows downward, so a 45° gradient points to `(+1, +1)`.
#[inline]
fn direction_offsets(angle: f32) -> [(isize, isize); 2] {
    let mut deg = angle.to_degrees();
    if deg < 0.0 {
        deg += 180.0;
    }
    if deg >= 180.0 {
        deg -= 180.0;
    }

    if !(22.5..157.5).contains(&deg) {
        [(-1, 0), (1, 0)]
    } else if deg < 67.5 {
        [(-1, -1), (1, 1)]
    } else if deg < 112.5 {
        [(0, -1), (0, 1)]
    } else {
        [(-1, 1), (1, -1)]
    }
}

/// Thin gradient ridges to one pixel.
///
/// A magnitude survives only if it is ≥ both neighbors along its gradient
/// direction; everything else becomes zero.
pub fn non_max_suppression(gradient: &Gradient) -> ScalarField<f32> {
    let magnitude = &gradient.magnitude;
    let width = magnitude.width();
    let height = magnitude.height();
    let mut out = ScalarField::new(width, height);

    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let m = magnitude.get(x, y);
            if m <= 0.0 {
                continue;
            }
            let [(ax, ay), (bx, by)] = direction_offsets(gradient.angle.get(x, y));
            let n1 = magnitude.get((x as isize + ax) as usize, (y as isize + ay) as usize);
            let n2 = magnitude.get((x as isize + bx) as usize, (y as isize + by) as usize);
            if m >= n1 && m >= n2 {
                out.set(x, y, m);
            }
        }
    }

    out
}
