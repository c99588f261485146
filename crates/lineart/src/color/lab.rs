//! CIE L\*a\*b\* color space (D65)
//!
//! Lab is the space perceptual distances are measured in. Conversion follows
//! IEC 61966-2-1 for the sRGB transfer curve and the standard sRGB/XYZ
//! matrices.

use super::rgb::Rgb;

/// D65 reference white (X, Y, Z).
const WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Breakpoint of the piecewise cube-root function, (6/29)^3 rounded.
const EPSILON: f64 = 0.008856;

/// Slope of the linear segment below [`EPSILON`].
const KAPPA_SLOPE: f64 = 7.787;

const OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L\*a\*b\* space under the D65 illuminant.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, practically within ±128
/// - `b`: Blue-yellow axis, practically within ±128
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0.0..=100.0)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// IEC 61966-2-1 exact formula: sRGB to linear
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 exact formula: linear to sRGB
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn lab_f_inv(ft: f64) -> f64 {
    let cubed = ft * ft * ft;
    if cubed > EPSILON {
        cubed
    } else {
        (ft - OFFSET) / KAPPA_SLOPE
    }
}

impl From<Rgb> for Lab {
    /// Convert 8-bit sRGB to Lab.
    ///
    /// ```
    /// use lineart::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::new(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
    /// ```
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f64 / 255.0);
        let g = srgb_to_linear(rgb.g as f64 / 255.0);
        let b = srgb_to_linear(rgb.b as f64 / 255.0);

        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / WHITE[0]);
        let fy = lab_f(y / WHITE[1]);
        let fz = lab_f(z / WHITE[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Rgb {
    /// Convert Lab back to 8-bit sRGB, rounding and clamping out-of-gamut
    /// values.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = lab_f_inv(fx) * WHITE[0];
        let y = lab_f_inv(fy) * WHITE[1];
        let z = lab_f_inv(fz) * WHITE[2];

        let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

        let encode = |c: f64| (linear_to_srgb(c.max(0.0)) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(encode(r), encode(g), encode(b))
    }
}
