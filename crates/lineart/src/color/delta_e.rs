//! Perceptual color difference in Lab space.
//!
//! - [`delta_e76`]: plain Euclidean distance, cheap.
//! - [`delta_e2000`]: CIEDE2000 with `kL = kC = kH = 1`, the accurate one.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application, 2005.

use super::lab::Lab;

/// 25^7, the chroma compensation constant.
const POW25_7: f64 = 6_103_515_625.0;

/// CIE 1976 color difference: Euclidean distance in Lab.
///
/// ```
/// use lineart::{delta_e76, Lab};
///
/// let a = Lab::new(50.0, 0.0, 0.0);
/// let b = Lab::new(53.0, 4.0, 0.0);
/// assert!((delta_e76(a, b) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn delta_e76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Hue angle in degrees, normalized to `[0, 360)`. Zero for neutral colors.
#[inline]
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 color difference.
///
/// Not guaranteed symmetric to the last bit in every corner case of the
/// hue averaging, but deterministic and continuous.
///
/// ```
/// use lineart::{delta_e2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((delta_e2000(a, b) - 2.0425).abs() < 1e-3);
/// ```
pub fn delta_e2000(lab1: Lab, lab2: Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // Step 1: adjusted a', C', h'
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_degrees(b1, a1p);
    let h2p = hue_degrees(b2, a2p);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_lp = l2 - l1;
    let delta_cp = c2p - c1p;
    let chroma_product = c1p * c2p;

    let delta_hp_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let delta_hp = 2.0 * chroma_product.sqrt() * (delta_hp_angle / 2.0).to_radians().sin();

    // Step 3: weighting functions
    let l_bar_p = (l1 + l2) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;

    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();

    let l_offset = (l_bar_p - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    // kL = kC = kH = 1
    let dl = delta_lp / s_l;
    let dc = delta_cp / s_c;
    let dh = delta_hp / s_h;

    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).max(0.0).sqrt()
}
