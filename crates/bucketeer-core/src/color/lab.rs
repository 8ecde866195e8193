//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually oriented color space where distances roughly
//! track perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::{D65, Rgb, Xyz};

/// Threshold of the piecewise cube-root correction (≈ (6/29)³)
const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment (≈ 841/108)
const LAB_KAPPA_SLOPE: f64 = 7.787;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert an 8-bit sRGB color to Lab (D65)
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_xyz(Xyz::from_rgb(rgb))
    }

    /// Convert from XYZ (0-100 scale) relative to [`D65`]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65.x);
        let fy = lab_f(xyz.y / D65.y);
        let fz = lab_f(xyz.z / D65.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Euclidean distance to another Lab color (CIE76 ΔE*ab)
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = other.l - self.l;
        let da = other.a - self.a;
        let db = other.b - self.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
