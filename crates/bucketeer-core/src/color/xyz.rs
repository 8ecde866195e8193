//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hop between display RGB and Lab.
//! Values here use the 0-100 scale (white has Y = 100).

use crate::color::Rgb;
use crate::math::{SRGB_TO_XYZ, srgb_decode_u8};

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value (roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert an 8-bit sRGB color to XYZ (D65, 0-100 scale)
    ///
    /// Decodes the sRGB gamma, scales to 0-100 and applies [`SRGB_TO_XYZ`].
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [x, y, z] = SRGB_TO_XYZ.multiply_vec([
            srgb_decode_u8(rgb.r) * 100.0,
            srgb_decode_u8(rgb.g) * 100.0,
            srgb_decode_u8(rgb.b) * 100.0,
        ]);
        Self { x, y, z }
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
