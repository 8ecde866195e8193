//! Color space types and conversions
//!
//! This module provides:
//! - 8-bit sRGB colors with hex parsing and formatting
//! - CIE XYZ color space
//! - CIELAB (L*a*b*) color space
//! - The D65 reference white

pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use lab::Lab;
pub use rgb::{Rgb, canonical_hex, hex_to_rgb, rgb_to_hex};
pub use white_point::D65;
pub use xyz::Xyz;

/// Convert an 8-bit sRGB color to Lab (D65)
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    Lab::from_rgb(rgb)
}
