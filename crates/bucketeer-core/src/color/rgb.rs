//! 8-bit sRGB colors and their hex notation
//!
//! `#rrggbb` strings are the exchange format with palettes and callers.
//! Parsing accepts six hex digits in either case with an optional leading
//! `#`; formatting always produces the canonical lowercase `#rrggbb` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::{Error, Result};

/// 8-bit sRGB color
///
/// Serializes as its canonical hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    /// Red component (0 to 255)
    pub r: u8,
    /// Green component (0 to 255)
    pub g: u8,
    /// Blue component (0 to 255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a hex color such as `#ff8000`, `FF8000` or `#Ff8000`
    ///
    /// Fails with [`Error::InvalidFormat`] unless the input is exactly six
    /// hex digits after stripping one optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidFormat(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Canonical lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Convert to Lab (D65)
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from_rgb(*self)
    }

    /// Euclidean distance in raw 0-255 RGB space
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Perceived brightness in [0, 1] using the 0.299/0.587/0.114 weights
    #[inline]
    pub fn relative_luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    /// Whether dark text reads better than light text on this background
    #[inline]
    pub fn prefers_dark_text(&self) -> bool {
        self.relative_luminance() > 0.5
    }

    /// Black color
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White color
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// Wide integer channels, rejected unless every one fits in 0..=255
impl TryFrom<[i64; 3]> for Rgb {
    type Error = Error;

    fn try_from(arr: [i64; 3]) -> Result<Self> {
        let channel = |v: i64| u8::try_from(v).map_err(|_| Error::ChannelOutOfRange(v));
        Ok(Self::new(channel(arr[0])?, channel(arr[1])?, channel(arr[2])?))
    }
}

/// Parse a hex color into RGB
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Format RGB as canonical `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Canonicalize any accepted hex spelling to `#rrggbb`
pub fn canonical_hex(hex: &str) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        let a = Rgb::from_hex("#ff0000").unwrap();
        let b = Rgb::from_hex("ff0000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#A1b2C3").unwrap(),
            Rgb::from_hex("#a1b2c3").unwrap()
        );
    }

    #[test]
    fn test_invalid_lengths() {
        for bad in ["#fffff", "fffff", "#fffffff", "fffffff", "", "#", "##ffffff"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(Error::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_digits() {
        for bad in ["#gg0000", "#12345z", "+12345", "#-12345", " ff0000", "ff0000 ", "#ff00é"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(Error::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_canonical_output() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(canonical_hex("ABCDEF").unwrap(), "#abcdef");
        assert_eq!(rgb_to_hex(Rgb::BLACK), "#000000");
    }

    #[test]
    fn test_roundtrip_every_channel_value() {
        for v in 0..=255u8 {
            let c = Rgb::new(v, 255 - v, v / 3);
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
        }
    }

    #[test]
    fn test_from_str() {
        let c: Rgb = "#123456".parse().unwrap();
        assert_eq!(c, Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_try_from_wide() {
        assert_eq!(Rgb::try_from([0i64, 128, 255]).unwrap(), Rgb::new(0, 128, 255));
        assert!(matches!(
            Rgb::try_from([0i64, 256, 0]),
            Err(Error::ChannelOutOfRange(256))
        ));
        assert!(matches!(
            Rgb::try_from([-1i64, 0, 0]),
            Err(Error::ChannelOutOfRange(-1))
        ));
    }

    #[test]
    fn test_serde_as_hex() {
        let json = serde_json::to_string(&Rgb::new(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#ff8000\"");
        let back: Rgb = serde_json::from_str("\"FF8000\"").unwrap();
        assert_eq!(back, Rgb::new(255, 128, 0));
        assert!(serde_json::from_str::<Rgb>("\"#ff80\"").is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Rgb::BLACK.distance(&Rgb::BLACK), 0.0);
        assert_eq!(Rgb::new(0, 0, 0).distance(&Rgb::new(3, 4, 0)), 5.0);
        let d = Rgb::BLACK.distance(&Rgb::WHITE);
        assert!((d - 255.0 * 3f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_text_contrast() {
        assert!(Rgb::WHITE.prefers_dark_text());
        assert!(!Rgb::BLACK.prefers_dark_text());
        // Pure yellow is bright, pure blue is dark
        assert!(Rgb::new(255, 255, 0).prefers_dark_text());
        assert!(!Rgb::new(0, 0, 255).prefers_dark_text());
    }
}
