//! sRGB transfer function

/// Threshold below which the sRGB curve is linear
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// sRGB gamma decode (encoded → linear)
///
/// Converts sRGB-encoded value [0,1] to linear light [0,1].
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > SRGB_DECODE_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// Decode an 8-bit sRGB channel to linear light [0,1]
#[inline]
pub fn srgb_decode_u8(channel: u8) -> f64 {
    srgb_gamma_decode(f64::from(channel) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(srgb_decode_u8(0), 0.0);
        assert!((srgb_decode_u8(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        // 10/255 ≈ 0.0392 sits below the threshold
        let v = 10.0 / 255.0;
        assert!((srgb_gamma_decode(v) - v / 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_continuity_at_threshold() {
        let below = SRGB_DECODE_THRESHOLD / 12.92;
        let above = ((SRGB_DECODE_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = -1.0;
        for c in 0..=255u8 {
            let v = srgb_decode_u8(c);
            assert!(v > prev, "decode not increasing at {c}");
            prev = v;
        }
    }
}
