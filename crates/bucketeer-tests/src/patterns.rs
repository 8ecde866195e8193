//! Test pattern generation
//!
//! Deterministic color sets for sweeping conversions and searches.

use bucketeer_core::Rgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near gamut boundary
    GamutBoundary,
    /// Every channel value at the sRGB decode knee
    DecodeKnee,
}

/// Generate `count` colors following a pattern
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<Rgb> {
    match pattern {
        TestPattern::ColorCube => cycle(
            &[
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ],
            count,
        ),
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f32 / count.max(1) as f32) * 360.0;
                let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
                Rgb::new(r, g, b)
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f32 / count.max(1) as f32) * 256.0).min(255.0) as u8;
                Rgb::new(v, v, v)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut c = [0u8; 3];
                    rng.fill_bytes(&mut c);
                    Rgb::from(c)
                })
                .collect()
        }
        TestPattern::SkinTones => cycle(
            &[
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ],
            count,
        ),
        TestPattern::GamutBoundary => cycle(
            &[
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ],
            count,
        ),
        // 0.04045 * 255 ≈ 10.3
        TestPattern::DecodeKnee => cycle(&[[9, 9, 9], [10, 10, 10], [11, 11, 11], [10, 11, 9]], count),
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<Rgb> {
    colors.iter().copied().map(Rgb::from).cycle().take(count).collect()
}

/// Random hex strings in mixed notation: with or without `#`, any case
pub fn random_hex_strings(seed: u64, count: usize) -> Vec<(String, Rgb)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut c = [0u8; 3];
            rng.fill_bytes(&mut c);
            let rgb = Rgb::from(c);
            let mut hex = format!("{:02x}{:02x}{:02x}", c[0], c[1], c[2]);
            if rng.gen_bool(0.5) {
                hex = hex.to_uppercase();
            }
            if rng.gen_bool(0.5) {
                hex.insert(0, '#');
            }
            (hex, rgb)
        })
        .collect()
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
