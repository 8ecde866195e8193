//! Palette fixtures
//!
//! Small hand-made palettes next to the bundled RAL Classic catalog.

use anyhow::Context;
use bucketeer_core::{Palette, PaletteEntry, Rgb};

/// A palette used by the tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPalette {
    /// Bundled RAL Classic
    RalClassic,
    /// Red, yellow, blue, white and black
    Primaries,
    /// Eleven evenly spaced grays
    Grays,
    /// One color
    Single,
    /// No colors at all
    Empty,
}

impl TestPalette {
    /// Every fixture
    pub const ALL: [TestPalette; 5] = [
        TestPalette::RalClassic,
        TestPalette::Primaries,
        TestPalette::Grays,
        TestPalette::Single,
        TestPalette::Empty,
    ];

    /// Build the palette
    pub fn load(self) -> anyhow::Result<Palette> {
        let palette = match self {
            TestPalette::RalClassic => Palette::ral_classic()
                .context("loading bundled RAL Classic")?
                .clone(),
            TestPalette::Primaries => Palette::from_json(PRIMARIES_JSON).context("primaries fixture")?,
            TestPalette::Grays => Palette::from_entries(
                (0..=10u8)
                    .map(|i| {
                        let v = i * 25 + i / 2;
                        PaletteEntry::new(format!("G{i:02}"), format!("Gray {i}"), Rgb::new(v, v, v))
                    })
                    .collect(),
            )
            .context("grays fixture")?,
            TestPalette::Single => Palette::from_entries(vec![PaletteEntry::new(
                "RAL 3020",
                "Traffic red",
                Rgb::new(0xcc, 0x06, 0x05),
            )])
            .context("single fixture")?,
            TestPalette::Empty => Palette::empty(),
        };
        Ok(palette)
    }
}

const PRIMARIES_JSON: &str = r##"[
    {"id": "P-R", "name": "Red", "hex": "#FF0000"},
    {"id": "P-Y", "name": "Yellow", "hex": "#FFFF00"},
    {"id": "P-B", "name": "Blue", "hex": "#0000FF"},
    {"id": "P-W", "name": "White", "hex": "#FFFFFF"},
    {"id": "P-K", "name": "Black", "hex": "#000000"}
]"##;
