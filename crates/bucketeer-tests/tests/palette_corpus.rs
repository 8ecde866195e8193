//! Palette loading tests
//!
//! The bundled RAL Classic catalog and user palettes read from JSON.

use std::collections::HashSet;

use bucketeer_core::{Error, Palette, PaletteEntry, Rgb, SearchOptions};

#[test]
fn test_ral_classic_catalog() {
    let ral = Palette::ral_classic().unwrap();
    assert_eq!(ral.len(), 213);

    let ids: HashSet<&str> = ral.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), ral.len(), "ids must be unique");
    assert!(ral.iter().all(|e| e.id.starts_with("RAL ") && !e.name.is_empty()));

    let white = ral.get("RAL 9010").unwrap();
    assert_eq!(white.name, "Pure white");
    assert_eq!(white.hex, Rgb::WHITE);
    assert_eq!(ral.find_by_rgb(Rgb::WHITE).map(|e| e.id.as_str()), Some("RAL 9010"));
    assert!(ral.get("RAL 0000").is_none());
}

#[test]
fn test_ral_classic_shared() {
    let a = Palette::ral_classic().unwrap();
    let b = Palette::ral_classic().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_json_roundtrip() {
    let ral = Palette::ral_classic().unwrap();
    let json = serde_json::to_string(ral).unwrap();
    assert!(json.contains(r##""hex":"#ffffff""##));
    assert_eq!(&Palette::from_json(&json).unwrap(), ral);
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!("bucketeer-palette-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r##"[{"id": "A", "name": "Alpha", "hex": "#102030"}, {"id": "B", "name": "Beta", "hex": "405060"}]"##,
    )
    .unwrap();

    let loaded = Palette::from_path(&path);
    let _ = std::fs::remove_file(&path);
    let palette = loaded.unwrap();

    assert_eq!(
        palette.entries(),
        [
            PaletteEntry::new("A", "Alpha", Rgb::new(0x10, 0x20, 0x30)),
            PaletteEntry::new("B", "Beta", Rgb::new(0x40, 0x50, 0x60)),
        ]
    );
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("bucketeer-no-such-palette.json");
    assert!(matches!(Palette::from_path(path), Err(Error::Io(_))));
}

#[test]
fn test_rejected_palettes() {
    let duplicate = r##"[{"id": "A", "name": "x", "hex": "#000000"}, {"id": "A", "name": "y", "hex": "#ffffff"}]"##;
    assert!(matches!(Palette::from_json(duplicate), Err(Error::InvalidPalette(_))));

    let blank_id = r##"[{"id": " ", "name": "x", "hex": "#000000"}]"##;
    assert!(matches!(Palette::from_json(blank_id), Err(Error::InvalidPalette(_))));

    let bad_hex = r##"[{"id": "A", "name": "x", "hex": "#00000"}]"##;
    assert!(matches!(Palette::from_json(bad_hex), Err(Error::Json(_))));

    assert!(matches!(Palette::from_json("{"), Err(Error::Json(_))));
}

#[test]
fn test_empty_json_palette() {
    let palette = Palette::from_json("[]").unwrap();
    assert!(palette.is_empty());
}

#[test]
fn test_search_options_json() {
    let options = SearchOptions::from_json(r#"{"triple_max_difference": 12.5}"#).unwrap();
    assert_eq!(options.triple_max_difference, 12.5);
    assert_eq!(options.pair_count, SearchOptions::default().pair_count);

    assert!(matches!(
        SearchOptions::from_json(r#"{"third_share_step": 0}"#),
        Err(Error::InvalidArgument(_))
    ));
}
