//! Catalogs of named reference colors
//!
//! A [`Palette`] is loaded once and then only read. The bundled RAL Classic
//! table is available through [`Palette::ral_classic`]; other catalogs can be
//! loaded from JSON arrays of `{ "id", "name", "hex" }` objects.

use std::collections::HashSet;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::color::{Lab, Rgb};
use crate::{Error, Result};

/// Bundled RAL Classic catalog
const RAL_CLASSIC_JSON: &str = include_str!("../assets/ral_classic.json");

static RAL_CLASSIC: OnceLock<Palette> = OnceLock::new();

/// One named color of a palette
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Identifier, unique within the palette (e.g. `RAL 1000`)
    pub id: String,
    /// Display name (e.g. `Green beige`)
    pub name: String,
    /// Reference color
    pub hex: Rgb,
}

impl PaletteEntry {
    /// Create a new entry
    pub fn new(id: impl Into<String>, name: impl Into<String>, hex: Rgb) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex,
        }
    }

    /// Reference color of this entry
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.hex
    }

    /// Reference color in Lab
    #[inline]
    pub fn lab(&self) -> Lab {
        Lab::from_rgb(self.hex)
    }
}

/// Immutable catalog of [`PaletteEntry`] values in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette without any entries
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a palette, checking that ids are non-empty and unique
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(Error::InvalidPalette(format!(
                    "entry {:?} has an empty id",
                    entry.name
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::InvalidPalette(format!(
                    "duplicate id {:?}",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a palette from a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        trace!("parsed {} palette entries", entries.len());
        Self::from_entries(entries)
    }

    /// Parse a palette from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<PaletteEntry> = serde_json::from_reader(reader)?;
        trace!("read {} palette entries", entries.len());
        Self::from_entries(entries)
    }

    /// Load a palette from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        trace!("loading palette from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The bundled RAL Classic palette, parsed once per process
    pub fn ral_classic() -> Result<&'static Palette> {
        if let Some(palette) = RAL_CLASSIC.get() {
            return Ok(palette);
        }
        let parsed = Self::from_json(RAL_CLASSIC_JSON)?;
        Ok(RAL_CLASSIC.get_or_init(|| parsed))
    }

    /// All entries in catalog order
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// First entry whose reference color is exactly `rgb`
    pub fn find_by_rgb(&self, rgb: Rgb) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.hex == rgb)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
