//! Color difference metrics and similarity ranking
//!
//! Two metrics are exposed and they are not interchangeable:
//!
//! - [`delta_e`]: Euclidean distance in Lab (CIE76 ΔE*ab). Used by the recipe
//!   search. It is a simplified perceptual metric, not CIEDE2000; large
//!   differences in saturated regions are overstated.
//! - [`rgb_distance`]: Euclidean distance in raw 0-255 RGB. Used when browsing
//!   palette colors similar to a mixed result, with a user-chosen threshold.

use serde::Serialize;

use crate::color::{Lab, Rgb};
use crate::mixer;
use crate::palette::{Palette, PaletteEntry};
use crate::recipe::Ingredient;
use crate::{Error, Result};

/// Lab Euclidean distance; 0 means identical, lower is more similar
#[inline]
pub fn delta_e(lab1: Lab, lab2: Lab) -> f64 {
    lab1.distance(&lab2)
}

/// RGB Euclidean distance between a color and a palette entry
#[inline]
pub fn rgb_distance(color: Rgb, entry: &PaletteEntry) -> f64 {
    color.distance(&entry.hex)
}

/// [`rgb_distance`] for a color given in hex notation
pub fn rgb_distance_hex(hex: &str, entry: &PaletteEntry) -> Result<f64> {
    Ok(rgb_distance(Rgb::from_hex(hex)?, entry))
}

/// A palette entry within reach of some color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarColor<'p> {
    /// The palette entry
    pub entry: &'p PaletteEntry,
    /// RGB distance to the probed color
    pub distance: f64,
}

/// Palette entries within `threshold` RGB distance of `target`
///
/// Results are sorted by ascending distance; ties keep catalog order.
/// A negative threshold yields nothing, a NaN threshold is rejected.
pub fn rank_similar(palette: &Palette, target: Rgb, threshold: f64) -> Result<Vec<SimilarColor<'_>>> {
    if threshold.is_nan() {
        return Err(Error::InvalidArgument("similarity threshold is NaN".into()));
    }

    let mut similar: Vec<SimilarColor<'_>> = palette
        .iter()
        .map(|entry| SimilarColor {
            entry,
            distance: rgb_distance(target, entry),
        })
        .filter(|s| s.distance <= threshold)
        .collect();
    similar.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(similar)
}

/// Mix `ingredients` and rank palette entries similar to the result
///
/// Returns the mixed color together with its neighbours. An empty or
/// all-zero mix is reported as an error; showing black for it is up to the
/// caller.
pub fn similar_to_mix<'p>(
    palette: &'p Palette,
    ingredients: &[Ingredient<'_>],
    threshold: f64,
) -> Result<(Rgb, Vec<SimilarColor<'p>>)> {
    let mixed = mixer::mix(ingredients)?;
    let similar = rank_similar(palette, mixed, threshold)?;
    Ok((mixed, similar))
}
