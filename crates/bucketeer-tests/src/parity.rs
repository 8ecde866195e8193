//! Parity testing framework
//!
//! Compares bucketeer output against the reference implementations.

use std::fmt;

use bucketeer_core::{Palette, Rgb, ScoredRecipe, find_recipes};
use rayon::prelude::*;

use crate::accuracy::{DeltaEStats, compare_labs};
use crate::reference::{NaiveRecipe, naive_find_recipes, palette_lab};

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// DeltaE statistics against the reference
    pub delta_e: DeltaEStats,
    /// Whether the maximum stayed under the tolerance
    pub passed: bool,
}

impl ParityResult {
    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.delta_e.max < 0.0001
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} over {} colors (mean {:.4}, p95 {:.4}, max {:.4})",
            self.test_name,
            if self.passed { "PASS" } else { "FAIL" },
            self.delta_e.count,
            self.delta_e.mean,
            self.delta_e.p95,
            self.delta_e.max
        )
    }
}

/// Compare bucketeer's Lab conversion against the `palette` crate
pub fn lab_parity(name: impl Into<String>, colors: &[Rgb], tolerance: f64) -> ParityResult {
    let (ours, reference): (Vec<_>, Vec<_>) = colors
        .par_iter()
        .map(|&rgb| (rgb.to_lab(), palette_lab(rgb)))
        .unzip();
    let delta_e = compare_labs(&reference, &ours);
    let passed = delta_e.max < tolerance;

    ParityResult {
        test_name: name.into(),
        delta_e,
        passed,
    }
}

/// Run the finder and the naive search and describe the first mismatch
pub fn recipe_parity(palette: &Palette, target: Rgb, max_ingredients: usize) -> Result<(), String> {
    let ours = find_recipes(palette, target, max_ingredients).map_err(|e| format!("finder: {e}"))?;
    let naive = naive_find_recipes(palette, target, max_ingredients)
        .map_err(|e| format!("naive search: {e}"))?;

    if ours.len() != naive.len() {
        return Err(format!(
            "{target}: finder returned {} recipes, naive search {}",
            ours.len(),
            naive.len()
        ));
    }

    for (i, (a, b)) in ours.iter().zip(&naive).enumerate() {
        if !same_recipe(a, b) {
            return Err(format!("{target}: recipe {i} differs: {a} vs {b:?}"));
        }
    }
    Ok(())
}

fn same_recipe(ours: &ScoredRecipe<'_>, naive: &NaiveRecipe) -> bool {
    ours.result == naive.result
        && ours.difference == naive.difference
        && ours.recipe.len() == naive.parts.len()
        && ours
            .recipe
            .ingredients()
            .iter()
            .zip(&naive.parts)
            .all(|(i, (id, q))| i.color.id == *id && i.quantity == *q)
}
