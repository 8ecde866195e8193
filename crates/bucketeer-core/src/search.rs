//! Recipe search
//!
//! Proposes palette mixes approximating a target color in three tiers:
//!
//! 1. **Singles**: every palette color, ranked by deltaE to the target.
//! 2. **Pairs**: every unordered pair of distinct colors, swept over the
//!    pair ratios. Candidates under the pair bound are ranked; the best few
//!    are returned and a slightly larger set seeds the next tier.
//! 3. **Triples**: each seed pair plus every other palette color, swept over
//!    the third-color shares with the pair scaled to fill the rest.
//!
//! The result is the concatenation of the tiers, each ranked by ascending
//! deltaE. It is not one globally sorted list.
//!
//! Every tier sorts stably, so ties keep enumeration order (palette order,
//! then ratio). Parallel sweeps collect in that same order, which makes
//! parallel and sequential runs bit-identical.

use log::debug;
use rayon::prelude::*;

use crate::color::{Lab, Rgb};
use crate::distance::delta_e;
use crate::mixer::blend;
use crate::options::SearchOptions;
use crate::palette::Palette;
use crate::recipe::{Ingredient, MAX_INGREDIENTS, Recipe, ScoredRecipe};
use crate::{Error, Result};

/// Share of a single-color recipe, in percent
const WHOLE: f64 = 100.0;

/// A scored mix expressed as palette indices, before it becomes a recipe
#[derive(Debug, Clone, Copy)]
struct Candidate {
    parts: [(usize, f64); MAX_INGREDIENTS],
    len: usize,
    result: Rgb,
    difference: f64,
}

impl Candidate {
    #[inline]
    fn parts(&self) -> &[(usize, f64)] {
        &self.parts[..self.len]
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        self.parts().iter().any(|&(i, _)| i == index)
    }
}

/// Finds recipes over one palette
///
/// Caches the palette's Lab values; otherwise stateless, so one finder can
/// serve any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct RecipeFinder<'p> {
    palette: &'p Palette,
    labs: Vec<Lab>,
    options: SearchOptions,
}

impl<'p> RecipeFinder<'p> {
    /// Create a finder with default options
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            labs: palette.iter().map(|e| e.lab()).collect(),
            options: SearchOptions::default(),
        }
    }

    /// Create a finder with custom options
    pub fn with_options(palette: &'p Palette, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::new(palette)
        })
    }

    /// The palette searched
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// The options in effect
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find recipes of up to `max_ingredients` colors approximating `target`
    ///
    /// A three-color recipe never repeats a color of its seed pair: third
    /// colors already in the pair are skipped rather than scored, so every
    /// recipe lists distinct palette entries.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `max_ingredients` is not 1, 2 or 3.
    pub fn find(&self, target: Rgb, max_ingredients: usize) -> Result<Vec<ScoredRecipe<'p>>> {
        if !(1..=MAX_INGREDIENTS).contains(&max_ingredients) {
            return Err(Error::InvalidArgument(format!(
                "max_ingredients must be between 1 and {MAX_INGREDIENTS}, got {max_ingredients}"
            )));
        }

        let target_lab = Lab::from_rgb(target);
        let mut found = self.singles(target_lab);

        if max_ingredients >= 2 {
            let pairs = self.pairs(target_lab);
            found.extend(pairs.iter().take(self.options.pair_count).copied());

            if max_ingredients >= 3 {
                let seeds = &pairs[..pairs.len().min(self.options.pair_seed_count)];
                found.extend(self.triples(target_lab, seeds));
            }
        }

        debug!(
            "found {} recipes for {} (max {} ingredients)",
            found.len(),
            target,
            max_ingredients
        );
        Ok(found.iter().map(|c| self.to_scored(c)).collect())
    }

    /// [`find`](Self::find) with the target given in hex notation
    pub fn find_hex(&self, target: &str, max_ingredients: usize) -> Result<Vec<ScoredRecipe<'p>>> {
        self.find(Rgb::from_hex(target)?, max_ingredients)
    }

    fn singles(&self, target: Lab) -> Vec<Candidate> {
        let mut singles: Vec<Candidate> = self
            .palette
            .iter()
            .zip(&self.labs)
            .enumerate()
            .map(|(i, (entry, lab))| Candidate {
                parts: [(i, WHOLE), (0, 0.0), (0, 0.0)],
                len: 1,
                result: entry.hex,
                difference: delta_e(*lab, target),
            })
            .collect();
        rank(&mut singles);
        singles.truncate(self.options.single_count);
        debug!("single tier kept {}", singles.len());
        singles
    }

    /// All pair candidates under the bound, ranked
    fn pairs(&self, target: Lab) -> Vec<Candidate> {
        let n = self.palette.len();
        let sweep = |i: usize| self.pairs_from(i, target);
        let mut pairs: Vec<Candidate> = if self.options.parallel {
            (0..n).into_par_iter().flat_map_iter(sweep).collect()
        } else {
            (0..n).flat_map(sweep).collect()
        };
        rank(&mut pairs);
        debug!("pair tier accepted {}", pairs.len());
        pairs
    }

    /// Pairs whose first color is entry `i`
    fn pairs_from(&self, i: usize, target: Lab) -> Vec<Candidate> {
        let entries = self.palette.entries();
        let bound = self.options.pair_max_difference;
        let mut accepted = Vec::new();

        for j in i + 1..entries.len() {
            for ratio in self.options.pair_ratios() {
                let first = f64::from(ratio);
                let second = WHOLE - first;
                let result = blend(&[(entries[i].hex, first), (entries[j].hex, second)]);
                let difference = delta_e(Lab::from_rgb(result), target);
                if difference < bound {
                    accepted.push(Candidate {
                        parts: [(i, first), (j, second), (0, 0.0)],
                        len: 2,
                        result,
                        difference,
                    });
                }
            }
        }
        accepted
    }

    /// Best triples grown from the seed pairs, ranked and truncated
    fn triples(&self, target: Lab, seeds: &[Candidate]) -> Vec<Candidate> {
        let n = self.palette.len();
        let sweep = |task: usize| self.triples_from(&seeds[task / n], task % n, target);
        let tasks = seeds.len() * n;
        let mut triples: Vec<Candidate> = if self.options.parallel {
            (0..tasks).into_par_iter().flat_map_iter(sweep).collect()
        } else {
            (0..tasks).flat_map(sweep).collect()
        };
        rank(&mut triples);
        debug!("triple tier accepted {}", triples.len());
        triples.truncate(self.options.triple_count);
        triples
    }

    /// Seed pair plus entry `k` at every third-color share
    fn triples_from(&self, seed: &Candidate, k: usize, target: Lab) -> Vec<Candidate> {
        // Each ingredient appears once per recipe
        if seed.contains(k) {
            return Vec::new();
        }

        let entries = self.palette.entries();
        let [(a, qa), (b, qb), _] = seed.parts;
        let bound = self.options.triple_max_difference;
        let mut accepted = Vec::new();

        for share in self.options.third_shares() {
            let third = f64::from(share);
            let remaining = WHOLE - third;
            let first = qa * remaining / WHOLE;
            let second = qb * remaining / WHOLE;
            let result = blend(&[
                (entries[a].hex, first),
                (entries[b].hex, second),
                (entries[k].hex, third),
            ]);
            let difference = delta_e(Lab::from_rgb(result), target);
            if difference < bound {
                accepted.push(Candidate {
                    parts: [(a, first), (b, second), (k, third)],
                    len: 3,
                    result,
                    difference,
                });
            }
        }
        accepted
    }

    fn to_scored(&self, candidate: &Candidate) -> ScoredRecipe<'p> {
        let entries = self.palette.entries();
        let ingredients = candidate
            .parts()
            .iter()
            .map(|&(i, quantity)| Ingredient::new(&entries[i], quantity))
            .collect();
        ScoredRecipe {
            recipe: Recipe::from_parts(ingredients),
            result: candidate.result,
            difference: candidate.difference,
        }
    }
}

/// Stable ascending sort by difference
fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| a.difference.total_cmp(&b.difference));
}

/// Find recipes with default options
///
/// Convenience for [`RecipeFinder::find`]; build a [`RecipeFinder`] once when
/// searching the same palette repeatedly.
pub fn find_recipes(
    palette: &Palette,
    target: Rgb,
    max_ingredients: usize,
) -> Result<Vec<ScoredRecipe<'_>>> {
    RecipeFinder::new(palette).find(target, max_ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteEntry;

    fn primaries() -> Palette {
        Palette::from_entries(vec![
            PaletteEntry::new("red", "Red", Rgb::new(255, 0, 0)),
            PaletteEntry::new("blue", "Blue", Rgb::new(0, 0, 255)),
            PaletteEntry::new("white", "White", Rgb::WHITE),
            PaletteEntry::new("black", "Black", Rgb::BLACK),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_bad_max_ingredients() {
        let palette = primaries();
        let finder = RecipeFinder::new(&palette);
        for max in [0, 4, 100] {
            assert!(matches!(
                finder.find(Rgb::WHITE, max),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::empty();
        for max in 1..=3 {
            assert!(find_recipes(&palette, Rgb::new(1, 2, 3), max).unwrap().is_empty());
        }
    }

    #[test]
    fn test_singles_only() {
        let palette = primaries();
        let found = find_recipes(&palette, Rgb::WHITE, 1).unwrap();
        // Palette has fewer than five colors
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].recipe.ingredients()[0].color.id, "white");
        assert_eq!(found[0].difference, 0.0);
        assert!(found.windows(2).all(|w| w[0].difference <= w[1].difference));
        assert!(found.iter().all(|s| s.recipe.len() == 1));
        assert!(found.iter().all(|s| s.recipe.ingredients()[0].quantity == 100.0));
    }

    #[test]
    fn test_exact_pair_mix_is_found() {
        let palette = primaries();
        let found = find_recipes(&palette, Rgb::new(128, 0, 128), 2).unwrap();
        let pairs: Vec<_> = found.iter().filter(|s| s.recipe.len() == 2).collect();
        assert!(!pairs.is_empty());
        let best = pairs[0];
        assert_eq!(best.difference, 0.0);
        assert_eq!(best.result, Rgb::new(128, 0, 128));
        let ids: Vec<&str> = best
            .recipe
            .ingredients()
            .iter()
            .map(|i| i.color.id.as_str())
            .collect();
        assert_eq!(ids, ["red", "blue"]);
        assert_eq!(best.recipe.percentages(), vec![50.0, 50.0]);
    }

    #[test]
    fn test_tier_order() {
        let palette = primaries();
        let found = find_recipes(&palette, Rgb::new(120, 40, 140), 3).unwrap();
        let sizes: Vec<usize> = found.iter().map(|s| s.recipe.len()).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable();
        assert_eq!(sizes, sorted, "tiers must be concatenated in order");
        assert_eq!(sizes.iter().filter(|&&s| s == 1).count(), 4);
        assert!(sizes.iter().filter(|&&s| s == 2).count() <= 5);
        assert!(sizes.iter().filter(|&&s| s == 3).count() <= 3);
    }

    #[test]
    fn test_triples_are_distinct_and_sum_to_100() {
        let palette = primaries();
        let found = find_recipes(&palette, Rgb::new(140, 60, 140), 3).unwrap();
        let triples: Vec<_> = found.iter().filter(|s| s.recipe.len() == 3).collect();
        assert!(!triples.is_empty());
        for t in triples {
            let ids: Vec<&str> = t.recipe.ingredients().iter().map(|i| i.color.id.as_str()).collect();
            assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2], "{ids:?}");
            assert!((t.recipe.total_quantity() - 100.0).abs() < 1e-9);
            assert!(t.difference < 15.0);
        }
    }

    #[test]
    fn test_results_replay_through_mixer() {
        let palette = primaries();
        for scored in find_recipes(&palette, Rgb::new(90, 30, 170), 3).unwrap() {
            assert_eq!(scored.recipe.mix().unwrap(), scored.result);
            let de = delta_e(scored.result.to_lab(), Rgb::new(90, 30, 170).to_lab());
            assert_eq!(de, scored.difference);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let palette = Palette::ral_classic().unwrap();
        let target = Rgb::new(93, 120, 61);
        let parallel = RecipeFinder::new(palette).find(target, 3).unwrap();
        let sequential = RecipeFinder::with_options(palette, SearchOptions::default().sequential())
            .unwrap()
            .find(target, 3)
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_with_options_validates() {
        let palette = primaries();
        let options = SearchOptions {
            pair_ratio_step: 0,
            ..SearchOptions::default()
        };
        assert!(matches!(
            RecipeFinder::with_options(&palette, options),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_find_hex() {
        let palette = primaries();
        let finder = RecipeFinder::new(&palette);
        assert_eq!(
            finder.find_hex("#FFFFFF", 1).unwrap(),
            finder.find(Rgb::WHITE, 1).unwrap()
        );
        assert!(matches!(
            finder.find_hex("#fffff", 1),
            Err(Error::InvalidFormat(_))
        ));
    }
}
