//! Reference implementations
//!
//! Two kinds of oracle:
//!
//! - Lab values computed by the `palette` crate, an independent sRGB → Lab
//!   implementation (exact IEC coefficients, CIE 6/29 constants)
//! - A naive recipe search and similarity ranking written as plain nested
//!   loops over owned data, with none of the finder's index bookkeeping,
//!   Lab caching, or parallelism
//!
//! The naive search uses the library's mixer and deltaE so its output is
//! comparable bit for bit.

use bucketeer_core::{Lab, Palette, Rgb, delta_e, mix_weighted};
use palette::white_point::D65;
use palette::{FromColor, Srgb};

/// sRGB → Lab (D65) via the `palette` crate
pub fn palette_lab(rgb: Rgb) -> Lab {
    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f64>();
    let lab = palette::Lab::<D65, f64>::from_color(srgb);
    Lab::new(lab.l, lab.a, lab.b)
}

/// One recipe as the naive search sees it
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveRecipe {
    /// `(palette id, quantity)` in recipe order
    pub parts: Vec<(String, f64)>,
    /// Mixed color
    pub result: Rgb,
    /// deltaE to the target
    pub difference: f64,
}

impl NaiveRecipe {
    fn score(parts: Vec<(&str, Rgb, f64)>, target: Lab) -> anyhow::Result<Self> {
        let result = mix_weighted(parts.iter().map(|&(_, rgb, q)| (rgb, q)))?;
        Ok(Self {
            parts: parts
                .into_iter()
                .map(|(id, _, q)| (id.to_string(), q))
                .collect(),
            result,
            difference: delta_e(result.to_lab(), target),
        })
    }
}

fn sort_by_difference(recipes: &mut [NaiveRecipe]) {
    recipes.sort_by(|a, b| a.difference.total_cmp(&b.difference));
}

/// Tiered search with the default constants, written out longhand
pub fn naive_find_recipes(
    palette: &Palette,
    target: Rgb,
    max_ingredients: usize,
) -> anyhow::Result<Vec<NaiveRecipe>> {
    anyhow::ensure!(
        (1..=3).contains(&max_ingredients),
        "max_ingredients out of range: {max_ingredients}"
    );

    let target_lab = target.to_lab();
    let entries = palette.entries();
    let mut out = Vec::new();

    let mut singles = Vec::new();
    for e in entries {
        singles.push(NaiveRecipe::score(vec![(e.id.as_str(), e.hex, 100.0)], target_lab)?);
    }
    sort_by_difference(&mut singles);
    out.extend(singles.into_iter().take(5));

    if max_ingredients < 2 {
        return Ok(out);
    }

    let mut pairs = Vec::new();
    for i in 0..entries.len() {
        for j in i + 1..entries.len() {
            for ratio in (5..=95).step_by(5) {
                let first = f64::from(ratio);
                let recipe = NaiveRecipe::score(
                    vec![
                        (entries[i].id.as_str(), entries[i].hex, first),
                        (entries[j].id.as_str(), entries[j].hex, 100.0 - first),
                    ],
                    target_lab,
                )?;
                if recipe.difference < 20.0 {
                    pairs.push(recipe);
                }
            }
        }
    }
    sort_by_difference(&mut pairs);
    out.extend(pairs.iter().take(5).cloned());

    if max_ingredients < 3 {
        return Ok(out);
    }

    let mut triples = Vec::new();
    for seed in pairs.iter().take(10) {
        let (a_id, qa) = &seed.parts[0];
        let (b_id, qb) = &seed.parts[1];
        let a = palette.get(a_id).map(|e| e.hex);
        let b = palette.get(b_id).map(|e| e.hex);
        let (Some(a), Some(b)) = (a, b) else {
            anyhow::bail!("seed refers to unknown colors {a_id}, {b_id}");
        };

        for third in entries {
            if &third.id == a_id || &third.id == b_id {
                continue;
            }
            for share in (10..=40).step_by(10) {
                let share = f64::from(share);
                let remaining = 100.0 - share;
                let recipe = NaiveRecipe::score(
                    vec![
                        (a_id.as_str(), a, qa * remaining / 100.0),
                        (b_id.as_str(), b, qb * remaining / 100.0),
                        (third.id.as_str(), third.hex, share),
                    ],
                    target_lab,
                )?;
                if recipe.difference < 15.0 {
                    triples.push(recipe);
                }
            }
        }
    }
    sort_by_difference(&mut triples);
    out.extend(triples.into_iter().take(3));

    Ok(out)
}

/// Euclidean RGB ranking, written out longhand
pub fn naive_rank_similar(palette: &Palette, target: Rgb, threshold: f64) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = palette
        .iter()
        .map(|e| {
            let dr = f64::from(target.r) - f64::from(e.hex.r);
            let dg = f64::from(target.g) - f64::from(e.hex.g);
            let db = f64::from(target.b) - f64::from(e.hex.b);
            (e.id.clone(), (dr * dr + dg * dg + db * db).sqrt())
        })
        .filter(|(_, d)| *d <= threshold)
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lab_white() {
        let lab = palette_lab(Rgb::WHITE);
        assert!((lab.l - 100.0).abs() < 0.01, "L={}", lab.l);
        assert!(lab.a.abs() < 0.05 && lab.b.abs() < 0.05);
    }

    #[test]
    fn test_naive_rejects_bad_max() {
        let palette = Palette::empty();
        assert!(naive_find_recipes(&palette, Rgb::WHITE, 0).is_err());
        assert!(naive_find_recipes(&palette, Rgb::WHITE, 4).is_err());
    }

    #[test]
    fn test_naive_rank_ties_keep_catalog_order() {
        let palette = Palette::from_entries(vec![
            bucketeer_core::PaletteEntry::new("far", "Far", Rgb::new(0, 0, 40)),
            bucketeer_core::PaletteEntry::new("tie-b", "Tie B", Rgb::new(0, 3, 4)),
            bucketeer_core::PaletteEntry::new("tie-a", "Tie A", Rgb::new(0, 4, 3)),
            bucketeer_core::PaletteEntry::new("exact", "Exact", Rgb::BLACK),
        ])
        .unwrap();
        let ids: Vec<String> = naive_rank_similar(&palette, Rgb::BLACK, 100.0)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["exact", "tie-b", "tie-a", "far"]);

        let ours: Vec<&str> = bucketeer_core::rank_similar(&palette, Rgb::BLACK, 100.0)
            .unwrap()
            .into_iter()
            .map(|s| s.entry.id.as_str())
            .collect();
        assert_eq!(ids, ours);
    }

    #[test]
    fn test_naive_rank_includes_exact() {
        let palette = Palette::ral_classic().unwrap();
        let ranked = naive_rank_similar(palette, Rgb::WHITE, 0.0);
        assert!(ranked.iter().any(|(id, _)| id == "RAL 9010"));
    }
}
