//! Weighted mixing properties

use bucketeer_core::{Error, Ingredient, Palette, Recipe, Rgb, mix, mix_weighted};
use bucketeer_tests::{TestPattern, generate_colors};

fn colors() -> Vec<Rgb> {
    generate_colors(TestPattern::Random(7), 64)
}

#[test]
fn test_self_mix_is_identity() {
    for c in colors() {
        assert_eq!(mix_weighted([(c, 3.0), (c, 11.0), (c, 0.5)]).unwrap(), c);
    }
}

#[test]
fn test_order_independent() {
    let cs = colors();
    for w in cs.windows(3) {
        let a = mix_weighted([(w[0], 10.0), (w[1], 30.0), (w[2], 60.0)]).unwrap();
        let b = mix_weighted([(w[2], 60.0), (w[0], 10.0), (w[1], 30.0)]).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_scale_invariant() {
    let cs = colors();
    for w in cs.windows(2) {
        let a = mix_weighted([(w[0], 1.0), (w[1], 4.0)]).unwrap();
        let b = mix_weighted([(w[0], 20.0), (w[1], 80.0)]).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_result_within_channel_bounds() {
    let cs = colors();
    for w in cs.windows(3) {
        let mixed = mix_weighted([(w[0], 15.0), (w[1], 35.0), (w[2], 50.0)]).unwrap();
        let channels = |c: Rgb| c.to_array();
        for ch in 0..3 {
            let values = w.iter().map(|&c| channels(c)[ch]);
            let lo = values.clone().min().unwrap();
            let hi = values.max().unwrap();
            let v = channels(mixed)[ch];
            assert!(lo <= v && v <= hi, "channel {ch}: {v} outside {lo}..={hi}");
        }
    }
}

#[test]
fn test_recipe_mix_matches_free_function() {
    let ral = Palette::ral_classic().unwrap();
    let white = ral.get("RAL 9010").unwrap();
    let red = ral.get("RAL 3020").unwrap();
    let ingredients = vec![Ingredient::new(white, 30.0), Ingredient::new(red, 70.0)];

    let recipe = Recipe::new(ingredients.clone()).unwrap();
    assert_eq!(recipe.mix().unwrap(), mix(&ingredients).unwrap());
    // 0.3 * 255 + 0.7 * 204 = 219.3
    assert_eq!(recipe.mix().unwrap().r, 219);
}

#[test]
fn test_mix_errors() {
    let c = Rgb::new(1, 2, 3);
    assert!(matches!(mix(&[]), Err(Error::EmptyInput)));
    assert!(matches!(mix_weighted([(c, 0.0)]), Err(Error::ZeroTotalQuantity)));
    assert!(matches!(mix_weighted([(c, -0.5)]), Err(Error::InvalidQuantity(_))));
    assert!(matches!(mix_weighted([(c, f64::NAN)]), Err(Error::InvalidQuantity(_))));
    assert!(Error::EmptyInput.is_empty_mix());
    assert!(Error::ZeroTotalQuantity.is_empty_mix());
}
