//! Accuracy measurement using perceptual color difference metrics
//!
//! Recipes are ranked by plain CIE76 distance. CIEDE2000 is used here as an
//! independent yardstick for how good the proposals actually look.

use bucketeer_core::{Lab, Rgb, ScoredRecipe};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of differences
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(f64::total_cmp);

        let count = samples.len();
        let mean = if count == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / count as f64
        };
        let max = samples.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = samples
            .get(p95_idx.min(count.saturating_sub(1)))
            .copied()
            .unwrap_or(0.0);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }

    /// Check if differences are acceptable (deltaE < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }
}

/// Calculate deltaE2000 between two Lab colors
///
/// This is the industry-standard color difference formula that correlates
/// well with human perception. A deltaE2000 of 1.0 is roughly the smallest
/// difference perceptible to trained observers.
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Parametric weighting factors
    let k_l = 1.0;
    let k_c = 1.0;
    let k_h = 1.0;

    // Calculate C* (chroma)
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_avg = (c1 + c2) / 2.0;

    // Calculate G (adjustment factor for a*)
    let c_avg_pow7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + 6103515625.0_f64)).sqrt()); // 25^7

    // Adjusted a* values
    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    // Calculate C'
    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
    let c_avg_prime = (c1_prime + c2_prime) / 2.0;

    // Calculate h' (hue angle)
    let h1_prime = if a1_prime == 0.0 && b1 == 0.0 {
        0.0
    } else {
        let mut h = b1.atan2(a1_prime).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        h
    };

    let h2_prime = if a2_prime == 0.0 && b2 == 0.0 {
        0.0
    } else {
        let mut h = b2.atan2(a2_prime).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        h
    };

    // Calculate delta h'
    let delta_h_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };

    // Calculate Delta H'
    let delta_h_prime_big =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Calculate H' average
    let h_avg_prime = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else {
        let diff = (h1_prime - h2_prime).abs();
        if diff <= 180.0 {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        }
    };

    // Calculate T
    let t = 1.0 - 0.17 * (h_avg_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg_prime).to_radians().cos()
        + 0.32 * (3.0 * h_avg_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg_prime - 63.0).to_radians().cos();

    // Calculate delta L', delta C'
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    // Calculate L' average
    let l_avg_prime = (l1 + l2) / 2.0;

    // Calculate S_L, S_C, S_H
    let l_avg_minus_50_sq = (l_avg_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_avg_minus_50_sq) / (20.0 + l_avg_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_avg_prime;
    let s_h = 1.0 + 0.015 * c_avg_prime * t;

    // Calculate R_T (rotation function)
    let delta_theta = 30.0 * (-((h_avg_prime - 275.0) / 25.0).powi(2)).exp();
    let c_avg_prime_pow7 = c_avg_prime.powi(7);
    let r_c = 2.0 * (c_avg_prime_pow7 / (c_avg_prime_pow7 + 6103515625.0_f64)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta.to_radians()).sin();

    // Calculate final deltaE2000
    let term1 = delta_l_prime / (k_l * s_l);
    let term2 = delta_c_prime / (k_c * s_c);
    let term3 = delta_h_prime_big / (k_h * s_h);
    let term4 = r_t * (delta_c_prime / (k_c * s_c)) * (delta_h_prime_big / (k_h * s_h));

    (term1 * term1 + term2 * term2 + term3 * term3 + term4).sqrt()
}

/// Compare two equally long Lab sequences with CIE76
pub fn compare_labs(reference: &[Lab], result: &[Lab]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    DeltaEStats::from_samples(
        reference
            .iter()
            .zip(result)
            .map(|(a, b)| a.distance(b))
            .collect(),
    )
}

/// CIEDE2000 between a target and what a recipe mixes to
pub fn recipe_delta_e_2000(target: Rgb, scored: &ScoredRecipe<'_>) -> f64 {
    delta_e_2000(target.to_lab(), scored.result.to_lab())
}

/// CIEDE2000 statistics over the best recipe of each search
pub fn best_recipe_stats<'p, I>(searches: I) -> DeltaEStats
where
    I: IntoIterator<Item = (Rgb, Vec<ScoredRecipe<'p>>)>,
{
    DeltaEStats::from_samples(
        searches
            .into_iter()
            .filter_map(|(target, found)| {
                found
                    .iter()
                    .map(|s| recipe_delta_e_2000(target, s))
                    .min_by(f64::total_cmp)
            })
            .collect(),
    )
}
