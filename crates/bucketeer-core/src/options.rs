//! Tunable search parameters
//!
//! The defaults are empirical, not derived from a perceptual standard.
//! Each can be overridden, e.g. from a JSON object where missing fields keep
//! their defaults.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default RGB distance for "similar colors" browsing
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 30.0;

/// Range offered to users for the similarity threshold
pub const SIMILARITY_THRESHOLD_RANGE: RangeInclusive<f64> = 10.0..=50.0;

/// Options for [`RecipeFinder`](crate::search::RecipeFinder)
///
/// Ratios and shares are integer percentages of the whole mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Single-color recipes kept
    pub single_count: usize,
    /// Two-color recipes kept
    pub pair_count: usize,
    /// Best two-color candidates reused as bases for three-color recipes
    pub pair_seed_count: usize,
    /// First share of the first pair color
    pub pair_ratio_min: u32,
    /// Last share of the first pair color
    pub pair_ratio_max: u32,
    /// Share increment between pair ratios
    pub pair_ratio_step: u32,
    /// Pair candidates at or above this deltaE are discarded
    pub pair_max_difference: f64,
    /// Three-color recipes kept
    pub triple_count: usize,
    /// First share of the third color
    pub third_share_min: u32,
    /// Last share of the third color
    pub third_share_max: u32,
    /// Share increment for the third color
    pub third_share_step: u32,
    /// Triple candidates at or above this deltaE are discarded
    pub triple_max_difference: f64,
    /// Sweep pairs and triples on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            single_count: 5,
            pair_count: 5,
            pair_seed_count: 10,
            pair_ratio_min: 5,
            pair_ratio_max: 95,
            pair_ratio_step: 5,
            pair_max_difference: 20.0,
            triple_count: 3,
            third_share_min: 10,
            third_share_max: 40,
            third_share_step: 10,
            triple_max_difference: 15.0,
            parallel: true,
        }
    }
}

impl SearchOptions {
    /// Parse options from JSON; absent fields take their default
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Same options, sequential sweeps
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that sweeps are non-empty and bounds are usable
    pub fn validate(&self) -> Result<()> {
        check_sweep(
            "pair ratio",
            self.pair_ratio_min,
            self.pair_ratio_max,
            self.pair_ratio_step,
        )?;
        check_sweep(
            "third share",
            self.third_share_min,
            self.third_share_max,
            self.third_share_step,
        )?;
        check_bound("pair_max_difference", self.pair_max_difference)?;
        check_bound("triple_max_difference", self.triple_max_difference)?;
        Ok(())
    }

    /// Shares of the first pair color, in percent
    pub fn pair_ratios(&self) -> impl Iterator<Item = u32> + Clone {
        sweep(self.pair_ratio_min, self.pair_ratio_max, self.pair_ratio_step)
    }

    /// Shares of the third color, in percent
    pub fn third_shares(&self) -> impl Iterator<Item = u32> + Clone {
        sweep(self.third_share_min, self.third_share_max, self.third_share_step)
    }
}

fn sweep(min: u32, max: u32, step: u32) -> impl Iterator<Item = u32> + Clone {
    (min..=max).step_by(step.max(1) as usize)
}

fn check_sweep(what: &str, min: u32, max: u32, step: u32) -> Result<()> {
    if step == 0 {
        return Err(Error::InvalidArgument(format!("{what} step is zero")));
    }
    if min == 0 || max >= 100 || min > max {
        return Err(Error::InvalidArgument(format!(
            "{what} range {min}..={max} must lie within 1..=99"
        )));
    }
    Ok(())
}

fn check_bound(what: &str, bound: f64) -> Result<()> {
    if !bound.is_finite() || bound <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{what} must be a positive finite number, got {bound}"
        )));
    }
    Ok(())
}
