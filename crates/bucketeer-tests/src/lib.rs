//! # bucketeer-tests
//!
//! Reference parity testing for bucketeer.
//!
//! This crate provides:
//! - Lab conversion parity against the `palette` crate
//! - A naive, single-threaded recipe search used as a parity oracle
//! - Accuracy measurements using deltaE2000
//! - Deterministic color patterns and palette fixtures
//!
//! ## Test Categories
//!
//! 1. **Color Space**: hex parsing, sRGB → Lab
//! 2. **Mixing**: weighted average properties
//! 3. **Similarity**: threshold filtering and ranking
//! 4. **Recipe Search**: tier structure, determinism, oracle parity
//! 5. **Palettes**: bundled RAL Classic and JSON loading

pub mod accuracy;
pub mod corpus;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, delta_e_2000};
pub use corpus::TestPalette;
pub use parity::{ParityResult, lab_parity, recipe_parity};
pub use patterns::{TestPattern, generate_colors};
