//! # bucketeer - paint mixing and RAL recipe matching
//!
//! Finds which standardized paint colors (RAL Classic by default), mixed in
//! which proportions, best approximate a target color.
//!
//! ## Pieces
//!
//! - [`color`]: sRGB ↔ hex, sRGB → XYZ → Lab (D65)
//! - [`distance`]: deltaE in Lab, Euclidean RGB distance, similarity ranking
//! - [`mixer`]: quantity-weighted RGB mixing
//! - [`search`]: tiered 1-, 2- and 3-color recipe search
//! - [`palette`]: read-only catalogs of named colors
//!
//! Mixing is linear interpolation in display RGB. It is an approximation of
//! real paint, good enough to rank candidate recipes.
//!
//! Every operation is a pure function of its inputs and the palette; nothing
//! is cached between calls except what a [`RecipeFinder`] derives from its
//! palette.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bucketeer_core::{Palette, RecipeFinder, Rgb};
//!
//! let ral = Palette::ral_classic()?;
//! let finder = RecipeFinder::new(ral);
//!
//! for scored in finder.find("#7a5c3e".parse::<Rgb>()?, 3)? {
//!     println!("{scored}");
//! }
//! # Ok::<(), bucketeer_core::Error>(())
//! ```

pub mod color;
pub mod distance;
pub mod error;
pub mod math;
pub mod mixer;
pub mod options;
pub mod palette;
pub mod recipe;
pub mod search;

pub use color::{Lab, Rgb, Xyz, canonical_hex, hex_to_rgb, rgb_to_hex, rgb_to_lab};
pub use distance::{SimilarColor, delta_e, rank_similar, rgb_distance, rgb_distance_hex, similar_to_mix};
pub use error::{Error, Result};
pub use mixer::{mix, mix_weighted};
pub use options::{DEFAULT_SIMILARITY_THRESHOLD, SIMILARITY_THRESHOLD_RANGE, SearchOptions};
pub use palette::{Palette, PaletteEntry};
pub use recipe::{Ingredient, MAX_INGREDIENTS, Recipe, ScoredRecipe};
pub use search::{RecipeFinder, find_recipes};

/// Version of bucketeer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
