//! Recipes: palette colors with relative mix quantities

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::mixer;
use crate::palette::PaletteEntry;
use crate::{Error, Result};

/// Largest number of ingredients a recipe may hold
pub const MAX_INGREDIENTS: usize = 3;

/// A palette color and its relative quantity
///
/// Quantities are unit-agnostic weights (percent, millilitres, parts).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ingredient<'p> {
    /// Palette color
    pub color: &'p PaletteEntry,
    /// Relative quantity, positive
    pub quantity: f64,
}

impl<'p> Ingredient<'p> {
    /// Create a new ingredient
    #[inline]
    pub const fn new(color: &'p PaletteEntry, quantity: f64) -> Self {
        Self { color, quantity }
    }
}

/// An ordered list of 1 to 3 distinct ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Recipe<'p> {
    ingredients: Vec<Ingredient<'p>>,
}

impl<'p> Recipe<'p> {
    /// Build a recipe, validating its shape
    ///
    /// Requires 1 to [`MAX_INGREDIENTS`] ingredients with distinct palette
    /// ids and positive, finite quantities.
    pub fn new(ingredients: Vec<Ingredient<'p>>) -> Result<Self> {
        if ingredients.is_empty() {
            return Err(Error::EmptyInput);
        }
        if ingredients.len() > MAX_INGREDIENTS {
            return Err(Error::InvalidArgument(format!(
                "a recipe holds at most {MAX_INGREDIENTS} ingredients, got {}",
                ingredients.len()
            )));
        }
        for (i, ingredient) in ingredients.iter().enumerate() {
            if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                return Err(Error::InvalidQuantity(ingredient.quantity));
            }
            if ingredients[..i].iter().any(|o| o.color.id == ingredient.color.id) {
                return Err(Error::InvalidArgument(format!(
                    "{} appears twice in the recipe",
                    ingredient.color.id
                )));
            }
        }
        Ok(Self { ingredients })
    }

    /// Recipe built by the search, whose shape holds by construction
    pub(crate) fn from_parts(ingredients: Vec<Ingredient<'p>>) -> Self {
        debug_assert!((1..=MAX_INGREDIENTS).contains(&ingredients.len()));
        Self { ingredients }
    }

    /// Ingredients in recipe order
    #[inline]
    pub fn ingredients(&self) -> &[Ingredient<'p>] {
        &self.ingredients
    }

    /// Number of ingredients
    #[inline]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Always false, a recipe holds at least one ingredient
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> f64 {
        self.ingredients.iter().map(|i| i.quantity).sum()
    }

    /// Each ingredient's share of the total, in percent
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total_quantity();
        self.ingredients
            .iter()
            .map(|i| i.quantity * 100.0 / total)
            .collect()
    }

    /// Mixed color of the recipe
    pub fn mix(&self) -> Result<Rgb> {
        mixer::mix(&self.ingredients)
    }
}

impl fmt::Display for Recipe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (ingredient, share)) in self
            .ingredients
            .iter()
            .zip(self.percentages())
            .enumerate()
        {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(
                f,
                "{share:.1}% {} {}",
                ingredient.color.id, ingredient.color.name
            )?;
        }
        Ok(())
    }
}

/// A recipe with its mixed color and distance to the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe<'p> {
    /// The recipe
    pub recipe: Recipe<'p>,
    /// Mixed color of the recipe
    pub result: Rgb,
    /// Difference to the target (deltaE), lower is better
    pub difference: f64,
}

impl fmt::Display for ScoredRecipe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ΔE {:.2}): {}",
            self.result, self.difference, self.recipe
        )
    }
}
