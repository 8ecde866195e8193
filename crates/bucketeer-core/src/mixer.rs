//! Weighted color mixing
//!
//! Mixing is a quantity-weighted average of each display RGB channel:
//!
//! ```text
//! channel = round(Σ(channel_i × quantity_i) / Σ quantity_i)
//! ```
//!
//! This is linear interpolation in sRGB, not a pigment model. It matches how
//! the recipes are scored, which is what matters for ranking.

use crate::color::Rgb;
use crate::recipe::Ingredient;
use crate::{Error, Result};

/// Mix palette ingredients by their quantities
///
/// Quantities do not need to be normalized.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `ingredients` is empty
/// - [`Error::InvalidQuantity`] for a negative or non-finite quantity
/// - [`Error::ZeroTotalQuantity`] when all quantities are zero
pub fn mix(ingredients: &[Ingredient<'_>]) -> Result<Rgb> {
    mix_weighted(ingredients.iter().map(|i| (i.color.hex, i.quantity)))
}

/// Mix arbitrary colors given as `(color, quantity)` pairs
///
/// Same contract as [`mix`], for colors that are not palette entries.
pub fn mix_weighted<I>(parts: I) -> Result<Rgb>
where
    I: IntoIterator<Item = (Rgb, f64)>,
{
    let mut acc = Accumulator::default();
    let mut count = 0usize;

    for (rgb, quantity) in parts {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(Error::InvalidQuantity(quantity));
        }
        acc.add(rgb, quantity);
        count += 1;
    }

    if count == 0 {
        return Err(Error::EmptyInput);
    }
    if acc.total == 0.0 {
        return Err(Error::ZeroTotalQuantity);
    }
    // A sum of finite quantities can still overflow
    if !acc.total.is_finite() {
        return Err(Error::InvalidQuantity(acc.total));
    }

    Ok(acc.finish())
}

/// Mix parts whose quantities are known to be positive and finite
///
/// Same arithmetic as [`mix_weighted`], so a recipe scored through this
/// path mixes to the same color when replayed through [`mix`].
#[inline]
pub(crate) fn blend(parts: &[(Rgb, f64)]) -> Rgb {
    debug_assert!(!parts.is_empty());
    let mut acc = Accumulator::default();
    for &(rgb, quantity) in parts {
        acc.add(rgb, quantity);
    }
    acc.finish()
}

#[derive(Default)]
struct Accumulator {
    sums: [f64; 3],
    total: f64,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, rgb: Rgb, quantity: f64) {
        self.sums[0] += f64::from(rgb.r) * quantity;
        self.sums[1] += f64::from(rgb.g) * quantity;
        self.sums[2] += f64::from(rgb.b) * quantity;
        self.total += quantity;
    }

    #[inline]
    fn finish(&self) -> Rgb {
        Rgb::new(
            channel(self.sums[0], self.total),
            channel(self.sums[1], self.total),
            channel(self.sums[2], self.total),
        )
    }
}

#[inline]
fn channel(sum: f64, total: f64) -> u8 {
    (sum / total).round().clamp(0.0, 255.0) as u8
}
