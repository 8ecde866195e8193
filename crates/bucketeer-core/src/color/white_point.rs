//! Reference white for Lab
//!
//! Same 0-100 scale as [`Xyz`], so white has Y = 100.

use crate::color::Xyz;

/// CIE Standard Illuminant D65, 2° observer
pub const D65: Xyz = Xyz::new(95.047, 100.0, 108.883);
