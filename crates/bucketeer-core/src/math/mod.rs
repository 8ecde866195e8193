//! Mathematical building blocks for the Lab pipeline
//!
//! - 3x3 matrix for the RGB→XYZ step
//! - sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_decode_u8, srgb_gamma_decode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ};
