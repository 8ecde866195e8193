//! Error types for bucketeer

use thiserror::Error;

/// Result type for bucketeer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bucketeer operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Hex color string is not exactly six hex digits after an optional `#`
    #[error("Invalid hex color: {0:?}")]
    InvalidFormat(String),

    /// Mixing was requested without any ingredient
    #[error("Cannot mix an empty set of ingredients")]
    EmptyInput,

    /// All ingredient quantities add up to zero
    #[error("Total ingredient quantity is zero")]
    ZeroTotalQuantity,

    /// Quantity is negative, NaN or infinite
    #[error("Invalid ingredient quantity: {0}")]
    InvalidQuantity(f64),

    /// Integer channel outside 0..=255
    #[error("Color channel out of range: {0}")]
    ChannelOutOfRange(i64),

    /// Caller supplied an argument outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Palette data violates the catalog contract
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// Palette JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error means "nothing to mix".
    ///
    /// Presentation layers typically show black in that case.
    pub fn is_empty_mix(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::ZeroTotalQuantity)
    }
}
