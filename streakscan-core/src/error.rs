//! Error types for streakscan-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for streakscan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Filename does not carry a parseable epoch prefix.
    #[error("invalid timestamp prefix in \"{filename}\": {reason}")]
    InvalidTimestamp { filename: String, reason: String },

    /// Epoch seconds outside the representable calendar range.
    #[error("epoch value out of calendar range: {0} s")]
    EpochOutOfRange(i64),

    /// Flat sample count does not match the declared dimensions.
    #[error("cannot reshape {len} samples into {height} x {width}")]
    ShapeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    /// Declared image dimensions are unusable.
    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(String),
}
