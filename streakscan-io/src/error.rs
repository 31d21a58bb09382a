//! I/O error types.

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Summary table writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Expected dataset not present in the file.
    #[error("missing dataset: {0}")]
    MissingDataset(String),

    /// Scalar dataset holds no value.
    #[error("empty scalar dataset: {0}")]
    EmptyScalar(String),

    /// Stored dimension is negative or too large.
    #[error("invalid dimension in {path}: {value}")]
    InvalidDimension { path: String, value: i64 },

    /// Grid too large for the raster encoder.
    #[error("image too large to render: {height} x {width}")]
    OversizedImage { width: usize, height: usize },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] streakscan_core::Error),
}
