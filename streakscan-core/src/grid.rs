//! Row-major pixel grid reshaping.

use ndarray::Array2;

use crate::error::{Error, Result};

/// A 2-D grid of samples reshaped from a flat detector readout.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    data: Array2<f64>,
}

impl PixelGrid {
    /// Reshapes a flat row-major sample vector into `height` rows of
    /// `width` samples.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] if `flat.len() != width * height`.
    pub fn from_flat(flat: Vec<f64>, width: usize, height: usize) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| Error::InvalidDimensions(format!("{height} x {width} overflows")))?;
        if flat.len() != expected {
            return Err(Error::ShapeMismatch {
                len: flat.len(),
                width,
                height,
            });
        }
        let data = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| Error::InvalidDimensions(e.to_string()))?;
        Ok(Self { data })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Sample at (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    /// Borrows the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Flattens back to row-major order.
    #[must_use]
    pub fn into_flat(self) -> Vec<f64> {
        self.data.into_raw_vec_and_offset().0
    }
}

impl From<Array2<f64>> for PixelGrid {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}
