//! Streak-image extraction from an open detector log.

use hdf5::File;
use streakscan_core::PixelGrid;

use crate::{Error, Result};

/// Dataset locations of the streak image within a detector log.
///
/// The defaults match the AWAKE event layout; differently-shaped source
/// files can substitute their own paths.
#[derive(Clone, Debug)]
pub struct StreakPaths {
    /// Flat row-major sample array.
    pub data: String,
    /// Scalar pixel width.
    pub width: String,
    /// Scalar pixel height.
    pub height: String,
}

impl Default for StreakPaths {
    fn default() -> Self {
        Self {
            data: "/AwakeEventData/XMPP-STREAK/StreakImage/streakImageData".to_string(),
            width: "/AwakeEventData/XMPP-STREAK/StreakImage/streakImageWidth".to_string(),
            height: "/AwakeEventData/XMPP-STREAK/StreakImage/streakImageHeight".to_string(),
        }
    }
}

/// Reads the flat sample array and both scalar dimensions, then
/// reshapes row-major into `height` x `width`.
///
/// # Errors
/// Returns an error if a dataset is missing, a stored dimension is
/// unusable, or the sample count does not match `width * height`.
pub fn extract_streak(file: &File, paths: &StreakPaths) -> Result<PixelGrid> {
    let flat = read_flat(file, &paths.data)?;
    let width = read_dimension(file, &paths.width)?;
    let height = read_dimension(file, &paths.height)?;
    Ok(PixelGrid::from_flat(flat, width, height)?)
}

fn read_flat(file: &File, path: &str) -> Result<Vec<f64>> {
    let dataset = file
        .dataset(path)
        .map_err(|_| Error::MissingDataset(path.to_string()))?;
    Ok(dataset.read_raw::<f64>()?)
}

fn read_dimension(file: &File, path: &str) -> Result<usize> {
    let dataset = file
        .dataset(path)
        .map_err(|_| Error::MissingDataset(path.to_string()))?;
    let values = dataset.read_raw::<i64>()?;
    let value = *values
        .first()
        .ok_or_else(|| Error::EmptyScalar(path.to_string()))?;
    usize::try_from(value).map_err(|_| Error::InvalidDimension {
        path: path.to_string(),
        value,
    })
}
