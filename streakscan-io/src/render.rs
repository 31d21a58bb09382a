//! PNG rendering of a streak image.

use std::path::Path;

use image::{Rgb, RgbImage};
use streakscan_core::PixelGrid;

use crate::{Error, Result};

/// Title reported alongside the rendered image.
pub const IMAGE_TITLE: &str = "Streak Image";

/// Rasterizes the grid to a PNG at native resolution, overwriting
/// `path`.
///
/// Samples are min/max normalized before the colormap is applied; a
/// constant grid renders at the colormap's low end.
///
/// # Errors
/// Returns an error if the grid exceeds the encoder's dimension range
/// or the file cannot be written.
pub fn render_png<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let width = u32::try_from(grid.width()).map_err(|_| Error::OversizedImage {
        width: grid.width(),
        height: grid.height(),
    })?;
    let height = u32::try_from(grid.height()).map_err(|_| Error::OversizedImage {
        width: grid.width(),
        height: grid.height(),
    })?;

    let (lo, hi) = value_range(grid);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let val = (grid.get(y as usize, x as usize) - lo) / span;
        *pixel = colorize(val);
    }
    img.save(path)?;
    Ok(())
}

/// Maps a normalized value [0, 1] to an approximate viridis color
/// (blue through teal and green to yellow).
fn colorize(val: f64) -> Rgb<u8> {
    let r = to_channel(255.0 * val.powi(2));
    let g = to_channel(255.0 * val);
    let b = to_channel(255.0 * (1.0 - val));
    Rgb([r, g, b])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

fn value_range(grid: &PixelGrid) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in grid.as_array() {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}
