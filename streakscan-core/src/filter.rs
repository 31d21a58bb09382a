//! Windowed median filtering for impulse-noise suppression.

use ndarray::Array2;

use crate::grid::PixelGrid;

/// Window half-extent; the full window is 3 x 3.
const RADIUS: usize = 1;

/// Applies a 3 x 3 median filter to the grid.
///
/// The window is clipped at the grid edges, so each output sample is
/// the median of the in-bounds cells only. For an even number of cells
/// the median is the mean of the two middle values.
#[must_use]
pub fn median_filter(grid: &PixelGrid) -> PixelGrid {
    let rows = grid.height();
    let cols = grid.width();
    let src = grid.as_array();
    let mut out = Array2::zeros((rows, cols));
    let mut window = Vec::with_capacity((2 * RADIUS + 1) * (2 * RADIUS + 1));

    for r in 0..rows {
        for c in 0..cols {
            window.clear();
            let r_end = (r + RADIUS).min(rows - 1);
            let c_end = (c + RADIUS).min(cols - 1);
            for wr in r.saturating_sub(RADIUS)..=r_end {
                for wc in c.saturating_sub(RADIUS)..=c_end {
                    window.push(src[[wr, wc]]);
                }
            }
            out[[r, c]] = median_of(&mut window);
        }
    }

    PixelGrid::from(out)
}

fn median_of(values: &mut [f64]) -> f64 {
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(flat: &[f64], width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_flat(flat.to_vec(), width, height).unwrap()
    }

    #[test]
    fn test_constant_grid_is_fixed_point() {
        let uniform = grid(&[7.5; 12], 4, 3);
        let once = median_filter(&uniform);
        assert_eq!(once, uniform);
        let twice = median_filter(&once);
        assert_eq!(twice, uniform);
    }

    #[test]
    fn test_two_by_three_scenario() {
        // Edge windows clip to 4 or 6 in-bounds cells.
        let filtered = median_filter(&grid(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2));
        let expected = [[3.0, 3.5, 4.0], [3.0, 3.5, 4.0]];
        for (r, row) in expected.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert_relative_eq!(filtered.get(r, c), value);
            }
        }
    }

    #[test]
    fn test_impulse_suppressed() {
        let mut flat = vec![1.0; 9];
        flat[4] = 100.0;
        let filtered = median_filter(&grid(&flat, 3, 3));
        assert_relative_eq!(filtered.get(1, 1), 1.0);
    }

    #[test]
    fn test_preserves_shape() {
        let filtered = median_filter(&grid(&[0.0; 15], 5, 3));
        assert_eq!(filtered.height(), 3);
        assert_eq!(filtered.width(), 5);
    }

    #[test]
    fn test_single_cell_grid() {
        let filtered = median_filter(&grid(&[42.0], 1, 1));
        assert_relative_eq!(filtered.get(0, 0), 42.0);
    }
}
