//! Mapping filled grid cells to canvas rectangles.

use crate::types::{FilledCells, GRID_SIZE, PixelMap, Point, Rect};

/// Compute the canvas rectangle of every filled cell.
///
/// Cell `i` sits at column `i % GRID_SIZE` and row `i / GRID_SIZE`. Its
/// rectangle starts at `(column * cell_size, row * cell_size)` and
/// extends `cell_size` pixels right and down. Output order matches
/// `cells`.
///
/// Coordinates saturate at `u32::MAX`, so any `cell_size` is accepted;
/// only sizes passing [`IdenticonConfig::validate`] produce a map that
/// fits a renderable canvas.
///
/// [`IdenticonConfig::validate`]: crate::IdenticonConfig::validate
#[must_use = "returns the pixel map"]
#[allow(clippy::cast_possible_truncation)]
pub fn build_pixel_map(cells: &FilledCells, cell_size: u32) -> PixelMap {
    let rects = cells
        .indices()
        .iter()
        .map(|&index| {
            // Indices are below CELL_COUNT, so the cast is lossless.
            let index = index as u32;
            let left = (index % GRID_SIZE).saturating_mul(cell_size);
            let top = (index / GRID_SIZE).saturating_mul(cell_size);
            Rect::new(
                Point::new(left, top),
                Point::new(left.saturating_add(cell_size), top.saturating_add(cell_size)),
            )
        })
        .collect();
    PixelMap::new(rects)
}
