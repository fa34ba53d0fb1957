//! Grid construction and the fill rule.
//!
//! Digest bytes 0..15 are read as five rows of three values. Each row
//! `[a, b, c]` is mirrored into `[a, b, c, b, a]`, which gives the
//! identicon its left-right symmetry. Byte 15 is never used.
//!
//! A cell is filled when its value is even (zero included).

use crate::types::{CELL_COUNT, Digest, FilledCells, GRID_SIZE, Grid};

/// Digest bytes consumed per grid row before mirroring.
pub const ROW_SEED_LEN: usize = 3;

/// Expand the digest into the mirrored 5x5 grid.
#[must_use = "returns the mirrored grid"]
pub fn mirror_grid(digest: &Digest) -> Grid {
    let row_len = GRID_SIZE as usize;
    let mut values = [0u8; CELL_COUNT];
    let seeds = digest.as_bytes().chunks_exact(ROW_SEED_LEN);
    for (row, seed) in values.chunks_exact_mut(row_len).zip(seeds) {
        if let &[a, b, c] = seed {
            row.copy_from_slice(&[a, b, c, b, a]);
        }
    }
    Grid::new(values)
}

/// Indices of the even-valued cells of `grid`, ascending.
#[must_use = "returns the filled cells"]
pub fn filled_cells(grid: &Grid) -> FilledCells {
    let indices = grid
        .values()
        .iter()
        .enumerate()
        .filter(|&(_, value)| value % 2 == 0)
        .map(|(index, _)| index)
        .collect();
    FilledCells::new(indices)
}

/// Mirror the digest into a grid and select its filled cells.
#[must_use = "returns the filled cells"]
pub fn build_grid(digest: &Digest) -> FilledCells {
    filled_cells(&mirror_grid(digest))
}
