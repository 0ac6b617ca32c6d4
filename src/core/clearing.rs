//! Clearing module - run detection, clearing, and gravity compaction
//!
//! One clearing pass scans every row left-to-right and every column
//! top-to-bottom for same-color runs of three or more, clears each maximal
//! run in full, and reports how many cells were cleared. Gravity then
//! compacts each column toward the floor, keeping the relative order of the
//! surviving cells. The game state re-queues passes until one clears
//! nothing, which resolves chain reactions.
//!
//! The two scans of a pass are independent: a cell already cleared by the
//! horizontal scan reads as empty in the vertical scan of the same pass.

use crate::core::grid::Grid;
use crate::types::{EMPTY_CELL, GRID_HEIGHT, GRID_WIDTH, MIN_RUN_LEN};

/// Detect and clear all horizontal and vertical runs once.
///
/// Returns the number of cells cleared in this pass. Clearing mutates the
/// grid only; scoring and gravity are the caller's responsibility.
pub fn clear_runs(grid: &mut Grid) -> u32 {
    clear_horizontal_runs(grid) + clear_vertical_runs(grid)
}

fn clear_horizontal_runs(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let min_run = MIN_RUN_LEN as u8;

    for y in 0..GRID_HEIGHT {
        let mut x = 0;
        while x + min_run <= GRID_WIDTH {
            let color = grid.get(x, y);
            if color != EMPTY_CELL
                && grid.get(x + 1, y) == color
                && grid.get(x + 2, y) == color
            {
                // Extend to the maximal run, then clear all of it.
                let mut end = x + min_run;
                while end < GRID_WIDTH && grid.get(end, y) == color {
                    end += 1;
                }
                for run_x in x..end {
                    grid.set(run_x, y, EMPTY_CELL);
                    cleared += 1;
                }
                // Resume past the cleared run; never re-match inside it.
                x = end;
            } else {
                x += 1;
            }
        }
    }
    cleared
}

fn clear_vertical_runs(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let min_run = MIN_RUN_LEN as u8;

    for x in 0..GRID_WIDTH {
        let mut y = 0;
        while y + min_run <= GRID_HEIGHT {
            let color = grid.get(x, y);
            if color != EMPTY_CELL
                && grid.get(x, y + 1) == color
                && grid.get(x, y + 2) == color
            {
                let mut end = y + min_run;
                while end < GRID_HEIGHT && grid.get(x, end) == color {
                    end += 1;
                }
                for run_y in y..end {
                    grid.set(x, run_y, EMPTY_CELL);
                    cleared += 1;
                }
                y = end;
            } else {
                y += 1;
            }
        }
    }
    cleared
}

/// Compact every column toward the floor.
///
/// Non-empty cells drop straight down with their relative vertical order
/// preserved (stable compaction); emptied cells end up on top. Columns are
/// independent.
pub fn apply_gravity(grid: &mut Grid) {
    for x in 0..GRID_WIDTH {
        let mut write_y = GRID_HEIGHT - 1;
        for read_y in (0..GRID_HEIGHT).rev() {
            let color = grid.get(x, read_y);
            if color != EMPTY_CELL {
                grid.set(x, write_y, color);
                if write_y != read_y {
                    grid.set(x, read_y, EMPTY_CELL);
                }
                write_y = write_y.wrapping_sub(1);
            }
        }
    }
}
