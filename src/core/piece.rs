//! Active piece - the falling block owned by the game state
//!
//! An [`ActivePiece`] is the one block currently in play: a shape matrix, a
//! color index, and an origin in grid coordinates. The origin row may be
//! negative while the piece is still entering the grid.

use arrayvec::ArrayVec;

use crate::core::collision::collides;
use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::shapes::{ShapeGrid, SHAPE_SIZE, SHAPE_TEMPLATES};
use crate::types::{COLOR_COUNT, GRID_WIDTH};

/// Upper bound on occupied cells in a shape matrix.
pub const MAX_SHAPE_CELLS: usize = SHAPE_SIZE * SHAPE_SIZE;

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub x: i8,
    pub y: i8,
    pub shape: ShapeGrid,
    pub color: u8,
}

impl ActivePiece {
    /// Spawn origin: horizontal center, top row.
    pub const SPAWN_X: i8 = (GRID_WIDTH as i8) / 2 - 1;
    pub const SPAWN_Y: i8 = 0;

    /// Draw a shape template and a color uniformly at random and place the
    /// piece at the spawn origin.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        let template = SHAPE_TEMPLATES[rng.next_range(SHAPE_TEMPLATES.len() as u32) as usize];
        let color = rng.next_range(COLOR_COUNT as u32) as u8 + 1;
        Self {
            x: Self::SPAWN_X,
            y: Self::SPAWN_Y,
            shape: template,
            color,
        }
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_SHAPE_CELLS> {
        let mut out = ArrayVec::new();
        for (row, cells) in self.shape.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied {
                    out.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        out
    }

    /// Whether the piece fits the grid at its current position.
    pub fn fits(&self, grid: &Grid) -> bool {
        !collides(grid, self.x, self.y, &self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered_on_top_row() {
        let mut rng = SimpleRng::new(42);
        let piece = ActivePiece::spawn(&mut rng);

        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
        assert!(piece.color >= 1 && piece.color <= COLOR_COUNT);
    }

    #[test]
    fn spawn_draws_known_templates() {
        let mut rng = SimpleRng::new(9);
        for _ in 0..50 {
            let piece = ActivePiece::spawn(&mut rng);
            assert!(SHAPE_TEMPLATES.contains(&piece.shape));
        }
    }

    #[test]
    fn cells_are_origin_relative() {
        let piece = ActivePiece {
            x: 3,
            y: 5,
            shape: [[true, true], [true, false]],
            color: 2,
        };

        let cells = piece.cells();
        assert_eq!(cells.as_slice(), &[(3, 5), (4, 5), (3, 6)]);
    }

    #[test]
    fn fits_matches_collision_checker() {
        let mut grid = Grid::new();
        let piece = ActivePiece {
            x: 0,
            y: 18,
            shape: [[true, true], [true, true]],
            color: 1,
        };
        assert!(piece.fits(&grid));

        grid.set(0, 19, 5);
        assert!(!piece.fits(&grid));
    }
}
