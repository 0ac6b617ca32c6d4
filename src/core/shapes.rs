//! Shapes module - block templates and rotation
//!
//! Every piece is cut from a 2x2 occupancy matrix. The five templates are
//! immutable; rotation returns a new matrix and never mutates its input.

/// Side length of the shape matrix.
pub const SHAPE_SIZE: usize = 2;

/// A shape is a small boolean occupancy matrix, indexed `[row][col]`.
pub type ShapeGrid = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

/// The fixed set of spawnable shape templates.
pub const SHAPE_TEMPLATES: [ShapeGrid; 5] = [
    // Square
    [[true, true], [true, true]],
    // Horizontal pair
    [[true, true], [false, false]],
    // Vertical pair
    [[true, false], [true, false]],
    // Corner
    [[true, true], [true, false]],
    // Mirrored corner
    [[true, true], [false, true]],
];

/// Rotate a shape 90 degrees clockwise.
///
/// `rotated[r][c] == shape[SHAPE_SIZE - 1 - c][r]`, the usual
/// transpose-and-reverse matrix rotation.
pub fn rotate_cw(shape: &ShapeGrid) -> ShapeGrid {
    let mut rotated = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    for (r, row) in rotated.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = shape[SHAPE_SIZE - 1 - c][r];
        }
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_pair_rotates_to_horizontal() {
        let vertical = [[true, false], [true, false]];
        let rotated = rotate_cw(&vertical);
        assert_eq!(rotated, [[true, true], [false, false]]);
    }

    #[test]
    fn corner_rotation_sequence() {
        let corner = [[true, true], [true, false]];
        let once = rotate_cw(&corner);
        assert_eq!(once, [[true, true], [false, true]]);

        let twice = rotate_cw(&once);
        assert_eq!(twice, [[false, true], [true, true]]);
    }

    #[test]
    fn four_rotations_return_to_original() {
        for template in &SHAPE_TEMPLATES {
            let mut shape = *template;
            for _ in 0..4 {
                shape = rotate_cw(&shape);
            }
            assert_eq!(&shape, template);
        }
    }

    #[test]
    fn square_is_rotation_invariant() {
        let square = SHAPE_TEMPLATES[0];
        assert_eq!(rotate_cw(&square), square);
    }

    #[test]
    fn every_template_has_occupied_cells() {
        for template in &SHAPE_TEMPLATES {
            let count = template
                .iter()
                .flatten()
                .filter(|&&occupied| occupied)
                .count();
            assert!(count >= 2 && count <= 4);
        }
    }
}
