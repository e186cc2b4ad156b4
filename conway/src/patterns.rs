// patterns.rs - Named starting patterns
//
// Cells are (row, col) offsets from the pattern's top-left corner. Stamping
// wraps around the torus, so a pattern never loses cells at an edge.

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn bounds(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Set this pattern's cells with the top-left corner at `(x, y)`.
    pub fn stamp(&self, grid: &mut Grid, x: isize, y: isize) {
        for &(row, col) in self.cells {
            grid.set_cell(x + col as isize, y + row as isize, true);
        }
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn find_pattern(name: &str) -> LifeResult<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
}

/// Clear the grid and stamp `pattern` in its center.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let (rows, cols) = pattern.bounds();
    let x = (grid.width() as isize - cols as isize) / 2;
    let y = (grid.height() as isize - rows as isize) / 2;
    pattern.stamp(grid, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    #[test]
    fn test_find_pattern_ignores_case() {
        assert_eq!(find_pattern("glider").unwrap().name, "Glider");
        assert_eq!(find_pattern("GOSPER GLIDER GUN").unwrap().cells.len(), 36);
        assert!(matches!(find_pattern("spaceship"), Err(LifeError::UnknownPattern(name)) if name == "spaceship"));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(find_pattern("Blinker").unwrap().bounds(), (1, 3));
        assert_eq!(find_pattern("Pulsar").unwrap().bounds(), (13, 13));
        assert_eq!(find_pattern("Gosper Glider Gun").unwrap().bounds(), (9, 36));
    }

    #[test]
    fn test_apply_pattern_centers() {
        let mut grid = Grid::new(10, 10, Palette::default(), |_, _| true).unwrap();
        apply_pattern(&mut grid, find_pattern("Blinker").unwrap());

        assert_eq!(grid.population(), 3);
        assert!(grid.is_alive(3, 4));
        assert!(grid.is_alive(4, 4));
        assert!(grid.is_alive(5, 4));
    }

    #[test]
    fn test_stamp_wraps_at_edges() {
        let mut grid = Grid::empty(8, 8, Palette::default()).unwrap();
        find_pattern("Beacon").unwrap().stamp(&mut grid, 6, 6);

        assert_eq!(grid.population(), 8);
        assert!(grid.is_alive(6, 6));
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 1));
    }

    #[test]
    fn test_pattern_larger_than_grid_still_applies() {
        let mut grid = Grid::empty(20, 20, Palette::default()).unwrap();
        apply_pattern(&mut grid, find_pattern("Gosper Glider Gun").unwrap());
        assert!(grid.population() > 0);
    }
}
