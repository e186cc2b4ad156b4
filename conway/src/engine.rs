// engine.rs - Generation stepping
//
// A step reads the current buffer, writes the next generation and the
// matching colors in a single pass, then swaps the two cell buffers.

use tracing::trace;

use crate::color::{Palette, Rgba};
use crate::error::LifeResult;
use crate::grid::{Cell, ColumnTable, DEAD, Grid, RowOffsets};
use crate::rule::next_state;

/// Next state of cell `x` in the row described by `rows`.
#[inline]
pub(crate) fn evolve_cell(src: &[Cell], rows: RowOffsets, columns: &ColumnTable, x: usize) -> bool {
    let (l, r) = (columns.left[x], columns.right[x]);
    let RowOffsets { up, here, down } = rows;

    let neighbors = src[up + l] + src[up + x] + src[up + r]
        + src[here + l] + src[here + r]
        + src[down + l] + src[down + x] + src[down + r];

    next_state(src[here + x] != DEAD, neighbors)
}

/// Compute one full row of the next generation into `out`.
pub(crate) fn evolve_row(src: &[Cell], rows: RowOffsets, columns: &ColumnTable, out: &mut [Cell]) {
    for (x, cell) in out.iter_mut().enumerate() {
        *cell = Cell::from(evolve_cell(src, rows, columns, x));
    }
}

/// Write one row of next-state cells and its colors.
#[inline]
pub(crate) fn write_row(next: &mut [Cell], colors: &mut [Rgba], palette: Palette, row: &[Cell]) {
    for ((dst, color), &cell) in next.iter_mut().zip(colors.iter_mut()).zip(row) {
        *dst = cell;
        *color = palette.color_for(cell != DEAD);
    }
}

/// Advance `grid` by exactly one generation.
pub fn step(grid: &mut Grid) {
    let Grid {
        width,
        height,
        current,
        next,
        colors,
        palette,
        columns,
        ..
    } = &mut *grid;
    let (width, height, palette) = (*width, *height, *palette);
    let src: &[Cell] = current;

    for y in 0..height {
        let rows = RowOffsets::for_row(y, width, height);
        let row_next = &mut next[rows.here..rows.here + width];
        let row_colors = &mut colors[rows.here..rows.here + width];

        for x in 0..width {
            let alive = evolve_cell(src, rows, columns, x);
            row_next[x] = Cell::from(alive);
            row_colors[x] = palette.color_for(alive);
        }
    }

    grid.swap_generations();

    trace!(generation = grid.generation, "stepped");
}

/// Owns a grid and steps it.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    grid: Grid,
}

impl LifeEngine {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Build a grid and wrap it in an engine.
    pub fn with_seed(
        width: usize,
        height: usize,
        palette: Palette,
        seed: impl FnMut(usize, usize) -> bool,
    ) -> LifeResult<Self> {
        Grid::new(width, height, palette, seed).map(Self::new)
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        step(&mut self.grid);
    }

    /// Advance `generations` generations.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn colors(&self) -> &[Rgba] {
        self.grid.colors()
    }

    pub fn color_bytes(&self) -> &[u8] {
        self.grid.color_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(width: usize, height: usize, alive: &[(isize, isize)]) -> LifeEngine {
        let mut grid = Grid::empty(width, height, Palette::default()).unwrap();
        for &(x, y) in alive {
            grid.set_cell(x, y, true);
        }
        LifeEngine::new(grid)
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x as isize, y as isize) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn test_evolve_row_matches_step() {
        let mut engine = engine_with(6, 5, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let src = engine.grid().cells().to_vec();
        let columns = engine.grid().columns.clone();

        let mut expected = Vec::new();
        for y in 0..5 {
            let mut row = vec![DEAD; 6];
            evolve_row(&src, RowOffsets::for_row(y, 6, 5), &columns, &mut row);
            expected.extend(row);
        }

        engine.step();
        assert_eq!(engine.grid().cells(), expected.as_slice());
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut engine = engine_with(10, 10, &[(5, 5)]);
        engine.step();
        assert_eq!(engine.grid().population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut engine = engine_with(10, 10, &block);
        let before = engine.grid().cells().to_vec();

        engine.run(3);
        assert_eq!(engine.grid().cells(), before.as_slice());
        assert_eq!(engine.grid().generation(), 3);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut engine = engine_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);

        engine.step();
        assert_eq!(alive_cells(engine.grid()), [(5, 4), (5, 5), (5, 6)]);

        engine.step();
        assert_eq!(alive_cells(engine.grid()), [(4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_live_cell_with_four_neighbors_dies() {
        // Plus shape: the center has four live neighbors.
        let mut engine = engine_with(10, 10, &[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        engine.step();
        assert!(!engine.grid().is_alive(5, 5));
    }

    #[test]
    fn test_corner_neighbors_wrap() {
        // Three cells spread across corners give (0, 0) exactly three neighbors.
        let mut engine = engine_with(8, 6, &[(7, 5), (7, 0), (0, 5)]);
        engine.step();
        assert!(engine.grid().is_alive(0, 0));
    }

    #[test]
    fn test_colors_track_cells_after_step() {
        let mut engine = engine_with(10, 10, &[(1, 1), (2, 1), (3, 1), (8, 8), (9, 8)]);
        for _ in 0..4 {
            engine.step();
            let grid = engine.grid();
            for (cell, color) in grid.cells().iter().zip(grid.colors()) {
                assert_eq!(*color, grid.palette().color_for(*cell != DEAD));
            }
        }
    }

    #[test]
    fn test_single_column_grid_counts_wrapped_self() {
        // On a 1-wide torus the left and right neighbors are the cell itself.
        let mut engine = engine_with(1, 5, &[(0, 2)]);
        engine.step();
        // (0,2) sees itself twice on its own row: 2 neighbors, survives.
        assert!(engine.grid().is_alive(0, 2));
    }
}
