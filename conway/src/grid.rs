// grid.rs - Grid state for the toroidal Game of Life
//
// Two equally sized cell buffers (current and next generation) plus an RGBA
// buffer with one pixel per cell. Everything is indexed row-major, `y * W + x`.

use tracing::{debug, info};

use crate::color::{Palette, Rgba};
use crate::error::{LifeError, LifeResult};

/// A cell stored in a byte: 0 = dead, 1 = alive.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// Wrap a signed coordinate onto `0..n`.
#[inline]
pub(crate) fn wrap(v: isize, n: usize) -> usize {
    v.rem_euclid(n as isize) as usize
}

/// Wrapped left/right neighbor column for every x, computed once per grid.
#[derive(Debug, Clone)]
pub(crate) struct ColumnTable {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl ColumnTable {
    fn new(width: usize) -> Self {
        let left = (0..width).map(|x| wrap(x as isize - 1, width)).collect();
        let right = (0..width).map(|x| wrap(x as isize + 1, width)).collect();
        Self { left, right }
    }
}

/// Start offsets of row y and its two wrapped neighbor rows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowOffsets {
    pub up: usize,
    pub here: usize,
    pub down: usize,
}

impl RowOffsets {
    #[inline]
    pub fn for_row(y: usize, width: usize, height: usize) -> Self {
        Self {
            up: wrap(y as isize - 1, height) * width,
            here: y * width,
            down: wrap(y as isize + 1, height) * width,
        }
    }
}

/// Fixed-size toroidal grid with its color buffer.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) current: Vec<Cell>,
    pub(crate) next: Vec<Cell>,
    pub(crate) colors: Vec<Rgba>,
    pub(crate) palette: Palette,
    pub(crate) generation: u64,
    pub(crate) columns: ColumnTable,
}

impl Grid {
    /// Allocate a `width x height` grid and seed it.
    ///
    /// `seed(x, y)` is called once per cell in row-major order and decides
    /// whether that cell starts alive. The color buffer is filled to match.
    pub fn new(
        width: usize,
        height: usize,
        palette: Palette,
        seed: impl FnMut(usize, usize) -> bool,
    ) -> LifeResult<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize / size_of::<Rgba>())
            .ok_or(LifeError::InvalidDimension { width, height })?;

        let mut grid = Self {
            width,
            height,
            current: vec![DEAD; len],
            next: vec![DEAD; len],
            colors: vec![palette.background; len],
            palette,
            generation: 0,
            columns: ColumnTable::new(width),
        };
        grid.fill(seed);

        info!(width, height, population = grid.population(), "grid initialized");
        Ok(grid)
    }

    /// Grid with every cell dead.
    pub fn empty(width: usize, height: usize, palette: Palette) -> LifeResult<Self> {
        Self::new(width, height, palette, |_, _| false)
    }

    fn fill(&mut self, mut seed: impl FnMut(usize, usize) -> bool) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                self.write(idx, seed(x, y));
            }
        }
        self.generation = 0;
    }

    #[inline]
    fn write(&mut self, idx: usize, alive: bool) {
        self.current[idx] = if alive { ALIVE } else { DEAD };
        self.colors[idx] = self.palette.color_for(alive);
    }

    /// Re-run seeding over the existing buffers and restart at generation 0.
    pub fn reseed(&mut self, seed: impl FnMut(usize, usize) -> bool) {
        self.fill(seed);
        debug!(population = self.population(), "grid reseeded");
    }

    /// Kill every cell and restart at generation 0.
    pub fn clear(&mut self) {
        self.current.fill(DEAD);
        self.colors.fill(self.palette.background);
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Make the next buffer current and count the generation.
    pub(crate) fn swap_generations(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Row-major index of a wrapped coordinate.
    #[inline]
    pub fn index_of(&self, x: isize, y: isize) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    /// Cell at a wrapped coordinate. Any coordinate is valid.
    #[inline]
    pub fn cell_at(&self, x: isize, y: isize) -> Cell {
        self.current[self.index_of(x, y)]
    }

    #[inline]
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.cell_at(x, y) != DEAD
    }

    /// Set a cell at a wrapped coordinate, keeping its color in step.
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) {
        let idx = self.index_of(x, y);
        self.write(idx, alive);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Current generation, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&c| c != DEAD).count()
    }

    /// Colors of the current generation, one per cell, row-major.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// The color buffer as flat RGBA bytes, ready for a texture upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(width: usize, height: usize) -> Grid {
        Grid::empty(width, height, Palette::default()).unwrap()
    }

    #[test]
    fn test_create_grid() {
        let grid = empty(8, 6);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.len(), 48);
        assert_eq!(grid.next.len(), 48);
        assert_eq!(grid.colors().len(), 48);
        assert_eq!(grid.color_bytes().len(), 48 * 4);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
        assert!(grid.colors().iter().all(|&c| c == Rgba::BLACK));
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 10), (10, 0), (0, 0), (usize::MAX, 2)] {
            let err = Grid::empty(w, h, Palette::default()).unwrap_err();
            assert!(
                matches!(err, LifeError::InvalidDimension { width, height } if width == w && height == h),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn test_seed_called_row_major() {
        let mut visited = Vec::new();
        let grid = Grid::new(3, 2, Palette::default(), |x, y| {
            visited.push((x, y));
            x == y
        })
        .unwrap();

        assert_eq!(visited, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.cells(), &[1, 0, 0, 0, 1, 0]);
        assert_eq!(grid.colors()[0], Rgba::CYAN);
        assert_eq!(grid.colors()[4], Rgba::CYAN);
        assert_eq!(grid.colors()[1], Rgba::BLACK);
    }

    #[test]
    fn test_cell_at_wraps() {
        let mut grid = empty(5, 4);
        grid.set_cell(4, 3, true);

        assert!(grid.is_alive(4, 3));
        assert!(grid.is_alive(-1, -1));
        assert!(grid.is_alive(9, 7));
        assert!(grid.is_alive(-6, 3));
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.cell_at(-1, 3), ALIVE);
    }

    #[test]
    fn test_set_cell_updates_color() {
        let mut grid = empty(4, 4);
        grid.set_cell(1, 2, true);
        assert_eq!(grid.colors()[grid.index_of(1, 2)], Rgba::CYAN);

        grid.set_cell(1, 2, false);
        assert_eq!(grid.colors()[grid.index_of(1, 2)], Rgba::BLACK);
    }

    #[test]
    fn test_clear_and_reseed() {
        let mut grid = Grid::new(4, 4, Palette::default(), |_, _| true).unwrap();
        grid.generation = 7;

        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert!(grid.colors().iter().all(|&c| c == Rgba::BLACK));

        grid.generation = 3;
        grid.reseed(|x, _| x == 0);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.colors()[grid.index_of(0, 3)], Rgba::CYAN);
    }

    #[test]
    fn test_column_table() {
        let table = ColumnTable::new(4);
        assert_eq!(table.left, [3, 0, 1, 2]);
        assert_eq!(table.right, [1, 2, 3, 0]);
    }

    #[test]
    fn test_row_offsets_wrap() {
        let top = RowOffsets::for_row(0, 10, 5);
        assert_eq!((top.up, top.here, top.down), (40, 0, 10));

        let bottom = RowOffsets::for_row(4, 10, 5);
        assert_eq!((bottom.up, bottom.here, bottom.down), (30, 40, 0));
    }
}
