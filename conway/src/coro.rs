// coro.rs - Row coroutine stepping
//
// Every row of the next generation is computed by its own tokio task over a
// shared snapshot of the current generation. The grid is only written after
// every row has come back, so a failed task leaves it untouched.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::trace;

use crate::Simulation;
use crate::engine::{LifeEngine, evolve_row, write_row};
use crate::error::{LifeError, LifeResult};
use crate::grid::{Cell, ColumnTable, DEAD, Grid, RowOffsets};

/// Row coroutine: computes row `y` of the next generation.
async fn process_row(
    y: usize,
    rows: RowOffsets,
    current: Arc<[Cell]>,
    columns: Arc<ColumnTable>,
    width: usize,
) -> (usize, Vec<Cell>) {
    let mut row = vec![DEAD; width];
    evolve_row(&current, rows, &columns, &mut row);
    tokio::task::yield_now().await; // Cooperative yielding
    (y, row)
}

/// Engine that steps through row coroutines on a tokio runtime.
///
/// Produces exactly the same generations and colors as [`LifeEngine`].
pub struct CoroEngine {
    engine: LifeEngine,
    columns: Arc<ColumnTable>,
    runtime: Runtime,
}

impl CoroEngine {
    pub fn new(engine: LifeEngine) -> LifeResult<Self> {
        let runtime = Runtime::new().map_err(LifeError::Runtime)?;
        let columns = Arc::new(engine.grid().columns.clone());
        Ok(Self {
            engine,
            columns,
            runtime,
        })
    }

    /// Advance one generation.
    pub fn step(&mut self) -> LifeResult<()> {
        let grid = self.engine.grid_mut();
        let (width, height) = (grid.width(), grid.height());
        let current: Arc<[Cell]> = Arc::from(grid.cells());
        let columns = &self.columns;

        let rows = self.runtime.block_on(async {
            // Spawn all rows at once so they time-slice on the runtime
            let handles: Vec<_> = (0..height)
                .map(|y| {
                    let rows = RowOffsets::for_row(y, width, height);
                    tokio::spawn(process_row(y, rows, Arc::clone(&current), Arc::clone(columns), width))
                })
                .collect();

            let mut rows = Vec::with_capacity(height);
            for handle in handles {
                rows.push(handle.await?);
            }
            Ok::<_, LifeError>(rows)
        })?;

        let Grid {
            next,
            colors,
            palette,
            ..
        } = &mut *grid;
        for (y, row) in rows {
            let start = y * width;
            write_row(&mut next[start..start + width], &mut colors[start..start + width], *palette, &row);
        }
        grid.swap_generations();

        trace!(generation = grid.generation(), "stepped rows");
        Ok(())
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn into_engine(self) -> LifeEngine {
        self.engine
    }
}

impl Simulation for CoroEngine {
    fn update_generation(&mut self) -> LifeResult<()> {
        self.step()
    }

    fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    fn grid_mut(&mut self) -> &mut Grid {
        self.engine.grid_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::patterns::{apply_pattern, find_pattern};
    use crate::seed::DensitySeed;

    #[test]
    fn test_matches_serial_engine() {
        let seed = DensitySeed::new(0.3, Some(99)).unwrap();
        let grid = Grid::new(23, 17, Palette::default(), seed.cells()).unwrap();

        let mut serial = LifeEngine::new(grid.clone());
        let mut coro = CoroEngine::new(LifeEngine::new(grid)).unwrap();

        for _ in 0..12 {
            serial.step();
            coro.step().unwrap();
            assert_eq!(coro.grid().cells(), serial.grid().cells());
            assert_eq!(coro.grid().colors(), serial.grid().colors());
            assert_eq!(coro.grid().generation(), serial.grid().generation());
        }
    }

    #[test]
    fn test_blinker_through_trait() {
        let mut grid = Grid::empty(10, 10, Palette::default()).unwrap();
        apply_pattern(&mut grid, find_pattern("Blinker").unwrap());
        let start = grid.cells().to_vec();

        let mut coro = CoroEngine::new(LifeEngine::new(grid)).unwrap();
        coro.update_generation().unwrap();
        assert_ne!(coro.grid().cells(), start.as_slice());
        coro.update_generation().unwrap();
        assert_eq!(coro.grid().cells(), start.as_slice());
    }
}
