// history.rs - Detect when the simulation has settled into a cycle
//
// Keeps hashes of the last few generations in a ring. A repeat inside the
// window means a still life or an oscillator with a short period.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::grid::Grid;

pub const DEFAULT_WINDOW: usize = 10;

/// Hash of the grid's current generation.
pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.width().hash(&mut hasher);
    grid.cells().hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone)]
pub struct CycleDetector {
    history: Vec<u64>,
    count: usize,
}

impl CycleDetector {
    /// `window` generations are remembered; zero is treated as one.
    pub fn new(window: usize) -> Self {
        Self {
            history: vec![0; window.max(1)],
            count: 0,
        }
    }

    /// Record the grid's current generation; true if it repeats one of the
    /// remembered generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let current = hash_grid(grid);
        let seen = self.count.min(self.history.len());
        if self.history[..seen].contains(&current) {
            debug!(generation = grid.generation(), "cycle detected");
            return true;
        }
        let slot = self.count % self.history.len();
        self.history[slot] = current;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.history.fill(0);
        self.count = 0;
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
