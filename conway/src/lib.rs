//! Conway's Game of Life on a torus.
//!
//! The grid keeps two cell buffers and an RGBA color buffer with one pixel per
//! cell. Each step computes the next generation with wrap-around neighbors and
//! paints the color buffer in the same pass, so a renderer can upload
//! [`Grid::color_bytes`] straight into a texture after every tick.
//!
//! Pacing, input and display are left to the caller.

pub mod color;
pub mod config;
pub mod coro;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rule;
pub mod seed;

pub use color::{Palette, Rgba};
pub use config::{EngineKind, SimConfig};
pub use coro::CoroEngine;
pub use engine::LifeEngine;
pub use error::{LifeError, LifeResult};
pub use grid::{ALIVE, Cell, DEAD, Grid};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern, find_pattern};
pub use seed::DensitySeed;

/// Common interface over the stepping strategies.
pub trait Simulation {
    /// Advance exactly one generation.
    fn update_generation(&mut self) -> LifeResult<()>;

    fn grid(&self) -> &Grid;

    fn grid_mut(&mut self) -> &mut Grid;

    fn hash_grid(&self) -> u64 {
        history::hash_grid(self.grid())
    }

    fn clear_grid(&mut self) {
        self.grid_mut().clear();
    }

    fn apply_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(self.grid_mut(), pattern);
    }
}

impl Simulation for LifeEngine {
    fn update_generation(&mut self) -> LifeResult<()> {
        self.step();
        Ok(())
    }

    fn grid(&self) -> &Grid {
        LifeEngine::grid(self)
    }

    fn grid_mut(&mut self) -> &mut Grid {
        LifeEngine::grid_mut(self)
    }
}
