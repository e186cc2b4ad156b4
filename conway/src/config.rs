// config.rs - Startup configuration
//
// Everything the driver supplies once at startup: dimensions, seeding,
// colors, engine choice and tick cadence. Every field has a default, so a
// JSON document only needs the fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Simulation;
use crate::color::{Palette, Rgba};
use crate::coro::CoroEngine;
use crate::engine::LifeEngine;
use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::patterns::{apply_pattern, find_pattern};
use crate::seed::{DEFAULT_DENSITY, DensitySeed};

/// Which stepping strategy drives the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Single pass on the calling thread.
    #[default]
    Serial,
    /// One tokio task per row.
    Coro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Probability of a cell starting alive.
    pub density: f64,
    /// Fixed RNG seed for reproducible starts.
    pub seed: Option<u64>,
    /// Named pattern to start from instead of a random fill.
    pub pattern: Option<String>,
    pub foreground: Rgba,
    pub background: Rgba,
    pub engine: EngineKind,
    /// Seconds between generations.
    pub tick_seconds: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            width: 100,
            height: 100,
            density: DEFAULT_DENSITY,
            seed: None,
            pattern: None,
            foreground: palette.foreground,
            background: palette.background,
            engine: EngineKind::Serial,
            tick_seconds: 0.04,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> LifeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LifeResult<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        DensitySeed::new(self.density, self.seed)?;
        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(LifeError::InvalidTickInterval(self.tick_seconds));
        }
        if let Some(name) = &self.pattern {
            find_pattern(name)?;
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.foreground, self.background)
    }

    /// Apply the configured starting population to an existing grid.
    pub fn seed_grid(&self, grid: &mut Grid) -> LifeResult<()> {
        match &self.pattern {
            Some(name) => apply_pattern(grid, find_pattern(name)?),
            None => grid.reseed(DensitySeed::new(self.density, self.seed)?.cells()),
        }
        Ok(())
    }

    /// Allocate and seed a grid.
    pub fn build_grid(&self) -> LifeResult<Grid> {
        self.validate()?;
        let mut grid = Grid::empty(self.width, self.height, self.palette())?;
        self.seed_grid(&mut grid)?;
        Ok(grid)
    }

    /// Build the configured engine around a freshly seeded grid.
    pub fn build(&self) -> LifeResult<Box<dyn Simulation>> {
        let engine = LifeEngine::new(self.build_grid()?);
        info!(
            width = self.width,
            height = self.height,
            engine = ?self.engine,
            population = engine.grid().population(),
            "simulation ready"
        );
        Ok(match self.engine {
            EngineKind::Serial => Box::new(engine),
            EngineKind::Coro => Box::new(CoroEngine::new(engine)?),
        })
    }
}
