// seed.rs - Initial population
//
// Seeds are plain `FnMut(x, y) -> bool` closures so that `Grid::new` and
// `Grid::reseed` can take either a random fill or a pattern.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{LifeError, LifeResult};
use crate::patterns::Pattern;

/// Default share of cells alive at startup.
pub const DEFAULT_DENSITY: f64 = 0.15;

/// Each cell alive independently with probability `density`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensitySeed {
    density: f64,
    seed: Option<u64>,
}

impl DensitySeed {
    /// `seed` fixes the random stream; `None` draws it from the OS.
    pub fn new(density: f64, seed: Option<u64>) -> LifeResult<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        Ok(Self { density, seed })
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// A fresh seeding closure. Two closures from the same fixed seed
    /// produce the same grid.
    pub fn cells(&self) -> impl FnMut(usize, usize) -> bool + use<> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let density = self.density;
        move |_, _| rng.gen_bool(density)
    }
}

impl Default for DensitySeed {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

/// Seeds exactly the cells of `pattern`, top-left corner at `(x, y)`,
/// wrapped onto a `width x height` torus. Nothing is computed until the
/// grid asks for a cell, so a zero size reaches `Grid::new`'s check.
pub fn pattern_cells(
    pattern: &Pattern,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl FnMut(usize, usize) -> bool + use<> {
    let cells = pattern.cells;
    move |cx, cy| {
        cells
            .iter()
            .any(|&(row, col)| (y + row) % height == cy && (x + col) % width == cx)
    }
}
