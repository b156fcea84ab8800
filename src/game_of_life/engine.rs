//! Generation-stepping engine with stabilization detection

use super::{load_grid_from_file, GameOfLifeRules, Grid, LoadError};
use std::path::Path;

/// Result of a single generation advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new generation was committed
    Changed,
    /// The next generation equals the current one; nothing was committed
    Stable,
}

/// Owns the current grid and generation counter.
///
/// Only exact fixed points are reported as [`Advance::Stable`]; oscillators
/// and spaceships keep running.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    grid: Grid,
    generation: u64,
}

impl LifeEngine {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// Build an engine from an initial-state file of the given dimensions
    pub fn from_file<P: AsRef<Path>>(path: P, height: usize, width: usize) -> Result<Self, LoadError> {
        load_grid_from_file(path, height, width).map(Self::new)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation and commit it unless it is identical to the current one
    pub fn advance(&mut self) -> Advance {
        let next = GameOfLifeRules::evolve(&self.grid);

        if next == self.grid {
            return Advance::Stable;
        }

        self.grid = next;
        self.generation += 1;
        Advance::Changed
    }
}
