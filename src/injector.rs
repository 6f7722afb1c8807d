use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::{Grid, Position};

/// Blocks random cells while a search is running.
///
/// Each [`ObstacleInjector::step`] draws one uniformly random cell and, with
/// the configured probability, blocks it unless it is the start or target.
/// Nothing keeps the target reachable: a run may lose every route to it, and
/// a cell already sitting in a frontier may be blocked after it was queued.
pub struct ObstacleInjector {
    probability: f64,
    rng: StdRng,
    spawned: usize,
}

impl ObstacleInjector {
    /// `probability` must lie in `[0, 1]`; see [`crate::SearchOptions::validate`].
    pub fn new(probability: f64, seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        ObstacleInjector {
            probability,
            rng,
            spawned: 0,
        }
    }

    pub fn disabled() -> Self {
        Self::new(0.0, Some(0))
    }

    pub fn is_enabled(&self) -> bool {
        self.probability > 0.0
    }

    /// Number of cells blocked so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn step(&mut self, grid: &mut Grid) -> Option<Position> {
        if !self.is_enabled() {
            return None;
        }
        let pos = Position {
            row: self.rng.gen_range(0..grid.size),
            col: self.rng.gen_range(0..grid.size),
        };
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        if grid.block(pos) {
            self.spawned += 1;
            debug!(%pos, "dynamic obstacle spawned");
            Some(pos)
        } else {
            None
        }
    }
}
