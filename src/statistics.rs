use pathfinding::prelude::bfs;
use std::fmt;
use std::time::Duration;

use crate::algorithms::Algorithm;
use crate::engine::{SearchOutcome, SearchResult};
use crate::grid::Grid;

/// Summary of one run, reported by the binary and the comparison table.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub path_length: usize,
    /// Fewest moves on the grid as it was before the run.
    pub optimal_path_length: Option<usize>,
    pub expansions: usize,
    pub obstacles_spawned: usize,
    pub depth: Option<usize>,
    pub elapsed: Duration,
    pub route_efficiency: f64,
}

impl RunStatistics {
    pub fn new(
        algorithm: Algorithm,
        result: &SearchResult,
        optimal_path_length: Option<usize>,
        elapsed: Duration,
    ) -> Self {
        let mut stats = RunStatistics {
            algorithm,
            outcome: result.outcome,
            path_length: result.steps(),
            optimal_path_length,
            expansions: result.stats.expansions,
            obstacles_spawned: result.stats.obstacles_spawned,
            depth: result.stats.depth,
            elapsed,
            route_efficiency: 0.0,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Path length relative to the shortest possible; 1.0 is optimal.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match self.optimal_path_length {
            Some(optimal) if self.found() && optimal > 0 => {
                self.path_length as f64 / optimal as f64
            }
            _ => 0.0,
        };
    }
}

/// Shortest number of moves between the grid's endpoints on its current
/// obstacles, or `None` when either endpoint is unset or unreachable.
pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
    let start = grid.start()?;
    let target = grid.target()?;
    bfs(&start, |pos| grid.neighbors(*pos), |pos| *pos == target)
        .map(|path| path.len().saturating_sub(1))
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Outcome: {}", self.outcome.as_str())?;
        writeln!(f, "Path Length: {}", self.path_length)?;
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Optimal Path Length: {}", optimal)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        writeln!(f, "Expansions: {}", self.expansions)?;
        writeln!(f, "Dynamic Obstacles: {}", self.obstacles_spawned)?;
        if let Some(depth) = self.depth {
            writeln!(f, "Deepening Depth: {}", depth)?;
        }
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;

        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
            if self.route_efficiency > 1.0 {
                let extra = self
                    .path_length
                    .saturating_sub(self.optimal_path_length.unwrap_or(0));
                writeln!(f, "Extra moves over the optimum: {}", extra)?;
            }
        }

        Ok(())
    }
}
