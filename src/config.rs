use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::engine::SearchOptions;
use crate::error::Result;
use crate::grid::{Grid, Position};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Step-by-step grid search with dynamic obstacles", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub grid_size: usize,

    /// One of bfs, dfs, dls, iddfs, ucs, bidirectional, or all.
    #[arg(long, default_value = "bfs")]
    pub algorithm: String,

    /// Start cell as ROW,COL.
    #[arg(long, default_value = "0,0")]
    pub start: Position,

    /// Target cell as ROW,COL; defaults to the bottom-right corner.
    #[arg(long)]
    pub target: Option<Position>,

    /// Static obstacle as ROW,COL; repeatable.
    #[arg(long = "block")]
    pub blocks: Vec<Position>,

    /// Random static obstacles scattered before the run.
    #[arg(long, default_value_t = 0)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 10)]
    pub depth_limit: usize,

    #[arg(long, default_value_t = 15)]
    pub max_depth: usize,

    #[arg(long, default_value_t = 0.02)]
    pub obstacle_probability: f64,

    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = 20)]
    pub path_delay_ms: u64,

    /// Seed for wall placement and the dynamic obstacle injector.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Cancel the search after this many seconds.
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Tracing filter, e.g. `debug` or `dynamic_search=trace`; falls back to RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn search_options(&self) -> SearchOptions {
        let options = SearchOptions {
            depth_limit: self.depth_limit,
            max_depth: self.max_depth,
            obstacle_probability: self.obstacle_probability,
            step_delay: Duration::from_millis(self.delay_ms),
            path_delay: Duration::from_millis(self.path_delay_ms),
            seed: self.seed,
        };
        if self.no_visualization {
            options.instant()
        } else {
            options
        }
    }

    /// `--algorithm all` runs every strategy side by side.
    pub fn compares_all(&self) -> bool {
        self.algorithm.eq_ignore_ascii_case("all")
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Builds the grid: endpoints first, then explicit blocks, then random walls.
    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.grid_size)?;
        let last = self.grid_size - 1;
        grid.set_start(self.start)?;
        grid.set_target(self.target.unwrap_or(Position::new(last, last)))?;

        for &pos in &self.blocks {
            grid.place_obstacle(pos)?;
        }

        if self.num_walls > 0 {
            let mut rng = if let Some(seed) = self.seed {
                StdRng::seed_from_u64(seed)
            } else {
                StdRng::from_entropy()
            };
            grid.scatter_walls(self.num_walls, &mut rng);
        }

        Ok(grid)
    }
}
