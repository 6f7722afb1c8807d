use std::time::Duration;

use tracing::info;

use crate::algorithms::common::{SearchContext, SearchStats, SearchStrategy, Termination};
use crate::algorithms::Algorithm;
use crate::error::{Result, SearchError};
use crate::grid::{Grid, Position};
use crate::observer::SearchObserver;

/// Tunables for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Move budget for depth-limited search.
    pub depth_limit: usize,
    /// Largest budget iterative deepening tries.
    pub max_depth: usize,
    /// Chance per step that the injector blocks a random cell.
    pub obstacle_probability: f64,
    /// Pause after each expansion.
    pub step_delay: Duration,
    /// Pause after each path cell during replay.
    pub path_delay: Duration,
    /// Injector seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth_limit: 10,
            max_depth: 15,
            obstacle_probability: 0.02,
            step_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(20),
            seed: None,
        }
    }
}

impl SearchOptions {
    /// Drops all pacing delays.
    pub fn instant(mut self) -> Self {
        self.step_delay = Duration::ZERO;
        self.path_delay = Duration::ZERO;
        self
    }

    /// Turns the dynamic obstacle injector off.
    pub fn without_obstacles(mut self) -> Self {
        self.obstacle_probability = 0.0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(SearchError::InvalidProbability(self.obstacle_probability));
        }
        Ok(())
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    Exhausted,
    Cancelled,
}

impl SearchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOutcome::Found => "found",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub strategy: &'static str,
    pub outcome: SearchOutcome,
    /// Start to target inclusive; empty unless found.
    pub path: Vec<Position>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs `algorithm` from the grid's start to its target.
pub fn run_search(
    algorithm: Algorithm,
    grid: &mut Grid,
    observer: &mut dyn SearchObserver,
    options: &SearchOptions,
) -> Result<SearchResult> {
    let mut strategy = algorithm.strategy(options);
    run_strategy(strategy.as_mut(), grid, observer, options)
}

/// Runs any [`SearchStrategy`] after checking the run's preconditions.
pub fn run_strategy(
    strategy: &mut dyn SearchStrategy,
    grid: &mut Grid,
    observer: &mut dyn SearchObserver,
    options: &SearchOptions,
) -> Result<SearchResult> {
    options.validate()?;
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let target = grid.target().ok_or(SearchError::MissingTarget)?;
    if start == target {
        return Err(SearchError::SameEndpoints(start));
    }

    info!(strategy = strategy.name(), %start, %target, "starting search");

    let mut ctx = SearchContext::new(grid, start, target, observer, *options);
    let termination = strategy.run(&mut ctx);
    let stats = ctx.stats;

    let (outcome, path) = match termination {
        Termination::Found(path) => (SearchOutcome::Found, path),
        Termination::Exhausted => (SearchOutcome::Exhausted, Vec::new()),
        Termination::Cancelled => (SearchOutcome::Cancelled, Vec::new()),
    };

    info!(
        strategy = strategy.name(),
        outcome = outcome.as_str(),
        steps = path.len().saturating_sub(1),
        expansions = stats.expansions,
        obstacles_spawned = stats.obstacles_spawned,
        "search finished"
    );

    Ok(SearchResult {
        strategy: strategy.name(),
        outcome,
        path,
        stats,
    })
}
