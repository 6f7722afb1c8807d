use std::thread;
use std::time::Duration;

use crate::engine::SearchOptions;
use crate::grid::{Grid, Position};
use crate::injector::ObstacleInjector;
use crate::metadata::{Mark, SearchState};
use crate::observer::{SearchObserver, StepEvent};

/// How a strategy stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The target was reached; carries the reconstructed path, start first.
    Found(Vec<Position>),
    /// The frontier emptied or the depth budget ran out.
    Exhausted,
    /// The observer asked to stop.
    Cancelled,
}

/// Counters collected while a strategy runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expansions: usize,
    pub obstacles_spawned: usize,
    /// Depth at which iterative deepening succeeded.
    pub depth: Option<usize>,
}

/// Everything a strategy touches during one run.
pub struct SearchContext<'a> {
    pub grid: &'a mut Grid,
    pub state: SearchState,
    pub start: Position,
    pub target: Position,
    pub options: SearchOptions,
    pub stats: SearchStats,
    injector: ObstacleInjector,
    observer: &'a mut dyn SearchObserver,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        start: Position,
        target: Position,
        observer: &'a mut dyn SearchObserver,
        options: SearchOptions,
    ) -> Self {
        let state = SearchState::new(grid.size);
        let injector = ObstacleInjector::new(options.obstacle_probability, options.seed);
        SearchContext {
            grid,
            state,
            start,
            target,
            options,
            stats: SearchStats::default(),
            injector,
            observer,
        }
    }

    pub fn cancelled(&mut self) -> bool {
        self.observer.is_cancelled()
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        self.grid.neighbors(pos)
    }

    pub fn is_endpoint(&self, pos: Position) -> bool {
        pos == self.start || pos == self.target
    }

    /// Dequeue-time check: `pos` was blocked after it was queued. The
    /// direction's own origin is always traversable.
    pub fn is_blocked(&self, pos: Position, origin: Position) -> bool {
        pos != origin && !self.grid.is_passable(pos)
    }

    /// Sets a display mark, leaving the endpoints untouched.
    pub fn mark(&mut self, pos: Position, mark: Mark) {
        if !self.is_endpoint(pos) {
            self.state.set_mark(pos, mark);
        }
    }

    /// Throws away all per-node metadata.
    pub fn reset_state(&mut self) {
        self.state = SearchState::new(self.grid.size);
    }

    pub fn spawn_obstacle(&mut self) {
        if self.injector.step(self.grid).is_some() {
            self.stats.obstacles_spawned += 1;
        }
    }

    pub fn expanded(&mut self, pos: Position) {
        self.stats.expansions += 1;
        let delay = self.options.step_delay;
        self.report(StepEvent::Expanded(pos), delay);
    }

    pub fn path_marked(&mut self, pos: Position) {
        let delay = self.options.path_delay;
        self.report(StepEvent::PathMarked(pos), delay);
    }

    fn report(&mut self, event: StepEvent, delay: Duration) {
        self.observer.on_step(self.grid, &self.state, event);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// One search algorithm over the shared grid and metadata.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination;
}
