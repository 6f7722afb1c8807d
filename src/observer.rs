use crate::grid::{Grid, Position};
use crate::metadata::SearchState;

/// What happened in the step being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A node was taken off the frontier and its neighbours explored.
    Expanded(Position),
    /// A node was marked as part of the reconstructed path.
    PathMarked(Position),
}

/// Presentation sink and cancellation source for a running search.
///
/// The engine calls [`SearchObserver::on_step`] after it mutates search
/// state and polls [`SearchObserver::is_cancelled`] before every expansion.
/// The grid is only lent out immutably, so observers can render it but not
/// change its topology mid-run.
pub trait SearchObserver {
    fn on_step(&mut self, _grid: &Grid, _state: &SearchState, _event: StepEvent) {}

    fn is_cancelled(&mut self) -> bool {
        false
    }
}

/// Ignores every step and never cancels.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Cancels once it has been polled more than `polls` times.
#[derive(Debug)]
pub struct CancelAfter {
    polls: usize,
    seen: usize,
}

impl CancelAfter {
    pub fn new(polls: usize) -> Self {
        CancelAfter { polls, seen: 0 }
    }
}

impl SearchObserver for CancelAfter {
    fn is_cancelled(&mut self) -> bool {
        self.seen += 1;
        self.seen > self.polls
    }
}

/// Adapts a closure into a step callback that never cancels.
pub struct FnObserver<F>(pub F);

impl<F> FnObserver<F>
where
    F: FnMut(&Grid, &SearchState, StepEvent),
{
    pub fn new(callback: F) -> Self {
        FnObserver(callback)
    }
}

impl<F> SearchObserver for FnObserver<F>
where
    F: FnMut(&Grid, &SearchState, StepEvent),
{
    fn on_step(&mut self, grid: &Grid, state: &SearchState, event: StepEvent) {
        (self.0)(grid, state, event)
    }
}
