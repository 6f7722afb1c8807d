use std::time::{Duration, Instant};
use tracing::warn;

use crate::grid::Grid;
use crate::metadata::{Mark, SearchState};
use crate::observer::{SearchObserver, StepEvent};

/// Terminal presentation sink.
///
/// Redraws the grid after every step when visualisation is on, and acts as
/// the cancellation source once the optional deadline passes.
pub struct TerminalObserver {
    label: String,
    visualize: bool,
    deadline: Option<Instant>,
    frames: usize,
    timed_out: bool,
}

impl TerminalObserver {
    pub fn new(label: impl Into<String>, visualize: bool, timeout: Option<Duration>) -> Self {
        TerminalObserver {
            label: label.into(),
            visualize,
            deadline: timeout.map(|timeout| Instant::now() + timeout),
            frames: 0,
            timed_out: false,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Clear the terminal screen
    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn status_line(&self, state: &SearchState, event: StepEvent) -> String {
        let (verb, pos) = match event {
            StepEvent::Expanded(pos) => ("Expanded", pos),
            StepEvent::PathMarked(pos) => ("Path", pos),
        };
        format!(
            "Algorithm: {} | Step: {} | {}: {} | Visited: {} | Frontier: {} | Path: {}",
            self.label,
            self.frames,
            verb,
            pos,
            state.count_marked(Mark::Visited) + state.count_marked(Mark::VisitedBackward),
            state.count_marked(Mark::Frontier),
            state.count_marked(Mark::Path),
        )
    }
}

impl SearchObserver for TerminalObserver {
    fn on_step(&mut self, grid: &Grid, state: &SearchState, event: StepEvent) {
        self.frames += 1;
        if !self.visualize {
            return;
        }
        self.clear_screen();
        println!("=== GRID SEARCH ===");
        println!("{}", self.status_line(state, event));
        grid.print_grid(Some(state));
    }

    fn is_cancelled(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                warn!(label = %self.label, "search deadline reached, cancelling");
                self.timed_out = true;
            }
        }
        self.timed_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn zero_timeout_cancels_on_first_poll() {
        let mut observer = TerminalObserver::new("bfs", false, Some(Duration::ZERO));
        assert!(observer.is_cancelled());
        assert!(observer.timed_out());
    }

    #[test]
    fn no_timeout_never_cancels() {
        let mut observer = TerminalObserver::new("bfs", false, None);
        assert!(!observer.is_cancelled());
    }

    #[test]
    fn counts_frames_without_drawing() {
        let grid = Grid::new(2).unwrap();
        let state = SearchState::new(2);
        let mut observer = TerminalObserver::new("dfs", false, None);
        observer.on_step(&grid, &state, StepEvent::Expanded(Position::new(0, 0)));
        observer.on_step(&grid, &state, StepEvent::PathMarked(Position::new(1, 1)));
        assert_eq!(observer.frames(), 2);
    }

    #[test]
    fn status_line_reports_counts() {
        let mut state = SearchState::new(3);
        state.set_mark(Position::new(0, 1), Mark::Visited);
        state.set_mark(Position::new(1, 1), Mark::VisitedBackward);
        state.set_mark(Position::new(2, 1), Mark::Frontier);
        let observer = TerminalObserver::new("bidirectional", false, None);
        let line = observer.status_line(&state, StepEvent::Expanded(Position::new(0, 1)));
        assert!(line.contains("Visited: 2"));
        assert!(line.contains("Frontier: 1"));
        assert!(line.contains("Expanded: (0, 1)"));
    }
}
