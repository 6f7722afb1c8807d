//! Grid search engine with dynamic obstacles.
//!
//! Six strategies (BFS, DFS, depth-limited, iterative deepening, uniform
//! cost and bidirectional) explore a square 8-connected grid from a start
//! cell to a target cell. While they run, an injector may block random cells,
//! a [`SearchObserver`] is told about every expansion and polled for
//! cancellation, and the path found is replayed step by step.

pub mod algorithms;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod injector;
pub mod metadata;
pub mod observer;
pub mod path;
pub mod render;
pub mod statistics;

pub use algorithms::common::{SearchContext, SearchStats, SearchStrategy, Termination};
pub use algorithms::Algorithm;
pub use engine::{run_search, run_strategy, SearchOptions, SearchOutcome, SearchResult};
pub use error::{Result, SearchError};
pub use grid::{Cell, Grid, Position, Role};
pub use metadata::{Direction, Mark, SearchState};
pub use observer::{CancelAfter, FnObserver, NoopObserver, SearchObserver, StepEvent};
