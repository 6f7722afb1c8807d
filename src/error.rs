use thiserror::Error;

use crate::grid::Position;

/// Convenient result alias for the search engine.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Precondition violations rejected before a search starts.
///
/// Exhaustion and cancellation are normal outcomes and are reported through
/// [`crate::SearchOutcome`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// No cell holds the start role.
    #[error("start cell is not set")]
    MissingStart,

    /// No cell holds the target role.
    #[error("target cell is not set")]
    MissingTarget,

    /// Start and target refer to the same cell.
    #[error("start and target are the same cell {0}")]
    SameEndpoints(Position),

    /// A coordinate falls outside the grid.
    #[error("cell {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Position, size: usize },

    /// An edit tried to block the start or target cell.
    #[error("cell {0} is a search endpoint and cannot be blocked")]
    EndpointBlocked(Position),

    /// The grid must hold at least one cell.
    #[error("grid size must be at least 1")]
    EmptyGrid,

    /// Injector probability must lie in `[0, 1]`.
    #[error("obstacle probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// The algorithm name did not match any strategy.
    #[error("unknown algorithm '{0}'; expected one of bfs, dfs, dls, iddfs, ucs, bidirectional")]
    UnknownAlgorithm(String),

    /// A coordinate string could not be parsed.
    #[error("invalid cell coordinate '{0}'; expected ROW,COL")]
    InvalidCoordinate(String),
}
