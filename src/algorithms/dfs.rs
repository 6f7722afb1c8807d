use crate::algorithms::bfs::explore;
use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};

/// Depth-first search with an explicit stack.
///
/// Neighbours are pushed in the fixed direction order, so they are popped in
/// reverse. The path found is not necessarily the shortest.
#[derive(Debug, Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        explore(ctx, Vec::new())
    }
}
