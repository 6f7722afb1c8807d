use tracing::debug;

use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};
use crate::algorithms::dls::{descend, Descent};
use crate::metadata::Direction;
use crate::path;

/// Runs depth-limited search with budgets 1, 2, … up to `max_depth`,
/// discarding all metadata between attempts.
#[derive(Debug)]
pub struct IterativeDeepening {
    pub max_depth: usize,
}

impl IterativeDeepening {
    pub fn new(max_depth: usize) -> Self {
        IterativeDeepening { max_depth }
    }
}

impl SearchStrategy for IterativeDeepening {
    fn name(&self) -> &'static str {
        "iddfs"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        for depth in 1..=self.max_depth {
            if ctx.cancelled() {
                return Termination::Cancelled;
            }
            ctx.reset_state();
            ctx.spawn_obstacle();
            debug!(depth, "deepening");

            match descend(ctx, depth) {
                Descent::Found => {
                    ctx.stats.depth = Some(depth);
                    let target = ctx.target;
                    return Termination::Found(path::reconstruct(ctx, target, Direction::Forward));
                }
                Descent::Cancelled => return Termination::Cancelled,
                Descent::Cutoff => {}
            }
        }

        Termination::Exhausted
    }
}
