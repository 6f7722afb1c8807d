use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};
use crate::grid::Position;
use crate::metadata::{Direction, Mark};
use crate::path;

/// Result of one depth-limited descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    Found,
    Cutoff,
    Cancelled,
}

/// Recursive depth-first descent from the start with `limit` moves of budget.
///
/// The seen set is shared across branches, so a node reached first through a
/// long branch is not revisited through a shorter one. Cancellation is polled
/// on every recursive entry. No dynamic obstacles are injected here.
pub(crate) fn descend(ctx: &mut SearchContext<'_>, limit: usize) -> Descent {
    let start = ctx.start;
    visit(ctx, start, limit)
}

fn visit(ctx: &mut SearchContext<'_>, node: Position, depth: usize) -> Descent {
    if ctx.cancelled() {
        return Descent::Cancelled;
    }
    if ctx.is_blocked(node, ctx.start) {
        return Descent::Cutoff;
    }
    if node == ctx.target {
        return Descent::Found;
    }
    if depth == 0 {
        return Descent::Cutoff;
    }

    ctx.state.set_seen(node, Direction::Forward);
    ctx.mark(node, Mark::Visited);
    ctx.expanded(node);

    for neighbor in ctx.neighbors(node) {
        if ctx.state.is_seen(neighbor, Direction::Forward) {
            continue;
        }
        ctx.state.set_parent(neighbor, Direction::Forward, node);
        match visit(ctx, neighbor, depth - 1) {
            Descent::Cutoff => {}
            outcome => return outcome,
        }
    }

    Descent::Cutoff
}

/// Depth-first search that gives up beyond a fixed number of moves.
#[derive(Debug)]
pub struct DepthLimited {
    pub limit: usize,
}

impl DepthLimited {
    pub fn new(limit: usize) -> Self {
        DepthLimited { limit }
    }
}

impl SearchStrategy for DepthLimited {
    fn name(&self) -> &'static str {
        "dls"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        match descend(ctx, self.limit) {
            Descent::Found => {
                let target = ctx.target;
                Termination::Found(path::reconstruct(ctx, target, Direction::Forward))
            }
            Descent::Cutoff => Termination::Exhausted,
            Descent::Cancelled => Termination::Cancelled,
        }
    }
}
