use std::collections::VecDeque;

use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};
use crate::grid::Position;
use crate::metadata::{Direction, Mark};
use crate::path;

/// Queue discipline for the uninformed searches.
pub(crate) trait Frontier {
    fn push(&mut self, pos: Position);
    fn pop(&mut self) -> Option<Position>;
}

impl Frontier for VecDeque<Position> {
    fn push(&mut self, pos: Position) {
        self.push_back(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.pop_front()
    }
}

impl Frontier for Vec<Position> {
    fn push(&mut self, pos: Position) {
        Vec::push(self, pos);
    }

    fn pop(&mut self) -> Option<Position> {
        Vec::pop(self)
    }
}

/// Shared loop for BFS and DFS. Nodes are marked seen and given a parent
/// when queued; the target test happens when a node leaves the frontier.
pub(crate) fn explore<F: Frontier>(ctx: &mut SearchContext<'_>, mut frontier: F) -> Termination {
    let (start, target) = (ctx.start, ctx.target);
    ctx.state.set_seen(start, Direction::Forward);
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        if ctx.cancelled() {
            return Termination::Cancelled;
        }
        if ctx.is_blocked(current, start) {
            continue;
        }
        if current == target {
            return Termination::Found(path::reconstruct(ctx, target, Direction::Forward));
        }

        ctx.mark(current, Mark::Visited);
        for neighbor in ctx.neighbors(current) {
            if ctx.state.is_seen(neighbor, Direction::Forward) {
                continue;
            }
            ctx.state.set_parent(neighbor, Direction::Forward, current);
            ctx.state.set_seen(neighbor, Direction::Forward);
            ctx.mark(neighbor, Mark::Frontier);
            frontier.push(neighbor);
        }

        ctx.spawn_obstacle();
        ctx.expanded(current);
    }

    Termination::Exhausted
}

/// Breadth-first search; finds a path with the fewest moves.
#[derive(Debug, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        explore(ctx, VecDeque::new())
    }
}
