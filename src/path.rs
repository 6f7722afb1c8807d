use crate::algorithms::common::SearchContext;
use crate::grid::Position;
use crate::metadata::{Direction, Mark};

/// Walks `direction` parent links from `end` back to the root of its tree,
/// marking and replaying each ancestor. Returns the chain root first.
pub fn reconstruct(ctx: &mut SearchContext<'_>, end: Position, direction: Direction) -> Vec<Position> {
    let mut chain = vec![end];
    let mut current = end;
    while let Some(parent) = ctx.state.parent(current, direction) {
        current = parent;
        ctx.mark(current, Mark::Path);
        ctx.path_marked(current);
        chain.push(current);
    }
    chain.reverse();
    chain
}

/// Builds the start-to-target path through the node where the two
/// bidirectional trees met. The forward chain is replayed first, then the
/// backward one.
pub fn join_meeting(ctx: &mut SearchContext<'_>, meeting: Position) -> Vec<Position> {
    if !ctx.is_endpoint(meeting) {
        ctx.mark(meeting, Mark::Path);
        ctx.path_marked(meeting);
    }
    let mut path = reconstruct(ctx, meeting, Direction::Forward);
    let backward = reconstruct(ctx, meeting, Direction::Backward);
    path.extend(backward.into_iter().rev().skip(1));
    path
}
