use std::collections::VecDeque;

use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};
use crate::grid::Position;
use crate::metadata::{Direction, Mark};
use crate::path;

/// Two breadth-first searches, one from the start and one from the target,
/// alternating one expansion each per iteration until their trees touch.
///
/// The meeting node is the first cell seen by both directions, so the joined
/// path never repeats a cell. It is not guaranteed to be the shortest.
#[derive(Debug, Default)]
pub struct Bidirectional;

impl SearchStrategy for Bidirectional {
    fn name(&self) -> &'static str {
        "bidirectional"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        let mut forward = VecDeque::from([ctx.start]);
        let mut backward = VecDeque::from([ctx.target]);
        ctx.state.set_seen(ctx.start, Direction::Forward);
        ctx.state.set_seen(ctx.target, Direction::Backward);

        while !forward.is_empty() && !backward.is_empty() {
            if ctx.cancelled() {
                return Termination::Cancelled;
            }

            let meeting = half_step(ctx, &mut forward, Direction::Forward)
                .or_else(|| half_step(ctx, &mut backward, Direction::Backward));
            if let Some(meeting) = meeting {
                return Termination::Found(path::join_meeting(ctx, meeting));
            }

            ctx.spawn_obstacle();
        }

        Termination::Exhausted
    }
}

/// Expands one node of `direction`'s queue. Returns the meeting node if the
/// two trees touched.
fn half_step(
    ctx: &mut SearchContext<'_>,
    queue: &mut VecDeque<Position>,
    direction: Direction,
) -> Option<Position> {
    let (origin, mark) = match direction {
        Direction::Forward => (ctx.start, Mark::Visited),
        Direction::Backward => (ctx.target, Mark::VisitedBackward),
    };
    let other = direction.opposite();

    let current = queue.pop_front()?;
    // Discovery below already stops at the first shared cell, so this only
    // keeps the meeting test ahead of the blocked test.
    if ctx.state.is_seen(current, other) {
        return Some(current);
    }
    if ctx.is_blocked(current, origin) {
        return None;
    }

    ctx.mark(current, mark);
    let mut meeting = None;
    for neighbor in ctx.neighbors(current) {
        if ctx.state.is_seen(neighbor, direction) {
            continue;
        }
        ctx.state.set_parent(neighbor, direction, current);
        ctx.state.set_seen(neighbor, direction);
        if ctx.state.is_seen(neighbor, other) {
            meeting = Some(neighbor);
            break;
        }
        ctx.mark(neighbor, Mark::Frontier);
        queue.push_back(neighbor);
    }

    ctx.expanded(current);
    meeting
}
