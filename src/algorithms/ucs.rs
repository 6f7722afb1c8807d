use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithms::common::{SearchContext, SearchStrategy, Termination};
use crate::grid::Position;
use crate::metadata::{Direction, Mark};
use crate::path;

/// Priority queue entry ordered by `(cost, seq)`.
/// `Ord` is reversed so `BinaryHeap` pops the cheapest, oldest entry first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u32,
    seq: u64,
    pos: Position,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search with unit move cost.
///
/// A node's recorded cost only ever decreases, and entries left behind by an
/// improvement are dropped when popped.
#[derive(Debug, Default)]
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn run(&mut self, ctx: &mut SearchContext<'_>) -> Termination {
        let (start, target) = (ctx.start, ctx.target);
        let mut queue = BinaryHeap::new();
        let mut seq: u64 = 0;

        ctx.state.set_seen(start, Direction::Forward);
        ctx.state.set_cost(start, 0);
        queue.push(QueueEntry {
            cost: 0,
            seq,
            pos: start,
        });

        while let Some(QueueEntry { cost, pos: current, .. }) = queue.pop() {
            if ctx.cancelled() {
                return Termination::Cancelled;
            }
            if cost > ctx.state.cost(current) {
                continue;
            }
            if ctx.is_blocked(current, start) {
                continue;
            }
            if current == target {
                return Termination::Found(path::reconstruct(ctx, target, Direction::Forward));
            }

            ctx.mark(current, Mark::Visited);
            let next_cost = cost + 1;
            for neighbor in ctx.neighbors(current) {
                if ctx.state.is_seen(neighbor, Direction::Forward)
                    && ctx.state.cost(neighbor) <= next_cost
                {
                    continue;
                }
                ctx.state.set_seen(neighbor, Direction::Forward);
                ctx.state.set_cost(neighbor, next_cost);
                ctx.state.set_parent(neighbor, Direction::Forward, current);
                ctx.mark(neighbor, Mark::Frontier);
                seq += 1;
                queue.push(QueueEntry {
                    cost: next_cost,
                    seq,
                    pos: neighbor,
                });
            }

            ctx.spawn_obstacle();
            ctx.expanded(current);
        }

        Termination::Exhausted
    }
}
