use crate::grid::Position;

/// Which search tree a node belongs to. Only bidirectional search uses
/// [`Direction::Backward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Display state of a node during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unvisited,
    Frontier,
    Visited,
    VisitedBackward,
    Path,
}

/// Transient per-cell search fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeMeta {
    pub seen: bool,
    pub seen_backward: bool,
    pub parent: Option<Position>,
    pub parent_backward: Option<Position>,
    pub cost: u32,
    pub mark: Mark,
}

/// Per-run metadata, one [`NodeMeta`] per grid cell in row-major order.
///
/// A new state is built for every run so no strategy observes leftovers from
/// a previous one.
#[derive(Debug, Clone)]
pub struct SearchState {
    size: usize,
    nodes: Vec<NodeMeta>,
}

impl SearchState {
    pub fn new(size: usize) -> Self {
        SearchState {
            size,
            nodes: vec![NodeMeta::default(); size * size],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn node(&self, pos: Position) -> &NodeMeta {
        &self.nodes[self.index(pos)]
    }

    fn node_mut(&mut self, pos: Position) -> &mut NodeMeta {
        let index = self.index(pos);
        &mut self.nodes[index]
    }

    pub fn is_seen(&self, pos: Position, direction: Direction) -> bool {
        let node = self.node(pos);
        match direction {
            Direction::Forward => node.seen,
            Direction::Backward => node.seen_backward,
        }
    }

    pub fn set_seen(&mut self, pos: Position, direction: Direction) {
        let node = self.node_mut(pos);
        match direction {
            Direction::Forward => node.seen = true,
            Direction::Backward => node.seen_backward = true,
        }
    }

    pub fn parent(&self, pos: Position, direction: Direction) -> Option<Position> {
        let node = self.node(pos);
        match direction {
            Direction::Forward => node.parent,
            Direction::Backward => node.parent_backward,
        }
    }

    pub fn set_parent(&mut self, pos: Position, direction: Direction, parent: Position) {
        let node = self.node_mut(pos);
        match direction {
            Direction::Forward => node.parent = Some(parent),
            Direction::Backward => node.parent_backward = Some(parent),
        }
    }

    pub fn cost(&self, pos: Position) -> u32 {
        self.node(pos).cost
    }

    pub fn set_cost(&mut self, pos: Position, cost: u32) {
        self.node_mut(pos).cost = cost;
    }

    pub fn mark(&self, pos: Position) -> Mark {
        self.node(pos).mark
    }

    /// Callers keep endpoints unmarked.
    pub(crate) fn set_mark(&mut self, pos: Position, mark: Mark) {
        self.node_mut(pos).mark = mark;
    }

    pub fn count_marked(&self, mark: Mark) -> usize {
        self.nodes.iter().filter(|node| node.mark == mark).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_blank() {
        let state = SearchState::new(3);
        let pos = Position::new(2, 1);
        assert!(!state.is_seen(pos, Direction::Forward));
        assert!(!state.is_seen(pos, Direction::Backward));
        assert_eq!(state.parent(pos, Direction::Forward), None);
        assert_eq!(state.cost(pos), 0);
        assert_eq!(state.mark(pos), Mark::Unvisited);
    }

    #[test]
    fn directions_keep_separate_forests() {
        let mut state = SearchState::new(3);
        let pos = Position::new(1, 1);
        state.set_seen(pos, Direction::Backward);
        state.set_parent(pos, Direction::Backward, Position::new(2, 2));

        assert!(state.is_seen(pos, Direction::Backward));
        assert!(!state.is_seen(pos, Direction::Forward));
        assert_eq!(state.parent(pos, Direction::Forward), None);
        assert_eq!(
            state.parent(pos, Direction::Backward),
            Some(Position::new(2, 2))
        );
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
    }

    #[test]
    fn counts_marks() {
        let mut state = SearchState::new(2);
        state.set_mark(Position::new(0, 1), Mark::Visited);
        state.set_mark(Position::new(1, 0), Mark::Visited);
        state.set_mark(Position::new(1, 1), Mark::Path);
        assert_eq!(state.count_marked(Mark::Visited), 2);
        assert_eq!(state.count_marked(Mark::Path), 1);
    }
}
