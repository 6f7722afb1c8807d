use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{Result, SearchError};
use crate::metadata::{Mark, SearchState};

/// Neighbour offsets as `(row, col)` deltas, in exploration order:
/// N, E, S, W, NE, SW, NW, SE.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Chebyshev distance, the number of 8-directional unit steps between two cells.
    pub fn chebyshev(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = SearchError;

    /// Parses `ROW,COL`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || SearchError::InvalidCoordinate(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Position { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    None,
    Start,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub passable: bool,
    pub role: Role,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            passable: true,
            role: Role::None,
        }
    }
}

/// Square grid of cells with at most one start and one target.
#[derive(Debug, Clone)]
pub struct Grid {
    pub size: usize,
    cells: Vec<Vec<Cell>>,
    start: Option<Position>,
    target: Option<Position>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid: every cell passable, no roles.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SearchError::EmptyGrid);
        }
        Ok(Grid {
            size,
            cells: vec![vec![Cell::default(); size]; size],
            start: None,
            target: None,
        })
    }

    /// Scatters up to `num_walls` blocked cells at random, never on the
    /// current start or target.
    pub fn scatter_walls<R: Rng>(&mut self, num_walls: usize, rng: &mut R) -> usize {
        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position {
                row: rng.gen_range(0..self.size),
                col: rng.gen_range(0..self.size),
            };
            if self.cell(pos).role == Role::None && self.is_passable(pos) {
                self.cells[pos.row][pos.col].passable = false;
                walls_placed += 1;
            }
            attempts += 1;
        }
        walls_placed
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                pos,
                size: self.size,
            })
        }
    }

    /// Panics when `pos` is out of bounds; callers check with [`Grid::contains`].
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].passable
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn is_endpoint(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].role != Role::None
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Moves the start role to `pos`, clearing any obstacle there.
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.target == Some(pos) {
            return Err(SearchError::SameEndpoints(pos));
        }
        if let Some(old) = self.start.take() {
            self.cells[old.row][old.col].role = Role::None;
        }
        self.cells[pos.row][pos.col] = Cell {
            passable: true,
            role: Role::Start,
        };
        self.start = Some(pos);
        Ok(())
    }

    /// Moves the target role to `pos`, clearing any obstacle there.
    pub fn set_target(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.start == Some(pos) {
            return Err(SearchError::SameEndpoints(pos));
        }
        if let Some(old) = self.target.take() {
            self.cells[old.row][old.col].role = Role::None;
        }
        self.cells[pos.row][pos.col] = Cell {
            passable: true,
            role: Role::Target,
        };
        self.target = Some(pos);
        Ok(())
    }

    pub fn place_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.is_endpoint(pos) {
            warn!(%pos, "refusing to block a search endpoint");
            return Err(SearchError::EndpointBlocked(pos));
        }
        self.cells[pos.row][pos.col].passable = false;
        Ok(())
    }

    pub fn clear_obstacle(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        self.cells[pos.row][pos.col].passable = true;
        Ok(())
    }

    /// Blocks `pos` unless it is an endpoint. Returns whether the cell changed.
    pub(crate) fn block(&mut self, pos: Position) -> bool {
        let cell = &mut self.cells[pos.row][pos.col];
        if cell.role != Role::None || !cell.passable {
            return false;
        }
        cell.passable = false;
        true
    }

    /// Pointer-style editing: the first click places the start, the second
    /// the target, every later click blocks a non-endpoint cell.
    pub fn click(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        if self.is_endpoint(pos) {
            return Ok(());
        }
        if self.start.is_none() {
            self.set_start(pos)
        } else if self.target.is_none() {
            self.set_target(pos)
        } else {
            self.place_obstacle(pos)
        }
    }

    /// Resets every cell to passable and drops both roles.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::default());
        }
        self.start = None;
        self.target = None;
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.passable)
            .count()
    }

    /// Adjacent cells in [`DIRECTIONS`] order, clipped to the grid. Blocked
    /// cells are left out unless they hold the start or target role.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(DIRECTIONS.len());
        for (dr, dc) in DIRECTIONS {
            let (Some(row), Some(col)) = (
                pos.row.checked_add_signed(dr),
                pos.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if row >= self.size || col >= self.size {
                continue;
            }
            let cell = self.cells[row][col];
            if cell.passable || cell.role != Role::None {
                neighbors.push(Position { row, col });
            }
        }
        neighbors
    }

    /// Text rendering of the grid, overlaying search marks when a state is given.
    pub fn render(&self, state: Option<&SearchState>) -> String {
        let mut out = String::from("   ");
        for col in 0..self.size {
            out.push_str(&format!("{:2}", col % 10));
        }
        out.push('\n');

        for row in 0..self.size {
            out.push_str(&format!("{:2} ", row));
            for col in 0..self.size {
                let pos = Position { row, col };
                let cell = self.cell(pos);
                let glyph = match cell.role {
                    Role::Start => 'S',
                    Role::Target => 'T',
                    Role::None if !cell.passable => '#',
                    Role::None => match state.map(|s| s.mark(pos)) {
                        Some(Mark::Path) => '*',
                        Some(Mark::Visited) => 'o',
                        Some(Mark::VisitedBackward) => 'x',
                        Some(Mark::Frontier) => '+',
                        Some(Mark::Unvisited) | None => '.',
                    },
                };
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    pub fn print_grid(&self, state: Option<&SearchState>) {
        println!("Legend: S=Start, T=Target, #=Obstacle, o=Visited, x=Visited (backward), +=Frontier, *=Path");
        println!("{}", self.render(state));
    }
}
