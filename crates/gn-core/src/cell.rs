//! Maze tile coordinates and the four movement directions.
//!
//! `col` grows to the right and `row` grows downward (screen coordinates), so
//! "up" is `row - 1`.  Every ordered exploration in the engine walks the
//! directions in [`Direction::ALL`] order: up, right, down, left.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves available on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in fixed exploration order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// `(dcol, drow)` offset of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// The direction of the single step `from → to`, or `None` if the two
    /// cells are not orthogonal neighbours.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| from.step(d) == to)
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A maze tile, identified by `(col, row)`.
///
/// Ordering is lexicographic on `(col, row)`; priority queues use it as a
/// deterministic tie-break between equal-cost frontier entries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step in `dir`.  No bounds checking; the
    /// topology decides whether the result exists.
    #[inline]
    pub const fn step(self, dir: Direction) -> Cell {
        let (dc, dr) = dir.delta();
        Cell::new(self.col + dc, self.row + dr)
    }

    /// The four orthogonal neighbours in up, right, down, left order.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance.  Admissible A* heuristic on this grid.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Cell::new(col, row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
