//! Route and search-outcome types.

use std::collections::VecDeque;

use gn_core::Cell;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The remaining cells to walk, in order, *excluding* the walker's current
/// cell.
///
/// An empty route means either "no route" or "already at the goal".  Once
/// produced by a search it only shrinks, one head cell at a time, as
/// movement commits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    cells: VecDeque<Cell>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The next cell to enter.
    #[inline]
    pub fn head(&self) -> Option<Cell> {
        self.cells.front().copied()
    }

    /// The final cell of the route.
    #[inline]
    pub fn destination(&self) -> Option<Cell> {
        self.cells.back().copied()
    }

    /// Remove and return the head cell.
    #[inline]
    pub fn pop_head(&mut self) -> Option<Cell> {
        self.cells.pop_front()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// `true` if `from` followed by every route cell forms a chain of
    /// orthogonal single steps.
    pub fn is_walkable_from(&self, from: Cell) -> bool {
        let mut prev = from;
        for cell in self.iter() {
            if !prev.is_adjacent(cell) {
                return false;
            }
            prev = cell;
        }
        true
    }
}

impl FromIterator<Cell> for Route {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl From<Vec<Cell>> for Route {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells: cells.into() }
    }
}

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// Everything one search invocation produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Route to the goal, excluding the start.  Empty when not found or when
    /// start equals goal.
    pub route: Route,

    /// `true` if the goal was reached (including the `start == goal` case).
    pub found: bool,

    /// Frontier pops that were actually expanded.  Stale duplicate pops and
    /// depth-pruned pops are not counted; the goal pop is.
    pub nodes_expanded: u64,

    /// Largest frontier size seen during the search.
    pub peak_frontier: usize,

    /// Estimated peak working set of the search in bytes: frontier entries,
    /// visited cells and path-arena nodes held at the same time.
    pub peak_memory_bytes: usize,
}

impl SearchOutcome {
    /// The outcome of a search that was rejected before expanding anything.
    pub fn rejected() -> Self {
        Self::default()
    }
}
