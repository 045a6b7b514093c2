//! Machinery shared by the four searches: the path arena, working-set
//! accounting, the visited-set type, and ordered neighbour expansion.

use std::mem::size_of;

use gn_core::{Cell, Direction};
use gn_maze::Topology;

use crate::{Route, SearchError, SearchOutcome, SearchResult};

#[cfg(feature = "fx-hash")]
pub(crate) type CellSet = rustc_hash::FxHashSet<Cell>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellSet = std::collections::HashSet<Cell>;

/// `true` if `goal` cannot possibly be reached from `start`: it is a
/// different cell and has no traversable neighbours.
///
/// Every search checks this first and returns [`SearchOutcome::rejected`]
/// without expanding a node.
pub fn is_isolated_goal<T: Topology + ?Sized>(topology: &T, start: Cell, goal: Cell) -> bool {
    goal != start && !topology.has_moves(goal)
}

/// Moves out of `from`, validated and sorted into up, right, down, left
/// order.  Duplicates are dropped.
pub(crate) fn ordered_moves<T: Topology + ?Sized>(
    topology: &T,
    from: Cell,
) -> SearchResult<Vec<Cell>> {
    let mut keyed = Vec::with_capacity(4);
    for to in topology.valid_moves(from) {
        let dir = Direction::between(from, to).ok_or(SearchError::NonAdjacentMove { from, to })?;
        keyed.push((dir.rank(), to));
    }
    keyed.sort_unstable();
    keyed.dedup();
    Ok(keyed.into_iter().map(|(_, c)| c).collect())
}

// ── Trail ─────────────────────────────────────────────────────────────────────

const NO_PARENT: u32 = u32::MAX;

#[derive(Clone, Copy)]
struct TrailNode {
    cell:   Cell,
    parent: u32,
}

/// Append-only arena of `(cell, parent)` nodes.
///
/// A frontier entry is an index into the trail; the path it stands for is the
/// parent chain back to the root.  Nodes are never mutated after the push, so
/// two frontier entries can share a prefix without aliasing.
pub(crate) struct Trail {
    nodes: Vec<TrailNode>,
}

impl Trail {
    pub(crate) fn rooted_at(start: Cell) -> (Self, usize) {
        let trail = Self { nodes: vec![TrailNode { cell: start, parent: NO_PARENT }] };
        (trail, 0)
    }

    pub(crate) fn push(&mut self, cell: Cell, parent: usize) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(TrailNode { cell, parent: parent as u32 });
        idx
    }

    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        self.nodes[idx].cell
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Materialise the route ending at `idx`, excluding the root.
    pub(crate) fn route_to(&self, idx: usize) -> Route {
        let mut cells = Vec::new();
        let mut cur = idx;
        while self.nodes[cur].parent != NO_PARENT {
            cells.push(self.nodes[cur].cell);
            cur = self.nodes[cur].parent as usize;
        }
        cells.reverse();
        Route::from(cells)
    }
}

// ── WorkingSet ────────────────────────────────────────────────────────────────

/// Tracks the peak frontier length and peak estimated bytes of one search.
#[derive(Default)]
pub(crate) struct WorkingSet {
    peak_frontier: usize,
    peak_bytes:    usize,
}

impl WorkingSet {
    /// Record the sizes after an expansion.  `E` is the frontier entry type.
    #[inline]
    pub(crate) fn observe<E>(&mut self, frontier: usize, visited: usize, trail: &Trail) {
        let bytes = frontier * size_of::<E>()
            + visited * size_of::<Cell>()
            + trail.len() * size_of::<TrailNode>();
        self.peak_frontier = self.peak_frontier.max(frontier);
        self.peak_bytes = self.peak_bytes.max(bytes);
    }

    pub(crate) fn finish(self, route: Route, found: bool, nodes_expanded: u64) -> SearchOutcome {
        SearchOutcome {
            route,
            found,
            nodes_expanded,
            peak_frontier: self.peak_frontier,
            peak_memory_bytes: self.peak_bytes,
        }
    }
}
