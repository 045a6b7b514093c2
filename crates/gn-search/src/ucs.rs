//! Uniform-cost search.
//!
//! A min-heap keyed on accumulated cost.  The visited check happens when an
//! entry is *popped*, not when it is pushed, so the heap may carry duplicate
//! entries for a cell; the stale ones are discarded on pop.  With unit edge
//! costs the returned route has the same length as the breadth-first one,
//! though exploration order and node counts differ.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gn_core::Cell;
use gn_maze::Topology;

use crate::frontier::{is_isolated_goal, ordered_moves, CellSet, Trail, WorkingSet};
use crate::{Route, SearchOutcome, SearchResult};

/// Heap key: (cost, cell, arena index).  The cell breaks cost ties
/// deterministically; the arena index keeps duplicates distinct.  Two entries
/// for the same cell at the same cost pop in push order (lower index first),
/// not by comparing their paths, so among equal-cost routes the one chosen
/// may differ from a path-ordered heap.  Route length is unaffected.
type Entry = Reverse<(u32, Cell, usize)>;

/// Minimum-cost route from `start` to `goal` with unit edge costs.
pub fn ucs<T: Topology + ?Sized>(topology: &T, start: Cell, goal: Cell) -> SearchResult<SearchOutcome> {
    if is_isolated_goal(topology, start, goal) {
        return Ok(SearchOutcome::rejected());
    }

    let (mut trail, root) = Trail::rooted_at(start);
    let mut visited = CellSet::default();
    let mut heap: BinaryHeap<Entry> = BinaryHeap::new();
    heap.push(Reverse((0, start, root)));
    let mut ws = WorkingSet::default();
    let mut expanded = 0u64;

    while let Some(Reverse((cost, cell, idx))) = heap.pop() {
        if cell == goal {
            expanded += 1;
            return Ok(ws.finish(trail.route_to(idx), true, expanded));
        }
        // Skip stale heap entries.
        if !visited.insert(cell) {
            continue;
        }

        expanded += 1;
        for next in ordered_moves(topology, cell)? {
            let child = trail.push(next, idx);
            heap.push(Reverse((cost + 1, next, child)));
        }
        ws.observe::<Entry>(heap.len(), visited.len(), &trail);
    }

    Ok(ws.finish(Route::new(), false, expanded))
}
