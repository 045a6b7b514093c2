//! A* search with the Manhattan heuristic.
//!
//! Heap key is `f = g + h` with `g` the steps taken and `h` the Manhattan
//! distance to the goal.  On a 4-connected grid with unit costs `h` never
//! overestimates and never drops by more than one per step, so the first
//! goal pop is optimal.  Duplicate entries are handled exactly as in
//! [`ucs`][crate::ucs]: pushed freely, discarded on pop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gn_core::Cell;
use gn_maze::Topology;

use crate::frontier::{is_isolated_goal, ordered_moves, CellSet, Trail, WorkingSet};
use crate::{Route, SearchOutcome, SearchResult};

/// Heap key: (f, g, cell, arena index).  As in [`ucs`][crate::ucs], same-key
/// duplicates of a cell pop in push order rather than by path comparison;
/// only which of several equal-length routes is returned can differ.
type Entry = Reverse<(u32, u32, Cell, usize)>;

/// Minimum-step route from `start` to `goal`, guided by Manhattan distance.
pub fn astar<T: Topology + ?Sized>(topology: &T, start: Cell, goal: Cell) -> SearchResult<SearchOutcome> {
    if is_isolated_goal(topology, start, goal) {
        return Ok(SearchOutcome::rejected());
    }

    let (mut trail, root) = Trail::rooted_at(start);
    let mut visited = CellSet::default();
    let mut heap: BinaryHeap<Entry> = BinaryHeap::new();
    heap.push(Reverse((start.manhattan(goal), 0, start, root)));
    let mut ws = WorkingSet::default();
    let mut expanded = 0u64;

    while let Some(Reverse((_, g, cell, idx))) = heap.pop() {
        if cell == goal {
            expanded += 1;
            return Ok(ws.finish(trail.route_to(idx), true, expanded));
        }
        if !visited.insert(cell) {
            continue;
        }

        expanded += 1;
        for next in ordered_moves(topology, cell)? {
            let child = trail.push(next, idx);
            let new_g = g + 1;
            heap.push(Reverse((new_g + next.manhattan(goal), new_g, next, child)));
        }
        ws.observe::<Entry>(heap.len(), visited.len(), &trail);
    }

    Ok(ws.finish(Route::new(), false, expanded))
}
