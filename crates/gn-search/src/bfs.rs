//! Breadth-first search.
//!
//! First-in-first-out expansion with the visited check at push time.  Every
//! edge costs one step, so the first time the goal is popped its route has
//! the minimum number of steps.

use std::collections::VecDeque;

use gn_core::Cell;
use gn_maze::Topology;

use crate::frontier::{is_isolated_goal, ordered_moves, CellSet, Trail, WorkingSet};
use crate::{Route, SearchOutcome, SearchResult};

/// Shortest route (in steps) from `start` to `goal`.
///
/// Returns an empty, `found == false` outcome after exhausting every cell
/// reachable from `start` if `goal` is unreachable.
pub fn bfs<T: Topology + ?Sized>(topology: &T, start: Cell, goal: Cell) -> SearchResult<SearchOutcome> {
    if is_isolated_goal(topology, start, goal) {
        return Ok(SearchOutcome::rejected());
    }

    let (mut trail, root) = Trail::rooted_at(start);
    let mut visited = CellSet::default();
    visited.insert(start);
    let mut queue: VecDeque<usize> = VecDeque::from([root]);
    let mut ws = WorkingSet::default();
    let mut expanded = 0u64;

    while let Some(idx) = queue.pop_front() {
        expanded += 1;
        let cell = trail.cell(idx);
        if cell == goal {
            return Ok(ws.finish(trail.route_to(idx), true, expanded));
        }

        for next in ordered_moves(topology, cell)? {
            if visited.insert(next) {
                let child = trail.push(next, idx);
                queue.push_back(child);
            }
        }
        ws.observe::<usize>(queue.len(), visited.len(), &trail);
    }

    Ok(ws.finish(Route::new(), false, expanded))
}
