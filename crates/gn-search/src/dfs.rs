//! Depth-first search with a path-length cap.
//!
//! Last-in-first-out expansion with the visited check at push time.  Paths
//! that already hold `depth_cap` cells (start included) are popped but not
//! extended, which bounds the blow-up on large mazes.  The result is *a*
//! route within the cap, not necessarily the shortest one, and may be none
//! even when the goal is reachable.

use gn_core::Cell;
use gn_maze::Topology;

use crate::frontier::{is_isolated_goal, ordered_moves, CellSet, Trail, WorkingSet};
use crate::{Route, SearchOutcome, SearchResult};

/// A stack entry: arena index plus path length in cells (start included).
type Entry = (usize, usize);

/// Any route from `start` to `goal` of at most `depth_cap - 1` steps.
///
/// Neighbours are pushed in up, right, down, left order, so the last of them
/// (left-most) is explored first.
pub fn dfs<T: Topology + ?Sized>(
    topology: &T,
    start: Cell,
    goal: Cell,
    depth_cap: usize,
) -> SearchResult<SearchOutcome> {
    if is_isolated_goal(topology, start, goal) {
        return Ok(SearchOutcome::rejected());
    }

    let (mut trail, root) = Trail::rooted_at(start);
    let mut visited = CellSet::default();
    visited.insert(start);
    let mut stack: Vec<Entry> = vec![(root, 1)];
    let mut ws = WorkingSet::default();
    let mut expanded = 0u64;

    while let Some((idx, path_len)) = stack.pop() {
        let cell = trail.cell(idx);
        if cell == goal {
            expanded += 1;
            return Ok(ws.finish(trail.route_to(idx), true, expanded));
        }
        if path_len >= depth_cap {
            continue;
        }

        expanded += 1;
        for next in ordered_moves(topology, cell)? {
            if visited.insert(next) {
                let child = trail.push(next, idx);
                stack.push((child, path_len + 1));
            }
        }
        ws.observe::<Entry>(stack.len(), visited.len(), &trail);
    }

    Ok(ws.finish(Route::new(), false, expanded))
}
