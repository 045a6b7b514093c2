//! Held-route reuse policy.

use gn_core::Cell;
use gn_search::Route;

/// `true` if the held `route` may be reused for `goal` instead of searching.
///
/// All three must hold:
///
/// 1. the route is non-empty;
/// 2. `goal` equals the last goal a route was computed for;
/// 3. `current`, or one of its four orthogonal neighbours, lies on the route.
///
/// The target usually moves at most one cell between plans, so a hit here
/// may keep a route that is no longer the shortest.  Callers accept that.
pub fn can_reuse(route: &Route, last_goal: Option<Cell>, goal: Cell, current: Cell) -> bool {
    if route.is_empty() || last_goal != Some(goal) {
        return false;
    }
    route.contains(current) || current.neighbors_4().into_iter().any(|n| route.contains(n))
}
