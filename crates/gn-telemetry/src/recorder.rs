//! One measured strategy invocation.

use gn_core::Cell;
use gn_maze::Topology;
use gn_search::{is_isolated_goal, Strategy};

use crate::{MeasureScope, PlanningResult};

/// Run `strategy` from `start` to `goal` inside a [`MeasureScope`].
///
/// * A goal with no traversable neighbours (other than the start itself)
///   is rejected without searching and without measuring.
/// * A search fault is logged at `warn` and yields an empty route; the
///   scope is still closed.
pub fn instrumented_search<T: Topology + ?Sized>(
    strategy:  Strategy,
    topology:  &T,
    start:     Cell,
    goal:      Cell,
    depth_cap: usize,
) -> PlanningResult {
    if is_isolated_goal(topology, start, goal) {
        tracing::debug!(%strategy, %start, %goal, "goal has no traversable neighbours");
        return PlanningResult::invalid_goal();
    }

    let scope = MeasureScope::open(strategy.name());
    match strategy.search(topology, start, goal, depth_cap) {
        Ok(outcome) => {
            let measurement = scope.close(outcome.peak_memory_bytes);
            tracing::trace!(
                %strategy,
                %start,
                %goal,
                found = outcome.found,
                route_len = outcome.route.len(),
                nodes_expanded = outcome.nodes_expanded,
                "search complete"
            );
            PlanningResult::computed(outcome, measurement)
        }
        Err(err) => {
            let measurement = scope.close(0);
            tracing::warn!(%strategy, %start, %goal, error = %err, "search fault; no route");
            PlanningResult::faulted(measurement)
        }
    }
}
