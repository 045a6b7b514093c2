//! Plain data row types written by output backends.

use gn_agent::Ghost;
use gn_core::Tick;
use gn_telemetry::PlanningResult;

/// One planning invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRow {
    pub tick:              u64,
    pub ghost_id:          u32,
    pub strategy:          &'static str,
    pub goal_col:          i32,
    pub goal_row:          i32,
    pub route_len:         u32,
    pub elapsed_us:        u64,
    pub peak_memory_bytes: u64,
    pub nodes_expanded:    u64,
    pub reused:            bool,
    pub status:            &'static str,
}

impl PlanRow {
    /// Row for `ghost`'s plan at `tick`.  The goal is taken from the ghost's
    /// latest telemetry record, falling back to its current cell.
    pub fn from_plan(tick: Tick, ghost: &Ghost, result: &PlanningResult) -> Self {
        let goal = ghost
            .telemetry()
            .last()
            .map_or(ghost.current(), |r| r.goal);
        Self {
            tick:              tick.0,
            ghost_id:          ghost.id().0,
            strategy:          ghost.strategy().name(),
            goal_col:          goal.col,
            goal_row:          goal.row,
            route_len:         result.route.len() as u32,
            elapsed_us:        result.elapsed.as_micros() as u64,
            peak_memory_bytes: result.peak_memory_bytes as u64,
            nodes_expanded:    result.nodes_expanded,
            reused:            result.reused,
            status:            result.status.as_str(),
        }
    }
}

/// A ghost's logical cell and rendering position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub tick:     u64,
    pub ghost_id: u32,
    pub col:      i32,
    pub row:      i32,
    pub x:        f64,
    pub y:        f64,
    pub offset:   f64,
}

impl PositionRow {
    pub fn from_ghost(tick: Tick, ghost: &Ghost) -> Self {
        let cell = ghost.current();
        let pos = ghost.sub_cell_position();
        Self {
            tick:     tick.0,
            ghost_id: ghost.id().0,
            col:      cell.col,
            row:      cell.row,
            x:        pos.x,
            y:        pos.y,
            offset:   ghost.offset(),
        }
    }
}
