//! The ghost agent: composition of strategy, reuse policy, interpolator and
//! telemetry.

use gn_core::{Cell, EngineConfig, GhostId};
use gn_maze::Topology;
use gn_search::{Route, Strategy};
use gn_telemetry::{instrumented_search, PlanningResult, TelemetryLog, TelemetryRecord};

use crate::movement::{Interpolator, SubCellPosition};
use crate::{can_reuse, GhostBuilder};

/// One ghost chasing a target across a [`Topology`].
///
/// Created through [`GhostBuilder`]; mutated only by [`plan`](Self::plan),
/// [`advance`](Self::advance) and [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct Ghost {
    id:        GhostId,
    strategy:  Strategy,
    config:    EngineConfig,
    start:     Cell,
    current:   Cell,
    previous:  Option<Cell>,
    motion:    Interpolator,
    route:     Route,
    last_goal: Option<Cell>,
    telemetry: TelemetryLog,
}

impl Ghost {
    /// Shorthand for [`GhostBuilder::new`].
    pub fn builder(id: GhostId, start: Cell) -> GhostBuilder {
        GhostBuilder::new(id, start)
    }

    pub(crate) fn new(id: GhostId, start: Cell, strategy: Strategy, config: EngineConfig) -> Self {
        Self {
            id,
            strategy,
            start,
            current:   start,
            previous:  None,
            motion:    Interpolator::new(config.progress_per_tick),
            route:     Route::new(),
            last_goal: None,
            telemetry: TelemetryLog::new(config.telemetry_capacity),
            config,
        }
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Produce a route toward `goal`, reusing the held one when the reuse
    /// policy allows.
    ///
    /// Never fails: an invalid goal, an unreachable goal, or a search fault
    /// all come back as an empty route.  Exactly one telemetry record is
    /// appended per call.
    pub fn plan<T: Topology + ?Sized>(&mut self, topology: &T, goal: Cell) -> PlanningResult {
        if can_reuse(&self.route, self.last_goal, goal, self.current) {
            let result = PlanningResult::replayed(self.route.clone(), self.telemetry.last());
            tracing::debug!(ghost = %self.id, %goal, route_len = result.route.len(), "route reused");
            self.record(goal, &result);
            return result;
        }

        let result = instrumented_search(
            self.strategy,
            topology,
            self.current,
            goal,
            self.config.dfs_depth_cap,
        );
        tracing::debug!(
            ghost = %self.id,
            strategy = %self.strategy,
            from = %self.current,
            %goal,
            status = result.status.as_str(),
            route_len = result.route.len(),
            nodes_expanded = result.nodes_expanded,
            "route planned"
        );
        self.route = result.route.clone();
        self.last_goal = Some(goal);
        self.record(goal, &result);
        result
    }

    fn record(&mut self, goal: Cell, result: &PlanningResult) {
        self.telemetry
            .push(TelemetryRecord::capture(self.id, self.strategy, goal, result));
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Advance one tick along the route.
    ///
    /// Returns the cell entered if this tick committed a step.  With an empty
    /// route the ghost holds position and nothing changes.
    pub fn advance(&mut self) -> Option<Cell> {
        let next = self.route.head()?;
        if !self.motion.tick() {
            return None;
        }
        self.route.pop_head();
        self.previous = Some(self.current);
        self.current = next;
        tracing::trace!(ghost = %self.id, cell = %next, remaining = self.route.len(), "step committed");
        Some(next)
    }

    /// Restore the state the ghost was built with: back at the start cell,
    /// no route, no goal, zero offset, empty telemetry.
    pub fn reset(&mut self) {
        self.current = self.start;
        self.previous = None;
        self.motion.reset();
        self.route.clear();
        self.last_goal = None;
        self.telemetry.clear();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> GhostId {
        self.id
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn current(&self) -> Cell {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> Option<Cell> {
        self.previous
    }

    /// Sub-cell offset toward the route head, in `[0, 1)`.  Always `0` while
    /// the route is empty: the ghost sits at its cell centre.
    #[inline]
    pub fn offset(&self) -> f64 {
        if self.route.is_empty() {
            0.0
        } else {
            self.motion.offset()
        }
    }

    /// Pixel position for rendering: the current cell's centre blended
    /// toward the route head by the offset.
    pub fn sub_cell_position(&self) -> SubCellPosition {
        SubCellPosition::blend(self.current, self.route.head(), self.offset(), self.config.cell_size)
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn last_goal(&self) -> Option<Cell> {
        self.last_goal
    }

    #[inline]
    pub fn telemetry(&self) -> &TelemetryLog {
        &self.telemetry
    }
}
