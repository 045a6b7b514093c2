//! Planning results and the telemetry records derived from them.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gn_core::{Cell, GhostId};
use gn_search::{Route, SearchOutcome, Strategy};

use crate::Measurement;

// ── PlanStatus ────────────────────────────────────────────────────────────────

/// How a planning invocation was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanStatus {
    /// A search ran and reached the goal (possibly with an empty route when
    /// already there).
    Found,
    /// A search ran and exhausted its space without reaching the goal.
    Unreachable,
    /// The held route was reused; no search ran.
    Reused,
    /// The goal has no traversable neighbours; no search ran.
    InvalidGoal,
    /// The search hit an internal fault and was treated as "no route".
    Faulted,
}

impl PlanStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlanStatus::Found       => "found",
            PlanStatus::Unreachable => "unreachable",
            PlanStatus::Reused      => "reused",
            PlanStatus::InvalidGoal => "invalid_goal",
            PlanStatus::Faulted     => "faulted",
        }
    }
}

// ── PlanningResult ────────────────────────────────────────────────────────────

/// The immutable product of one planning invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanningResult {
    pub route:             Route,
    pub elapsed:           Duration,
    pub peak_memory_bytes: usize,
    pub nodes_expanded:    u64,
    pub reused:            bool,
    pub status:            PlanStatus,
}

impl PlanningResult {
    /// A search ran to completion under `measurement`.
    pub fn computed(outcome: SearchOutcome, measurement: Measurement) -> Self {
        Self {
            status:            if outcome.found { PlanStatus::Found } else { PlanStatus::Unreachable },
            route:             outcome.route,
            elapsed:           measurement.elapsed,
            peak_memory_bytes: measurement.peak_memory_bytes,
            nodes_expanded:    outcome.nodes_expanded,
            reused:            false,
        }
    }

    /// Zero-cost rejection of a goal with no traversable neighbours.
    pub fn invalid_goal() -> Self {
        Self::empty(PlanStatus::InvalidGoal, Measurement::default())
    }

    /// A search fault, resolved into an empty route.
    pub fn faulted(measurement: Measurement) -> Self {
        Self::empty(PlanStatus::Faulted, measurement)
    }

    /// The held `route` is kept; cost figures are replayed from `prior`
    /// (zeros if there is no prior record).
    pub fn replayed(route: Route, prior: Option<&TelemetryRecord>) -> Self {
        Self {
            route,
            elapsed:           prior.map_or(Duration::ZERO, |r| r.elapsed),
            peak_memory_bytes: prior.map_or(0, |r| r.peak_memory_bytes),
            nodes_expanded:    prior.map_or(0, |r| r.nodes_expanded),
            reused:            true,
            status:            PlanStatus::Reused,
        }
    }

    fn empty(status: PlanStatus, measurement: Measurement) -> Self {
        Self {
            route:             Route::new(),
            elapsed:           measurement.elapsed,
            peak_memory_bytes: measurement.peak_memory_bytes,
            nodes_expanded:    0,
            reused:            false,
            status,
        }
    }
}

// ── TelemetryRecord ───────────────────────────────────────────────────────────

/// A snapshot of one [`PlanningResult`] plus who planned, how, and when.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryRecord {
    pub ghost:             GhostId,
    pub strategy:          Strategy,
    pub goal:              Cell,
    pub route_len:         usize,
    pub elapsed:           Duration,
    pub peak_memory_bytes: usize,
    pub nodes_expanded:    u64,
    pub reused:            bool,
    pub status:            PlanStatus,
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub captured_unix_ms:  u64,
}

impl TelemetryRecord {
    pub fn capture(ghost: GhostId, strategy: Strategy, goal: Cell, result: &PlanningResult) -> Self {
        let captured_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self {
            ghost,
            strategy,
            goal,
            route_len:         result.route.len(),
            elapsed:           result.elapsed,
            peak_memory_bytes: result.peak_memory_bytes,
            nodes_expanded:    result.nodes_expanded,
            reused:            result.reused,
            status:            result.status,
            captured_unix_ms,
        }
    }
}
