//! `gn-telemetry` — measuring and recording planning invocations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`scope`]    | `MeasureScope` guard, `Measurement`                           |
//! | [`record`]   | `PlanningResult`, `PlanStatus`, `TelemetryRecord`             |
//! | [`log`]      | `TelemetryLog` (per ghost, bounded), `TelemetrySummary`       |
//! | [`recorder`] | `instrumented_search`: one measured strategy invocation       |
//!
//! # Failure policy
//!
//! Nothing in this crate returns an error.  A search fault is logged with
//! `tracing::warn!` and turned into an empty-route [`PlanningResult`] so one
//! ghost's failure never halts a chase tick.

pub mod log;
pub mod record;
pub mod recorder;
pub mod scope;

#[cfg(test)]
mod tests;

pub use log::{TelemetryLog, TelemetrySummary};
pub use record::{PlanStatus, PlanningResult, TelemetryRecord};
pub use recorder::instrumented_search;
pub use scope::{MeasureScope, Measurement};
