//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PlanRow, PositionRow};

/// A sink for planning telemetry and ghost positions.
///
/// Errors are returned here; [`ChaseOutputObserver`][crate::ChaseOutputObserver]
/// stores them for retrieval with `take_error`.
pub trait OutputWriter {
    /// Write a batch of planning rows.
    fn write_plans(&mut self, rows: &[PlanRow]) -> OutputResult<()>;

    /// Write a batch of position rows.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
