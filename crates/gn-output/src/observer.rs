//! `ChaseOutputObserver<W>` — bridges `ChaseObserver` to an `OutputWriter`.

use gn_agent::Ghost;
use gn_core::Tick;
use gn_sim::ChaseObserver;
use gn_telemetry::PlanningResult;

use crate::row::{PlanRow, PositionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ChaseObserver`] that writes every plan, and ghost positions every
/// `position_interval` ticks, to any [`OutputWriter`].
///
/// Plan rows are buffered per tick and written in one batch at tick end.
/// Errors from the writer are stored internally because observer methods
/// have no return value; check [`take_error`][Self::take_error] after the run.
pub struct ChaseOutputObserver<W: OutputWriter> {
    writer:            W,
    position_interval: u64,
    pending:           Vec<PlanRow>,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> ChaseOutputObserver<W> {
    /// `position_interval == 0` disables position rows.
    pub fn new(writer: W, position_interval: u64) -> Self {
        Self {
            writer,
            position_interval,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ChaseObserver for ChaseOutputObserver<W> {
    fn on_plan(&mut self, tick: Tick, ghost: &Ghost, result: &PlanningResult) {
        self.pending.push(PlanRow::from_plan(tick, ghost, result));
    }

    fn on_tick_end(&mut self, tick: Tick, ghosts: &[Ghost]) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_plans(&rows);
            self.store_err(result);
        }

        if self.position_interval > 0 && tick.0.is_multiple_of(self.position_interval) {
            let rows: Vec<PositionRow> = ghosts
                .iter()
                .map(|g| PositionRow::from_ghost(tick, g))
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_positions(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_chase_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
