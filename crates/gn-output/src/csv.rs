//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `plans.csv`
//! - `positions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PlanRow, PositionRow};

pub const PLAN_HEADERS: [&str; 11] = [
    "tick",
    "ghost_id",
    "strategy",
    "goal_col",
    "goal_row",
    "route_len",
    "elapsed_us",
    "peak_memory_bytes",
    "nodes_expanded",
    "reused",
    "status",
];

pub const POSITION_HEADERS: [&str; 7] = ["tick", "ghost_id", "col", "row", "x", "y", "offset"];

/// Writes chase output to two CSV files.
pub struct CsvWriter {
    plans:     Writer<File>,
    positions: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut plans = Writer::from_path(dir.join("plans.csv"))?;
        plans.write_record(PLAN_HEADERS)?;

        let mut positions = Writer::from_path(dir.join("positions.csv"))?;
        positions.write_record(POSITION_HEADERS)?;

        Ok(Self { plans, positions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_plans(&mut self, rows: &[PlanRow]) -> OutputResult<()> {
        for row in rows {
            self.plans.write_record(&[
                row.tick.to_string(),
                row.ghost_id.to_string(),
                row.strategy.to_owned(),
                row.goal_col.to_string(),
                row.goal_row.to_string(),
                row.route_len.to_string(),
                row.elapsed_us.to_string(),
                row.peak_memory_bytes.to_string(),
                row.nodes_expanded.to_string(),
                (row.reused as u8).to_string(),
                row.status.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.to_string(),
                row.ghost_id.to_string(),
                row.col.to_string(),
                row.row.to_string(),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                format!("{:.4}", row.offset),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.plans.flush()?;
        self.positions.flush()?;
        Ok(())
    }
}
