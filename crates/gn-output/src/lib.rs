//! `gn-output` — chase output writers.
//!
//! | Backend | Files created                     |
//! |---------|-----------------------------------|
//! | CSV     | `plans.csv`, `positions.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ChaseOutputObserver`], which implements `gn_sim::ChaseObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gn_output::{ChaseOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ChaseOutputObserver::new(writer, 10);
//! chase.run_ticks(600, target_at, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ChaseOutputObserver;
pub use row::{PlanRow, PositionRow};
pub use writer::OutputWriter;
