//! Per-ghost telemetry history.

use std::collections::VecDeque;
use std::time::Duration;

use crate::TelemetryRecord;

/// Append-only history of one ghost's planning invocations.
///
/// Owned by the ghost and cleared only through the ghost's `reset()`.  With
/// a capacity set, the oldest records are dropped to keep growth bounded.
#[derive(Clone, Debug, Default)]
pub struct TelemetryLog {
    records:  VecDeque<TelemetryRecord>,
    capacity: Option<usize>,
}

/// Aggregate figures over a [`TelemetryLog`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TelemetrySummary {
    pub plans:                 usize,
    pub reused:                usize,
    pub total_nodes_expanded:  u64,
    pub total_elapsed:         Duration,
    pub max_peak_memory_bytes: usize,
}

impl TelemetrySummary {
    /// Fraction of plans that reused the held route, in `[0, 1]`.
    pub fn reuse_ratio(&self) -> f64 {
        if self.plans == 0 {
            return 0.0;
        }
        self.reused as f64 / self.plans as f64
    }
}

impl TelemetryLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self { records: VecDeque::new(), capacity }
    }

    pub fn push(&mut self, record: TelemetryRecord) {
        if let Some(cap) = self.capacity {
            while self.records.len() >= cap.max(1) {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&TelemetryRecord> {
        self.records.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TelemetryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn summary(&self) -> TelemetrySummary {
        self.records.iter().fold(TelemetrySummary::default(), |mut s, r| {
            s.plans += 1;
            s.reused += r.reused as usize;
            s.total_nodes_expanded += r.nodes_expanded;
            s.total_elapsed += r.elapsed;
            s.max_peak_memory_bytes = s.max_peak_memory_bytes.max(r.peak_memory_bytes);
            s
        })
    }
}
