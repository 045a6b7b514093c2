//! Scoped time measurement around exactly one strategy invocation.

use std::time::{Duration, Instant};

/// Figures captured by a closed [`MeasureScope`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed:           Duration,
    pub peak_memory_bytes: usize,
}

/// A measurement bracket opened immediately before a search and closed
/// immediately after it.
///
/// The scope is owned, so it is released on every exit path: call
/// [`close`](Self::close) for the figures, or let it drop (early return,
/// `?`, panic unwinding) and it closes itself.
#[must_use = "a scope measures nothing unless it is closed"]
pub struct MeasureScope {
    label:   &'static str,
    started: Instant,
    closed:  bool,
}

impl MeasureScope {
    pub fn open(label: &'static str) -> Self {
        Self { label, started: Instant::now(), closed: false }
    }

    /// Time since the scope was opened.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the clock.  `peak_memory_bytes` is the working-set peak reported
    /// by the measured work (zero if it failed before reporting).
    pub fn close(mut self, peak_memory_bytes: usize) -> Measurement {
        self.closed = true;
        Measurement { elapsed: self.started.elapsed(), peak_memory_bytes }
    }
}

impl Drop for MeasureScope {
    fn drop(&mut self) {
        if !self.closed {
            tracing::trace!(
                label = self.label,
                elapsed_us = self.started.elapsed().as_micros() as u64,
                "measurement scope released without close"
            );
        }
    }
}
