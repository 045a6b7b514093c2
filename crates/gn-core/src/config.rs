//! Engine configuration.

use crate::{GnError, GnResult};

/// Tunables shared by every ghost in a chase.
///
/// Typically built with `EngineConfig::default()` and adjusted field by
/// field, or loaded from JSON by the application (feature `serde`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Sub-cell progress added per `advance()`.  One grid step therefore takes
    /// `ceil(1 / progress_per_tick)` ticks.  Must be in `(0, 1]`.
    pub progress_per_tick: f64,

    /// Tile size in pixels, used only for the rendering-side sub-cell
    /// position.  Must be non-zero.
    pub cell_size: u32,

    /// Longest path, in cells including the start, that depth-first search
    /// will extend.  Must be at least 1.
    pub dfs_depth_cap: usize,

    /// Maximum telemetry records kept per ghost.  `None` keeps everything;
    /// `Some(n)` drops the oldest records beyond `n`.
    pub telemetry_capacity: Option<usize>,
}

impl EngineConfig {
    pub const DEFAULT_PROGRESS_PER_TICK: f64 = 0.05;
    pub const DEFAULT_CELL_SIZE: u32 = 20;
    pub const DEFAULT_DFS_DEPTH_CAP: usize = 30;

    /// Check every field is in range.
    pub fn validate(&self) -> GnResult<()> {
        let rate = self.progress_per_tick;
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            return Err(GnError::Config(format!(
                "progress_per_tick must be in (0, 1], got {rate}"
            )));
        }
        if self.cell_size == 0 {
            return Err(GnError::Config("cell_size must be non-zero".into()));
        }
        if self.dfs_depth_cap == 0 {
            return Err(GnError::Config("dfs_depth_cap must be at least 1".into()));
        }
        if self.telemetry_capacity == Some(0) {
            return Err(GnError::Config(
                "telemetry_capacity must be non-zero (use None for unbounded)".into(),
            ));
        }
        Ok(())
    }

    /// Ticks needed to cross one cell at the configured rate.
    #[inline]
    pub fn ticks_per_step(&self) -> u64 {
        Self::ticks_for_rate(self.progress_per_tick)
    }

    /// `ceil(1 / rate)`, never less than one.
    #[inline]
    pub fn ticks_for_rate(rate: f64) -> u64 {
        ((1.0 / rate).ceil() as u64).max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            progress_per_tick:  Self::DEFAULT_PROGRESS_PER_TICK,
            cell_size:          Self::DEFAULT_CELL_SIZE,
            dfs_depth_cap:      Self::DEFAULT_DFS_DEPTH_CAP,
            telemetry_capacity: None,
        }
    }
}
