//! Sub-cell movement along a route.

use gn_core::{Cell, EngineConfig};

/// Continuous progress from the current cell toward the route head.
///
/// Progress is counted in whole ticks, so a step commits after exactly
/// `ceil(1 / rate)` ticks whatever the rounding of `rate`.  The offset always
/// lies in `[0, 1)`.  It returns to `0` exactly when a step commits (or on
/// [`reset`](Self::reset)); replanning does not touch it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interpolator {
    rate:           f64,
    ticks_per_step: u64,
    ticks:          u64,
}

impl Interpolator {
    pub fn new(rate: f64) -> Self {
        Self { rate, ticks_per_step: EngineConfig::ticks_for_rate(rate), ticks: 0 }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        (self.ticks as f64 * self.rate).min(1.0 - f64::EPSILON)
    }

    /// Add one tick of progress.  Returns `true` if the step commits, in
    /// which case the offset is already back at `0`.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.ticks_per_step {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

/// Pixel position of a walker, for rendering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubCellPosition {
    pub x: f64,
    pub y: f64,
}

impl SubCellPosition {
    /// Centre of `cell` on a grid of `cell_size`-pixel tiles.
    pub fn centre(cell: Cell, cell_size: u32) -> Self {
        let size = cell_size as f64;
        let half = (cell_size / 2) as f64;
        Self {
            x: cell.col as f64 * size + half,
            y: cell.row as f64 * size + half,
        }
    }

    /// Linear blend from the centre of `from` toward the centre of `toward`,
    /// `offset` of the way there.
    pub fn blend(from: Cell, toward: Option<Cell>, offset: f64, cell_size: u32) -> Self {
        let base = Self::centre(from, cell_size);
        let Some(to) = toward else { return base };
        let size = cell_size as f64;
        Self {
            x: base.x + (to.col - from.col) as f64 * offset * size,
            y: base.y + (to.row - from.row) as f64 * offset * size,
        }
    }
}
