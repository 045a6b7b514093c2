//! Chase observer trait for progress reporting and data collection.

use gn_agent::Ghost;
use gn_core::Tick;
use gn_telemetry::PlanningResult;

/// Callbacks invoked by [`Chase::step`][crate::Chase::step] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: reuse counter
///
/// ```rust,ignore
/// struct ReuseCounter { reused: usize }
///
/// impl ChaseObserver for ReuseCounter {
///     fn on_plan(&mut self, _tick: Tick, _ghost: &Ghost, result: &PlanningResult) {
///         self.reused += result.reused as usize;
///     }
/// }
/// ```
pub trait ChaseObserver {
    /// Called at the very start of each tick, before any ghost plans.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called right after `ghost` planned, before it advances.
    fn on_plan(&mut self, _tick: Tick, _ghost: &Ghost, _result: &PlanningResult) {}

    /// Called once every ghost has planned and advanced.
    fn on_tick_end(&mut self, _tick: Tick, _ghosts: &[Ghost]) {}

    /// Called once after the last tick of a [`run_ticks`][crate::Chase::run_ticks].
    fn on_chase_end(&mut self, _final_tick: Tick) {}
}

/// A [`ChaseObserver`] that does nothing.
pub struct NoopObserver;

impl ChaseObserver for NoopObserver {}
