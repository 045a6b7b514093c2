//! The `Chase` struct and its tick loop.

use gn_agent::Ghost;
use gn_core::{Cell, GhostId, Tick};
use gn_maze::Topology;

use crate::ChaseObserver;

/// A maze, the ghosts chasing through it, and the tick counter.
///
/// Create via [`ChaseBuilder`][crate::ChaseBuilder].
pub struct Chase<T: Topology> {
    maze:   T,
    ghosts: Vec<Ghost>,
    tick:   Tick,
}

impl<T: Topology> Chase<T> {
    pub(crate) fn new(maze: T, ghosts: Vec<Ghost>) -> Self {
        Self { maze, ghosts, tick: Tick::ZERO }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick toward `target`: every ghost plans then advances, in
    /// ascending id order.
    pub fn step<O: ChaseObserver>(&mut self, target: Cell, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);

        // Disjoint field borrows: the maze is shared, ghosts are mutated.
        let maze = &self.maze;
        for ghost in self.ghosts.iter_mut() {
            let result = ghost.plan(maze, target);
            observer.on_plan(now, ghost, &result);
            ghost.advance();
        }

        observer.on_tick_end(now, &self.ghosts);
        self.tick = now.next();
    }

    /// Run exactly `n` ticks.  `target_at` is asked for the target cell at
    /// the start of every tick.
    pub fn run_ticks<F, O>(&mut self, n: u64, mut target_at: F, observer: &mut O)
    where
        F: FnMut(Tick) -> Cell,
        O: ChaseObserver,
    {
        for _ in 0..n {
            let target = target_at(self.tick);
            self.step(target, observer);
        }
        tracing::debug!(ticks = n, final_tick = %self.tick, "chase run complete");
        observer.on_chase_end(self.tick);
    }

    /// Send every ghost back to its start and rewind the clock.
    pub fn reset(&mut self) {
        for ghost in self.ghosts.iter_mut() {
            ghost.reset();
        }
        self.tick = Tick::ZERO;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn maze(&self) -> &T {
        &self.maze
    }

    #[inline]
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghost(&self, id: GhostId) -> Option<&Ghost> {
        self.ghosts.get(id.index())
    }

    /// Ghosts standing on `cell` (logical occupancy, not sub-cell position).
    pub fn ghosts_at(&self, cell: Cell) -> impl Iterator<Item = &Ghost> + '_ {
        self.ghosts.iter().filter(move |g| g.current() == cell)
    }
}
