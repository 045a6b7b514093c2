//! `gn-sim` — drives several ghosts against one maze, tick by tick.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① on_tick_start(tick)
//!   ② for each ghost in ascending GhostId order:
//!        plan(target)   → on_plan(tick, ghost, result)
//!        advance()
//!   ③ on_tick_end(tick, ghosts)
//! ```
//!
//! Ghosts share only the read-only maze; each is planned and moved to
//! completion before the next one is touched.  Planning never fails, so the
//! loop itself is infallible; only construction returns errors.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_maze::GridMaze;
//! use gn_sim::{ChaseBuilder, Level, NoopObserver, Spawns};
//!
//! let maze   = GridMaze::from_ascii(LAYOUT)?;
//! let spawns = Spawns::from_maze(&maze);
//! let mut chase = ChaseBuilder::for_level(Level::new(5)?, maze, &spawns)?.build()?;
//! chase.run_ticks(600, |_| target, &mut NoopObserver);
//! ```

pub mod builder;
pub mod chase;
pub mod error;
pub mod level;
pub mod observer;


pub use builder::ChaseBuilder;
pub use chase::Chase;
pub use error::{SimError, SimResult};
pub use level::{GhostKind, Level, Spawns};
pub use observer::{ChaseObserver, NoopObserver};
