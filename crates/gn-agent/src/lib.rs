//! `gn-agent` — a single ghost: planning, route reuse, and movement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`ghost`]    | `Ghost`: owns strategy, route, position and telemetry         |
//! | [`builder`]  | `GhostBuilder`: validated construction                        |
//! | [`cache`]    | `can_reuse`: the held-route reuse policy                      |
//! | [`movement`] | `Interpolator`, `SubCellPosition`: per-tick sub-cell motion   |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                                |
//!
//! # Tick model
//!
//! Planning and movement are decoupled:
//!
//! 1. `Ghost::plan(topology, goal)` either reuses the held route or runs the
//!    ghost's strategy, and appends one telemetry record either way.
//! 2. `Ghost::advance()` adds `progress_per_tick` to the sub-cell offset and,
//!    once the offset reaches a full unit, pops the route head into the
//!    current cell.  One grid step therefore takes `ceil(1 / rate)` advances
//!    regardless of how often the ghost replans.
//!
//! The sub-cell position is rendering state only; logical occupancy is always
//! `Ghost::current()`.

pub mod builder;
pub mod cache;
pub mod error;
pub mod ghost;
pub mod movement;


pub use builder::GhostBuilder;
pub use cache::can_reuse;
pub use error::{AgentError, AgentResult};
pub use ghost::Ghost;
pub use movement::{Interpolator, SubCellPosition};
