//! `gn-core` — foundational types for the `ghost_nav` chase engine.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`cell`]      | `Cell`, `Direction`                                    |
//! | [`ids`]       | `GhostId`                                              |
//! | [`time`]      | `Tick`                                                 |
//! | [`config`]    | `EngineConfig`                                         |
//! | [`error`]     | `GnError`, `GnResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use config::EngineConfig;
pub use error::{GnError, GnResult};
pub use ids::GhostId;
pub use time::Tick;
