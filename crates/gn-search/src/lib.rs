//! `gn-search` — the four interchangeable route searches.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`strategy`] | `Strategy` enum: closed set of searches, name parsing     |
//! | [`route`]    | `Route`, `SearchOutcome`                                  |
//! | [`bfs`]      | breadth-first search (FIFO, minimum steps)                |
//! | [`dfs`]      | depth-first search with a path-length cap                 |
//! | [`ucs`]      | uniform-cost search (pop-time visited check)              |
//! | [`astar`]    | A* with the Manhattan heuristic                           |
//! | [`error`]    | `SearchError`, `SearchResult<T>`                          |
//!
//! # Shared contract
//!
//! Every search takes a [`Topology`][gn_maze::Topology], a start and a goal,
//! and returns a [`SearchOutcome`] whose route excludes the start cell.
//! A goal that has no traversable neighbours (and is not the start) is
//! rejected before any node is expanded.
//!
//! Paths are never copied per frontier entry: each search appends immutable
//! `(cell, parent)` nodes to an arena and frontier entries hold arena
//! indices, so a route is materialised exactly once, when the goal is popped.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashSet` for visited sets.           |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.       |

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod error;
pub mod route;
pub mod strategy;
pub mod ucs;

mod frontier;

#[cfg(test)]
mod tests;

pub use error::{SearchError, SearchResult};
pub use frontier::is_isolated_goal;
pub use route::{Route, SearchOutcome};
pub use strategy::Strategy;
