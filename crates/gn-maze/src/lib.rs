//! `gn-maze` — maze topology contract and reference grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`topology`] | `Topology` trait: the only maze contract the engine uses  |
//! | [`grid`]     | `GridMaze`, `GridMazeBuilder`, ASCII loader               |
//! | [`error`]    | `MazeError`, `MazeResult<T>`                              |
//!
//! The search and agent crates never look inside a maze: they ask a
//! [`Topology`] for the traversable neighbours of a cell and nothing else.
//! Game code with its own board representation implements the trait
//! directly; [`GridMaze`] exists for tests, demos, and simple callers.

pub mod error;
pub mod grid;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{MazeError, MazeResult};
pub use grid::{GridMaze, GridMazeBuilder};
pub use topology::Topology;
