//! Maze-subsystem error type.

use thiserror::Error;

use gn_core::Cell;

/// Errors produced while building or parsing a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze layout is empty")]
    Empty,

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown glyph {glyph:?} at {cell}")]
    UnknownGlyph { glyph: char, cell: Cell },

    #[error("cell {0} is outside the maze")]
    OutOfBounds(Cell),
}

pub type MazeResult<T> = Result<T, MazeError>;
