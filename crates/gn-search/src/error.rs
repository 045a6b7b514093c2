//! Search-subsystem error type.

use thiserror::Error;

use gn_core::Cell;

/// Errors produced by `gn-search`.
///
/// An unreachable goal is *not* an error: it is an outcome with an empty
/// route and `found == false`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("topology returned {to} as a move from {from}, which is not an orthogonal neighbour")]
    NonAdjacentMove { from: Cell, to: Cell },

    #[error("unknown search strategy {0:?} (expected BFS, DFS, UCS, or A*)")]
    UnknownStrategy(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
