use gn_core::{GhostId, GnError};
use gn_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid configuration: {0}")]
    Config(#[from] GnError),

    #[error("strategy selection failed: {0}")]
    Strategy(#[from] SearchError),

    #[error("ghost {0} has no strategy selected")]
    NoStrategy(GhostId),
}

pub type AgentResult<T> = Result<T, AgentError>;
