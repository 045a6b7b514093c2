use gn_agent::AgentError;
use gn_core::GnError;
use thiserror::Error;

use crate::GhostKind;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("chase configuration error: {0}")]
    Config(#[from] GnError),

    #[error("ghost construction failed: {0}")]
    Agent(#[from] AgentError),

    #[error("no spawn cell for the {0} ghost")]
    MissingSpawn(GhostKind),

    #[error("unknown level {0} (expected 1..=6)")]
    UnknownLevel(u8),
}

pub type SimResult<T> = Result<T, SimError>;
