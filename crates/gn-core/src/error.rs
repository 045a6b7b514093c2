//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `GnError` as one variant
//! via `#[from]` where configuration problems can surface.

use thiserror::Error;

/// The base error type for `gn-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum GnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gn-core`.
pub type GnResult<T> = Result<T, GnError>;
