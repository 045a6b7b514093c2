//! Fluent, validated construction of a [`Ghost`].
//!
//! # Usage
//!
//! ```rust
//! use gn_agent::GhostBuilder;
//! use gn_core::{Cell, GhostId};
//!
//! let ghost = GhostBuilder::new(GhostId(0), Cell::new(1, 1))
//!     .strategy_name("a*")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ghost.strategy().name(), "A*");
//! assert_eq!(ghost.current(), Cell::new(1, 1));
//! ```

use gn_core::{Cell, EngineConfig, GhostId};
use gn_search::Strategy;

use crate::{AgentError, AgentResult, Ghost};

/// Fluent builder for [`Ghost`].
///
/// Everything that can be wrong with a ghost (unknown strategy name,
/// out-of-range config) is reported by [`build`](Self::build), so a built
/// ghost can always plan.
pub struct GhostBuilder {
    id:            GhostId,
    start:         Cell,
    strategy:      Option<Strategy>,
    strategy_name: Option<String>,
    config:        EngineConfig,
}

impl GhostBuilder {
    pub fn new(id: GhostId, start: Cell) -> Self {
        Self {
            id,
            start,
            strategy:      None,
            strategy_name: None,
            config:        EngineConfig::default(),
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self.strategy_name = None;
        self
    }

    /// Select the strategy by name (`BFS`, `DFS`, `UCS`, `A*`).  The name is
    /// parsed in [`build`](Self::build).
    pub fn strategy_name(mut self, name: impl Into<String>) -> Self {
        self.strategy_name = Some(name.into());
        self.strategy = None;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> AgentResult<Ghost> {
        self.config.validate()?;
        let strategy = match (self.strategy, self.strategy_name) {
            (Some(s), _)       => s,
            (None, Some(name)) => name.parse::<Strategy>()?,
            (None, None)       => return Err(AgentError::NoStrategy(self.id)),
        };
        Ok(Ghost::new(self.id, self.start, strategy, self.config))
    }
}
