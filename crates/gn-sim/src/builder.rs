//! Fluent builder for constructing a [`Chase`].

use gn_agent::GhostBuilder;
use gn_core::{Cell, EngineConfig, GhostId};
use gn_maze::Topology;
use gn_search::Strategy;

use crate::{Chase, Level, SimError, SimResult, Spawns};

/// Fluent builder for [`Chase<T>`].
///
/// Ghost ids are assigned `0, 1, 2, …` in the order ghosts are added, which
/// is also the order they are planned and moved each tick.
///
/// # Example
///
/// ```rust,ignore
/// let mut chase = ChaseBuilder::new(maze)
///     .config(config)
///     .ghost(Strategy::AStar, Cell::new(1, 1))
///     .ghost(Strategy::BreadthFirst, Cell::new(5, 1))
///     .build()?;
/// ```
pub struct ChaseBuilder<T: Topology> {
    maze:   T,
    config: EngineConfig,
    ghosts: Vec<(Strategy, Cell)>,
}

impl<T: Topology> ChaseBuilder<T> {
    pub fn new(maze: T) -> Self {
        Self { maze, config: EngineConfig::default(), ghosts: Vec::new() }
    }

    /// Preload the ghosts of `level`, each at its spawn with its default
    /// strategy.
    pub fn for_level(level: Level, maze: T, spawns: &Spawns) -> SimResult<Self> {
        let mut builder = Self::new(maze);
        for &kind in level.ghosts() {
            let start = spawns.get(kind).ok_or(SimError::MissingSpawn(kind))?;
            builder = builder.ghost(kind.default_strategy(), start);
        }
        Ok(builder)
    }

    /// Engine configuration shared by every ghost.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ghost(mut self, strategy: Strategy, start: Cell) -> Self {
        self.ghosts.push((strategy, start));
        self
    }

    /// Validate the configuration, build every ghost, and return a chase at
    /// tick zero.
    pub fn build(self) -> SimResult<Chase<T>> {
        self.config.validate()?;
        let ghosts = self
            .ghosts
            .into_iter()
            .enumerate()
            .map(|(i, (strategy, start))| {
                GhostBuilder::new(GhostId(i as u32), start)
                    .strategy(strategy)
                    .config(self.config.clone())
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chase::new(self.maze, ghosts))
    }
}
