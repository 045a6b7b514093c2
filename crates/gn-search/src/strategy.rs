//! The closed set of search strategies.
//!
//! A ghost picks its strategy once, at construction.  Names are parsed with
//! [`FromStr`], so an unknown name is a construction-time error rather than a
//! silent planning failure later on.

use std::fmt;
use std::str::FromStr;

use gn_core::Cell;
use gn_maze::Topology;

use crate::{astar, bfs, dfs, ucs, SearchError, SearchOutcome, SearchResult};

/// One of the four interchangeable route searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO exploration; minimum-step route.
    BreadthFirst,
    /// LIFO exploration bounded by the depth cap; any route within the cap.
    DepthFirst,
    /// Cost-ordered exploration; minimum-cost route.
    UniformCost,
    /// `g + manhattan` ordered exploration; minimum-step route.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Short display name: `BFS`, `DFS`, `UCS`, or `A*`.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst   => "DFS",
            Strategy::UniformCost  => "UCS",
            Strategy::AStar        => "A*",
        }
    }

    /// Run this strategy.  `depth_cap` is only used by
    /// [`Strategy::DepthFirst`].
    pub fn search<T: Topology + ?Sized>(
        self,
        topology:  &T,
        start:     Cell,
        goal:      Cell,
        depth_cap: usize,
    ) -> SearchResult<SearchOutcome> {
        match self {
            Strategy::BreadthFirst => bfs::bfs(topology, start, goal),
            Strategy::DepthFirst   => dfs::dfs(topology, start, goal, depth_cap),
            Strategy::UniformCost  => ucs::ucs(topology, start, goal),
            Strategy::AStar        => astar::astar(topology, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Case-insensitive; accepts `BFS`, `DFS`, `UCS`, `A*` and `ASTAR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BFS"           => Ok(Strategy::BreadthFirst),
            "DFS"           => Ok(Strategy::DepthFirst),
            "UCS"           => Ok(Strategy::UniformCost),
            "A*" | "ASTAR"  => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}
