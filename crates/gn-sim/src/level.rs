//! Ghost roster and level presets.

use std::collections::BTreeMap;
use std::fmt;

use gn_core::Cell;
use gn_maze::GridMaze;
use gn_search::Strategy;

use crate::{SimError, SimResult};

// ── GhostKind ─────────────────────────────────────────────────────────────────

/// The four ghosts, each paired with its own search strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GhostKind {
    Blue,
    Pink,
    Orange,
    Red,
}

impl GhostKind {
    pub const ALL: [GhostKind; 4] = [GhostKind::Blue, GhostKind::Pink, GhostKind::Orange, GhostKind::Red];

    pub const fn default_strategy(self) -> Strategy {
        match self {
            GhostKind::Blue   => Strategy::BreadthFirst,
            GhostKind::Pink   => Strategy::DepthFirst,
            GhostKind::Orange => Strategy::UniformCost,
            GhostKind::Red    => Strategy::AStar,
        }
    }

    /// Spawn glyph in an ASCII maze layout.
    pub const fn marker(self) -> char {
        match self {
            GhostKind::Blue   => 'B',
            GhostKind::Pink   => 'P',
            GhostKind::Orange => 'O',
            GhostKind::Red    => 'R',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GhostKind::Blue   => "blue",
            GhostKind::Pink   => "pink",
            GhostKind::Orange => "orange",
            GhostKind::Red    => "red",
        }
    }
}

impl fmt::Display for GhostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// A level number, `1..=6`.
///
/// | Level | Ghosts                    |
/// |-------|---------------------------|
/// | 1     | blue (BFS)                |
/// | 2     | pink (DFS)                |
/// | 3     | orange (UCS)              |
/// | 4     | red (A*)                  |
/// | 5, 6  | all four                  |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level(u8);

impl Level {
    pub const MAX: u8 = 6;

    pub fn new(n: u8) -> SimResult<Self> {
        if (1..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(SimError::UnknownLevel(n))
        }
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Ghosts that take part, in spawn (and therefore id) order.
    pub fn ghosts(self) -> &'static [GhostKind] {
        match self.0 {
            1 => &[GhostKind::Blue],
            2 => &[GhostKind::Pink],
            3 => &[GhostKind::Orange],
            4 => &[GhostKind::Red],
            _ => &GhostKind::ALL,
        }
    }
}

// ── Spawns ────────────────────────────────────────────────────────────────────

/// Where each ghost kind starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spawns {
    cells: BTreeMap<GhostKind, Cell>,
}

impl Spawns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every ghost marker present in `maze`.
    pub fn from_maze(maze: &GridMaze) -> Self {
        let cells = GhostKind::ALL
            .into_iter()
            .filter_map(|kind| maze.marker(kind.marker()).map(|cell| (kind, cell)))
            .collect();
        Self { cells }
    }

    pub fn insert(&mut self, kind: GhostKind, cell: Cell) -> &mut Self {
        self.cells.insert(kind, cell);
        self
    }

    pub fn get(&self, kind: GhostKind) -> Option<Cell> {
        self.cells.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
