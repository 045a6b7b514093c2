//! Reference rectangular maze and its builder.
//!
//! # Data layout
//!
//! Tiles are stored row-major in a flat `Vec<bool>` (`true` = open), indexed
//! by `row * width + col`.  Neighbour queries are four bounds checks and four
//! indexed loads.
//!
//! # ASCII format
//!
//! ```text
//! #####
//! #B.C#
//! #.#.#
//! #...#
//! #####
//! ```
//!
//! | Glyph             | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `#`               | wall                                      |
//! | `.` ` ` `o`       | open floor (dot, empty, power pellet)     |
//! | `G`               | ghost-house gate (open)                   |
//! | `B` `P` `O` `R`   | ghost spawn marker (open)                 |
//! | `C`               | target spawn marker (open)                |

use std::collections::BTreeMap;

use gn_core::{Cell, Direction};

use crate::{MazeError, MazeResult, Topology};

// ── GridMaze ──────────────────────────────────────────────────────────────────

/// A `width × height` grid of open and walled tiles.
///
/// Do not construct directly; use [`GridMazeBuilder`] or
/// [`GridMaze::from_ascii`].
#[derive(Clone, Debug)]
pub struct GridMaze {
    width:   u32,
    height:  u32,
    open:    Vec<bool>,
    markers: BTreeMap<char, Cell>,
}

impl GridMaze {
    /// Parse an ASCII layout (see module docs for glyphs).
    ///
    /// Blank lines are skipped; every remaining line must have the same
    /// number of characters.  When a marker glyph appears more than once the
    /// first occurrence (row-major) wins.
    pub fn from_ascii(layout: &str) -> MazeResult<Self> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.chars().count();

        let mut b = GridMazeBuilder::new(width as u32, rows.len() as u32);
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(MazeError::RaggedRow { row, expected: width, got });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::new(col as i32, row as i32);
                match glyph {
                    '#' => b.wall(cell),
                    '.' | ' ' | 'o' | 'G' => {}
                    'B' | 'P' | 'O' | 'R' | 'C' => {
                        b.markers.entry(glyph).or_insert(cell);
                    }
                    _ => return Err(MazeError::UnknownGlyph { glyph, cell }),
                }
            }
        }
        Ok(b.build())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies inside the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.width
            && (cell.row as u32) < self.height
    }

    /// `true` if `cell` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.open[i])
    }

    /// Position of a spawn marker glyph from the ASCII layout, if present.
    pub fn marker(&self, glyph: char) -> Option<Cell> {
        self.markers.get(&glyph).copied()
    }

    /// Iterator over every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Cell::new(col, row)))
            .filter(|&c| self.is_open(c))
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.width as usize + cell.col as usize)
    }
}

impl Topology for GridMaze {
    fn valid_moves(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .iter()
            .map(|&d| cell.step(d))
            .filter(|&n| self.is_open(n))
            .collect()
    }
}

// ── GridMazeBuilder ───────────────────────────────────────────────────────────

/// Construct a [`GridMaze`] tile by tile, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use gn_core::Cell;
/// use gn_maze::{GridMazeBuilder, Topology};
///
/// let mut b = GridMazeBuilder::new(3, 1);
/// b.wall(Cell::new(1, 0));
/// let maze = b.build();
/// assert!(maze.valid_moves(Cell::new(0, 0)).is_empty());
/// ```
pub struct GridMazeBuilder {
    width:   u32,
    height:  u32,
    open:    Vec<bool>,
    markers: BTreeMap<char, Cell>,
}

impl GridMazeBuilder {
    /// Start from an all-open `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            open:    vec![true; width as usize * height as usize],
            markers: BTreeMap::new(),
        }
    }

    /// Turn `cell` into a wall.  Out-of-bounds cells are ignored.
    pub fn wall(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.open[i] = false;
        }
    }

    /// Turn `cell` back into open floor.  Out-of-bounds cells are ignored.
    pub fn open(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.open[i] = true;
        }
    }

    /// Record a spawn marker at `cell`.
    pub fn marker(&mut self, glyph: char, cell: Cell) -> MazeResult<()> {
        if self.index(cell).is_none() {
            return Err(MazeError::OutOfBounds(cell));
        }
        self.markers.insert(glyph, cell);
        Ok(())
    }

    pub fn build(self) -> GridMaze {
        GridMaze {
            width:   self.width,
            height:  self.height,
            open:    self.open,
            markers: self.markers,
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let inside = cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.width
            && (cell.row as u32) < self.height;
        inside.then(|| cell.row as usize * self.width as usize + cell.col as usize)
    }
}
