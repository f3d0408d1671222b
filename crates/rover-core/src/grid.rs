//! A validated, immutable terrain grid.
//!
//! [`TerrainGrid`] is always rectangular, non-empty and made only of known
//! [`Terrain`] symbols; every constructor fails closed with a [`GridError`].
//!
//! The text format is one line per row, one symbol per cell (`F`, `H`, `D`,
//! `G`). Blanks between symbols are ignored, as are leading and trailing
//! blank lines.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Bounds, Pos};
use crate::terrain::Terrain;

/// Starting battery of the rover demo.
pub const DEFAULT_BATTERY: i32 = 25;
/// Start cell of the rover demo.
pub const DEFAULT_START: Pos = Pos::new(0, 0);
/// Goal cell of the rover demo map.
pub const DEFAULT_GOAL: Pos = Pos::new(5, 5);

const DEFAULT_MAP: &str = "\
F H F F D F
H D H F H F
F F D H F F
F H F D H F
D F F H F H
F D H F H G";

/// A rectangular array of terrain, indexed by zero-based `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Bounds,
}

impl TerrainGrid {
    /// Build a grid from rows of terrain. All rows must share one width.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Result<Self, GridError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::Empty),
        };
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let bounds = Bounds::new(rows.len() as i32, width as i32);
        Ok(Self { cells, bounds })
    }

    /// Parse a grid from its text form.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                let terrain = Terrain::try_from(ch).map_err(|symbol| GridError::UnknownTerrain {
                    symbol,
                    pos: Pos::new(r as i32, row.len() as i32),
                })?;
                row.push(terrain);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The 6x6 demo map. Its only goal cell is [`DEFAULT_GOAL`].
    pub fn rover_default() -> Self {
        match Self::parse(DEFAULT_MAP) {
            Ok(grid) => grid,
            Err(err) => unreachable!("built-in map is malformed: {err}"),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols as usize
    }

    /// Terrain at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Terrain> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether the cell at `p` holds the goal marker.
    #[inline]
    pub fn is_goal(&self, p: Pos) -> bool {
        self.at(p) == Some(Terrain::Goal)
    }

    /// All goal cells, in row-major order.
    pub fn goals(&self) -> Vec<Pos> {
        self.bounds.iter().filter(|&p| self.is_goal(p)).collect()
    }

    /// Iterate over the rows as terrain slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Terrain]> {
        self.cells.chunks(self.cols())
    }
}

impl FromStr for TerrainGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::parse(s)
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, t) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{t}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its first row has no cells.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A symbol that is not a known terrain.
    UnknownTerrain { symbol: char, pos: Pos },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownTerrain { symbol, pos } => {
                write!(f, "grid: unknown terrain \u{201c}{symbol}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
