//! Text layouts for building a [`CostGrid`] by hand.
//!
//! One line per row, top line is `y = 0`. Each character is one cell:
//!
//! - `#` is blocked
//! - `.` is open with cost 1
//! - `1`..`9` is open with that cost
//!
//! Leading and trailing whitespace on each line is ignored, so layouts can be
//! written as indented string literals.

use std::fmt;

use crate::geom::Point;
use crate::grid::{CostGrid, GridError, Tile};

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows.
    Empty,
    /// Row `row` has `found` cells where `expected` were required.
    InconsistentSize {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Point },
    /// The parsed rows do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no rows"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Grid(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

fn tile_for(ch: char) -> Option<Tile> {
    match ch {
        '#' => Some(Tile::Blocked),
        '.' => Some(Tile::open(1)),
        '1'..='9' => ch.to_digit(10).map(|d| Tile::open(d as i32)),
        _ => None,
    }
}

impl CostGrid {
    /// Parse a grid from a text layout: `#` blocked, `.` cost 1, `1`..`9`
    /// that cost, one line per row.
    pub fn from_ascii(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };
        let width = first.len() as i32;

        let mut tiles = Vec::with_capacity(rows.len() * first.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() as i32 != width {
                return Err(LayoutError::InconsistentSize {
                    row: y as i32,
                    expected: width,
                    found: row.len() as i32,
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                tiles.push(tile_for(ch).ok_or(LayoutError::InvalidRune { ch, pos })?);
            }
        }

        Ok(CostGrid::from_tiles(width, rows.len() as i32, tiles)?)
    }
}
