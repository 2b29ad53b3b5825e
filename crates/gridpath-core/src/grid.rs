//! The [`CostGrid`] type: a fixed-size table of [`Tile`]s.
//!
//! Every cell is either blocked or open with a positive entry cost. The grid
//! never changes size after construction; the only mutation it accepts is
//! [`set_blocked`](CostGrid::set_blocked).

use std::fmt;

use crate::geom::Point;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// The cell cannot be entered.
    Blocked,
    /// The cell can be entered for `cost` (always >= 1).
    Open { cost: i32 },
}

impl Tile {
    /// An open tile. Costs below 1 are raised to 1.
    #[inline]
    pub const fn open(cost: i32) -> Self {
        Self::Open {
            cost: if cost < 1 { 1 } else { cost },
        }
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Entry cost, or `None` for a blocked tile.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Self::Blocked => None,
            Self::Open { cost } => Some(cost),
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::open(1)
    }
}

/// Errors reported by grid construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The targeted cell lies outside the grid. Non-fatal: the grid is left
    /// unchanged.
    OutOfBounds(Point),
    /// A row-major tile list whose length does not match the dimensions.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is out of grid bounds"),
            Self::TileCount { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `width × height` grid of blocked and weighted cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl CostGrid {
    /// Create a grid where every cell is open with cost 1.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| Tile::default())
    }

    /// Create a grid by asking `f` for the tile at each point, row by row.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> Tile,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut tiles = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                tiles.push(match f(Point::new(x, y)) {
                    Tile::Open { cost } => Tile::open(cost),
                    Tile::Blocked => Tile::Blocked,
                });
            }
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Create a grid from row-major `tiles`, which must hold exactly
    /// `width * height` entries.
    pub fn from_tiles(width: i32, height: i32, mut tiles: Vec<Tile>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if tiles.len() != expected {
            return Err(GridError::TileCount {
                expected,
                found: tiles.len(),
            });
        }
        for t in tiles.iter_mut() {
            if let Tile::Open { cost } = *t {
                *t = Tile::open(cost);
            }
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether the cell at `p` is blocked.
    pub fn is_blocked(&self, p: Point) -> Result<bool, GridError> {
        self.tile(p)
            .map(Tile::is_blocked)
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Entry cost of the cell at `p`. `None` if `p` is blocked or outside
    /// the grid.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<i32> {
        self.tile(p).and_then(Tile::cost)
    }

    /// Whether a path may step onto `p`.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        matches!(self.tile(p), Some(Tile::Open { .. }))
    }

    /// Mark the cell at `p` as blocked. Blocking an already blocked cell is
    /// a no-op. Out-of-bounds positions are logged and leave the grid
    /// untouched.
    ///
    /// Nothing stops callers from blocking a cell they currently use as a
    /// search endpoint; the next search simply reports it unreachable.
    pub fn set_blocked(&mut self, p: Point) -> Result<(), GridError> {
        let Some(i) = self.index(p) else {
            log::warn!("position {p} is out of grid bounds");
            return Err(GridError::OutOfBounds(p));
        };
        self.tiles[i] = Tile::Blocked;
        log::info!("obstacle added at {p}");
        Ok(())
    }

    /// Overwrite the tile at `p`.
    pub(crate) fn set_tile(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Force `p` open with cost 1. Used by generators for path endpoints.
    pub fn clear(&mut self, p: Point) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds(p));
        }
        self.set_tile(p, Tile::open(1));
        Ok(())
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_blocked()).count()
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let w = self.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Point::new((i % w) as i32, (i / w) as i32), t))
    }

    /// Total entry cost of walking `cells` in order: the sum of the costs of
    /// every cell but the first.
    ///
    /// Returns `None` when `cells` is empty, touches a blocked or
    /// out-of-bounds cell, or contains a step that is not a single
    /// orthogonal move.
    pub fn path_cost(&self, cells: &[Point]) -> Option<i64> {
        let (&first, rest) = cells.split_first()?;
        if !self.passable(first) {
            return None;
        }
        let mut prev = first;
        let mut total = 0i64;
        for &p in rest {
            if !prev.is_adjacent(p) {
                return None;
            }
            total += i64::from(self.cost(p)?);
            prev = p;
        }
        Some(total)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for CostGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = GridRepr::deserialize(deserializer)?;
        CostGrid::from_tiles(repr.width, repr.height, repr.tiles).map_err(D::Error::custom)
    }
}
