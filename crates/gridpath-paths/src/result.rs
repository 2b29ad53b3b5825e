use gridpath_core::Point;

/// Sentinel total cost of an unreachable goal.
///
/// Path costs are summed as `i64`, so no found path can reach this value:
/// even a path through `i32::MAX` cells of cost `i32::MAX` stays below it.
pub const UNREACHABLE: i64 = i64::MAX;

/// A start-to-goal walk and its total entry cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathRepr")
)]
pub struct Path {
    cells: Vec<Point>,
    cost: i64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr {
    cells: Vec<Point>,
    cost: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = &'static str;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        if repr.cells.is_empty() {
            return Err("path must contain at least one cell");
        }
        Ok(Self {
            cells: repr.cells,
            cost: repr.cost,
        })
    }
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>, cost: i64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Cells from start to goal, both included.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Sum of the entry costs of every cell except the start.
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
}

/// Outcome of a single search. Not finding a path is an ordinary result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A minimum-cost path.
    Found(Path),
    /// No path connects the endpoints.
    #[default]
    Unreachable,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found path's cells, or an empty slice.
    pub fn path(&self) -> &[Point] {
        match self {
            Self::Found(p) => p.cells(),
            Self::Unreachable => &[],
        }
    }

    /// Total entry cost, or [`UNREACHABLE`].
    pub fn total_cost(&self) -> i64 {
        match self {
            Self::Found(p) => p.cost(),
            Self::Unreachable => UNREACHABLE,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::Unreachable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_has_sentinel_cost_and_no_cells() {
        let r = SearchResult::Unreachable;
        assert!(!r.is_found());
        assert!(r.path().is_empty());
        assert_eq!(r.total_cost(), UNREACHABLE);
        assert_eq!(r.into_path(), None);
    }

    #[test]
    fn found_exposes_path() {
        let cells = vec![Point::new(0, 0), Point::new(1, 0)];
        let r = SearchResult::Found(Path::new(cells.clone(), 3));
        assert!(r.is_found());
        assert_eq!(r.path(), cells.as_slice());
        assert_eq!(r.total_cost(), 3);
        let p = r.into_path().unwrap();
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.goal(), Some(Point::new(1, 0)));
        assert_eq!(p.len(), 2);
    }
}
