use gridpath_core::{CostGrid, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface: which cells exist and how they connect.
pub trait Pather {
    /// Whether a path may start on, end on, or pass through `p`.
    fn passable(&self, p: Point) -> bool;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

// A cost grid is searched with 4-way movement, paying the entry cost of the
// destination cell, steered by Manhattan distance.

impl Pather for CostGrid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        CostGrid::passable(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| CostGrid::passable(self, n)),
        );
    }
}

impl WeightedPather for CostGrid {
    #[inline]
    fn cost(&self, _from: Point, to: Point) -> i32 {
        CostGrid::cost(self, to).unwrap_or(i32::MAX)
    }
}

impl AstarPather for CostGrid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
