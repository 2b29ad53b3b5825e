use std::collections::BinaryHeap;

use gridpath_core::{CostGrid, Point};

use crate::finder::{NodeRef, PathFinder};
use crate::result::{Path, SearchResult};
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute a minimum-cost path from `from` to `to` using A*.
    ///
    /// The result includes both endpoints. Endpoints outside the finder's
    /// area or not passable for `pather` yield [`SearchResult::Unreachable`],
    /// as does an exhausted frontier; no partial path is ever returned.
    pub fn astar_path<P: AstarPather>(&mut self, pather: &P, from: Point, to: Point) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            log::debug!("path endpoints {from} -> {to} lie outside the search area");
            return SearchResult::Unreachable;
        };
        if !pather.passable(from) || !pather.passable(to) {
            log::debug!("path endpoint blocked: {from} -> {to}");
            return SearchResult::Unreachable;
        }

        if start_idx == goal_idx {
            return SearchResult::Found(Path::new(vec![from], 0));
        }

        let cur_gen = self.next_generation();

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: i64::from(pather.estimate(from, to)),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + i64::from(pather.cost(current_point, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative_g >= n.g {
                    continue;
                }

                n.generation = cur_gen;
                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + i64::from(pather.estimate(np, to)),
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("path not found: {from} -> {to}");
            return SearchResult::Unreachable;
        }

        // Reconstruct path.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        SearchResult::Found(Path::new(cells, self.nodes[goal_idx].g))
    }
}

/// One-off search on `grid` from `start` to `goal`.
///
/// Allocates a fresh [`PathFinder`]; callers that search the same grid
/// repeatedly can keep their own finder instead.
pub fn find_path(grid: &CostGrid, start: Point, goal: Point) -> SearchResult {
    PathFinder::for_grid(grid).astar_path(grid, start, goal)
}
