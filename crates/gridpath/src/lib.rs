//! **gridpath** — minimum-cost paths on grids with obstacles.
//!
//! A grid is built once ([`generate_grid`], or by hand with
//! [`CostGrid::from_ascii`]), mutated by [`add_obstacle`], and searched with
//! [`find_path`] after every change. [`Session`] bundles those steps behind
//! the start/goal selection flow an interactive front end needs.
//!
//! ```
//! use gridpath::{Point, add_obstacle, find_path, generate_grid};
//!
//! let start = Point::new(0, 0);
//! let goal = Point::new(9, 9);
//! let mut grid = generate_grid(10, 10, 0.2, start, goal, 7).unwrap();
//! let before = find_path(&grid, start, goal);
//!
//! add_obstacle(&mut grid, Point::new(5, 5)).unwrap();
//! let after = find_path(&grid, start, goal);
//! assert!(!after.is_found() || after.total_cost() >= before.total_cost());
//! ```

pub mod session;

pub use gridpath_core::{CostGrid, GridError, LayoutError, Point, Tile};
pub use gridpath_gen::{GenConfig, GridGen, generate_grid, random_point};
pub use gridpath_paths::{
    AstarPather, Path, PathFinder, Pather, SearchResult, UNREACHABLE, WeightedPather, find_path,
    manhattan,
};
pub use session::{Mode, Selection, Session};

/// Block `cell` in `grid`.
///
/// Idempotent. An out-of-bounds `cell` is logged and returned as
/// [`GridError::OutOfBounds`] without touching the grid; callers may treat
/// it as non-fatal. Blocking a cell currently used as a search endpoint is
/// allowed; the next [`find_path`] reports it unreachable.
pub fn add_obstacle(grid: &mut CostGrid, cell: Point) -> Result<(), GridError> {
    grid.set_blocked(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = CostGrid::new(3, 3).unwrap();
        let r = find_path(&grid, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(r.path().len(), 5);
        assert_eq!(r.total_cost(), 4);
    }

    #[test]
    fn boxing_in_the_start_makes_goal_unreachable() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        add_obstacle(&mut grid, Point::new(1, 0)).unwrap();
        add_obstacle(&mut grid, Point::new(0, 1)).unwrap();
        let r = find_path(&grid, Point::new(0, 0), Point::new(2, 2));
        assert!(!r.is_found());
        assert_eq!(r.total_cost(), UNREACHABLE);
    }

    #[test]
    fn add_obstacle_out_of_bounds_is_soft() {
        let mut grid = generate_grid(4, 4, 0.3, Point::ZERO, Point::new(3, 3), 8).unwrap();
        let before = grid.clone();
        let p = Point::new(-1, 2);
        assert_eq!(add_obstacle(&mut grid, p), Err(GridError::OutOfBounds(p)));
        assert_eq!(grid, before);
    }

    #[test]
    fn add_obstacle_is_stable() {
        let mut grid = CostGrid::new(2, 2).unwrap();
        let p = Point::new(1, 1);
        for _ in 0..3 {
            add_obstacle(&mut grid, p).unwrap();
            assert_eq!(grid.is_blocked(p), Ok(true));
        }
        assert_eq!(grid.blocked_count(), 1);
    }

    #[test]
    fn obstacles_never_make_paths_cheaper() {
        let start = Point::new(0, 0);
        let goal = Point::new(11, 11);
        let mut grid = generate_grid(12, 12, 0.15, start, goal, 21).unwrap();
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(21);
        let mut last = find_path(&grid, start, goal).total_cost();
        for _ in 0..25 {
            let p = random_point(&mut rng, &grid);
            add_obstacle(&mut grid, p).unwrap();
            let r = find_path(&grid, start, goal);
            assert!(r.total_cost() >= last);
            for &cell in r.path() {
                assert_eq!(grid.is_blocked(cell), Ok(false));
            }
            last = r.total_cost();
        }
    }
}
