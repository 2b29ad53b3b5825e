//! Random cost-grid generator.
//!
//! Each cell is independently blocked with probability
//! [`obstacle_probability`](GenConfig::obstacle_probability); open cells get
//! a movement cost drawn uniformly from `min_cost..=max_cost`. The configured
//! start and goal are then forced open with cost 1.

use gridpath_core::{CostGrid, GridError, Point, Tile};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Parameters for [`GridGen`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub width: i32,
    pub height: i32,
    /// Chance of each cell being blocked. Expected in `[0, 1]`; not
    /// validated.
    pub obstacle_probability: f64,
    /// Lowest movement cost of an open cell. Values below 1 count as 1.
    pub min_cost: i32,
    /// Highest movement cost of an open cell (inclusive).
    pub max_cost: i32,
    /// Forced open with cost 1.
    pub start: Point,
    /// Forced open with cost 1.
    pub goal: Point,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            obstacle_probability: 0.2,
            min_cost: 1,
            max_cost: 5,
            start: Point::new(0, 1),
            goal: Point::new(4, 4),
        }
    }
}

/// Grid generator holding its configuration and random source.
pub struct GridGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl<R: Rng> GridGen<R> {
    /// Create a new generator.
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a grid.
    ///
    /// Cells are visited in row-major order, drawing one `f64` per cell and
    /// one cost per open cell, so a seeded `rng` always yields the same grid.
    /// Endpoints outside the grid are skipped with a warning.
    pub fn generate(&mut self) -> Result<CostGrid, GridError> {
        let Self { rng, config } = self;
        let lo = config.min_cost.max(1);
        let hi = config.max_cost.max(lo);

        let mut grid = CostGrid::from_fn(config.width, config.height, |_| {
            let r: f64 = rng.random();
            if r < config.obstacle_probability {
                Tile::Blocked
            } else {
                Tile::open(rng.random_range(lo..=hi))
            }
        })?;

        for p in [config.start, config.goal] {
            if grid.clear(p).is_err() {
                log::warn!("endpoint {p} is outside the {}x{} grid", grid.width(), grid.height());
            }
        }

        log::debug!(
            "generated {}x{} grid with {} obstacles",
            grid.width(),
            grid.height(),
            grid.blocked_count()
        );
        Ok(grid)
    }
}

/// Generate a grid with costs `1..=5` from a seeded [`StdRng`].
///
/// The same arguments always produce the same grid.
pub fn generate_grid(
    width: i32,
    height: i32,
    obstacle_probability: f64,
    start: Point,
    goal: Point,
    seed: u64,
) -> Result<CostGrid, GridError> {
    let config = GenConfig {
        width,
        height,
        obstacle_probability,
        start,
        goal,
        ..GenConfig::default()
    };
    GridGen::new(config, StdRng::seed_from_u64(seed)).generate()
}

/// A uniformly random cell of `grid`.
pub fn random_point(rng: &mut impl Rng, grid: &CostGrid) -> Point {
    Point::new(
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_grid() {
        let a = generate_grid(20, 15, 0.3, Point::new(0, 0), Point::new(19, 14), 99).unwrap();
        let b = generate_grid(20, 15, 0.3, Point::new(0, 0), Point::new(19, 14), 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn endpoints_are_forced_open() {
        let start = Point::new(0, 1);
        let goal = Point::new(4, 4);
        for seed in 0..20 {
            let g = generate_grid(10, 10, 0.9, start, goal, seed).unwrap();
            assert_eq!(g.tile(start), Some(Tile::open(1)));
            assert_eq!(g.tile(goal), Some(Tile::open(1)));
        }
    }

    #[test]
    fn costs_stay_in_range() {
        let config = GenConfig {
            width: 30,
            height: 30,
            obstacle_probability: 0.1,
            min_cost: 2,
            max_cost: 7,
            start: Point::new(0, 0),
            goal: Point::new(29, 29),
        };
        let grid = GridGen::new(config, StdRng::seed_from_u64(5)).generate().unwrap();
        for (p, tile) in grid.iter() {
            if let Some(cost) = tile.cost() {
                if p == Point::new(0, 0) || p == Point::new(29, 29) {
                    assert_eq!(cost, 1);
                } else {
                    assert!((2..=7).contains(&cost), "cost {cost} at {p}");
                }
            }
        }
    }

    #[test]
    fn invalid_dimensions() {
        let err = generate_grid(0, 5, 0.2, Point::ZERO, Point::ZERO, 1).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(generate_grid(5, -3, 0.2, Point::ZERO, Point::ZERO, 1).is_err());
    }

    #[test]
    fn probability_extremes() {
        let start = Point::new(1, 1);
        let goal = Point::new(3, 2);
        let none = generate_grid(6, 4, 0.0, start, goal, 11).unwrap();
        assert_eq!(none.blocked_count(), 0);

        let all = generate_grid(6, 4, 1.0, start, goal, 11).unwrap();
        assert_eq!(all.blocked_count(), 6 * 4 - 2);

        // out-of-range probabilities are the caller's problem, but must not panic
        let over = generate_grid(6, 4, 1.5, start, goal, 11).unwrap();
        assert_eq!(over.blocked_count(), 6 * 4 - 2);
        let under = generate_grid(6, 4, -0.5, start, goal, 11).unwrap();
        assert_eq!(under.blocked_count(), 0);
    }

    #[test]
    fn endpoint_outside_grid_is_skipped() {
        let g = generate_grid(3, 3, 1.0, Point::new(0, 0), Point::new(8, 8), 2).unwrap();
        assert_eq!(g.blocked_count(), 8);
        assert!(g.passable(Point::new(0, 0)));
    }

    #[test]
    fn inverted_cost_range_collapses() {
        let config = GenConfig {
            obstacle_probability: 0.0,
            min_cost: 4,
            max_cost: 2,
            ..GenConfig::default()
        };
        let mut gen_ = GridGen::new(config, rand::rng());
        let grid = gen_.generate().unwrap();
        let start = gen_.config.start;
        let goal = gen_.config.goal;
        assert!(
            grid.iter()
                .filter(|&(p, _)| p != start && p != goal)
                .all(|(_, t)| t.cost() == Some(4))
        );
    }

    #[test]
    fn random_point_in_bounds() {
        let grid = CostGrid::new(7, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            assert!(grid.in_bounds(random_point(&mut rng, &grid)));
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = GenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
