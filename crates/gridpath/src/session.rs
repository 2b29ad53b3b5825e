//! Headless driver for interactive use.
//!
//! A [`Session`] owns one grid and the current pair of endpoints. Callers
//! feed it cell selections and obstacle insertions (typically translated
//! from mouse clicks by a front end) and read back the latest
//! [`SearchResult`]. Every change that can affect the path re-runs the
//! search, so [`Session::result`] always matches the current grid.

use gridpath_core::{CostGrid, GridError, Point};
use gridpath_gen::{GenConfig, GridGen, random_point};
use gridpath_paths::{PathFinder, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Which endpoint the next [`Session::select`] sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    SelectStart,
    SelectGoal,
}

impl Mode {
    fn toggle(self) -> Self {
        match self {
            Self::SelectStart => Self::SelectGoal,
            Self::SelectGoal => Self::SelectStart,
        }
    }
}

/// Outcome of [`Session::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    Start(Point),
    Goal(Point),
    /// The cell was outside the grid or blocked; nothing changed.
    Ignored,
}

/// Interactive search state: one grid, its selected endpoints and the result
/// of the latest search. Random obstacles are drawn from `R`.
pub struct Session<R: Rng = StdRng> {
    grid: CostGrid,
    start: Point,
    goal: Point,
    mode: Mode,
    finder: PathFinder,
    result: SearchResult,
    rng: R,
}

impl Session<StdRng> {
    /// Generate a grid from `config` with a seeded rng and run the first
    /// search between the configured endpoints.
    pub fn new(config: GenConfig, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Like [`Session::new`] with a caller-supplied random source. The same
    /// rng later picks cells for [`add_random_obstacle`](Self::add_random_obstacle).
    pub fn with_rng(config: GenConfig, rng: R) -> Result<Self, GridError> {
        let (start, goal) = (config.start, config.goal);
        let mut mapgen = GridGen::new(config, rng);
        let grid = mapgen.generate()?;
        Ok(Self::from_grid(grid, start, goal, mapgen.rng))
    }

    /// Wrap an existing grid and run the first search.
    pub fn from_grid(grid: CostGrid, start: Point, goal: Point, rng: R) -> Self {
        let finder = PathFinder::for_grid(&grid);
        let mut session = Self {
            grid,
            start,
            goal,
            mode: Mode::default(),
            finder,
            result: SearchResult::Unreachable,
            rng,
        };
        session.search();
        session
    }

    #[inline]
    pub fn grid(&self) -> &CostGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Result of the most recent search.
    #[inline]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Set the start or goal, depending on [`mode`](Self::mode), to `p` and
    /// search again. Selections alternate between start and goal.
    ///
    /// Cells outside the grid or blocked are ignored and do not advance the
    /// mode.
    pub fn select(&mut self, p: Point) -> Selection {
        if !self.grid.passable(p) {
            log::debug!("ignoring selection of {p}");
            return Selection::Ignored;
        }
        let selection = match self.mode {
            Mode::SelectStart => {
                self.start = p;
                log::info!("start set to {p}");
                Selection::Start(p)
            }
            Mode::SelectGoal => {
                self.goal = p;
                log::info!("goal set to {p}");
                Selection::Goal(p)
            }
        };
        self.mode = self.mode.toggle();
        self.search();
        selection
    }

    /// Block `p` and search again. Blocking the current start or goal is
    /// allowed and makes the result unreachable.
    ///
    /// Out-of-bounds cells are reported through the error and otherwise
    /// ignored; the previous result stays valid.
    pub fn add_obstacle(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.set_blocked(p)?;
        self.search();
        Ok(())
    }

    /// Block a uniformly random cell, search again and return the cell.
    pub fn add_random_obstacle(&mut self) -> Point {
        let p = random_point(&mut self.rng, &self.grid);
        if self.grid.set_blocked(p).is_ok() {
            self.search();
        }
        p
    }

    /// Re-run the search on the current grid and endpoints.
    pub fn search(&mut self) -> &SearchResult {
        self.result = self.finder.astar_path(&self.grid, self.start, self.goal);
        match &self.result {
            SearchResult::Found(path) => log::debug!(
                "path {} -> {}: {} cells, cost {}",
                self.start,
                self.goal,
                path.len(),
                path.cost()
            ),
            SearchResult::Unreachable => log::info!("path not found"),
        }
        &self.result
    }
}
