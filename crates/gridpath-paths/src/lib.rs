//! Cost-aware path search on weighted grids.
//!
//! This crate finds minimum-cost 4-directional paths with **A\***
//! ([`PathFinder::astar_path`], or the one-off [`find_path`]) steered by the
//! Manhattan heuristic. Cells are entered for the cost of the destination
//! cell, so the result is the cheapest path rather than the one with the
//! fewest steps.
//!
//! [`PathFinder`] owns and reuses its node arrays, so repeated queries incur
//! no allocations after warm-up, yet each query is a fresh search.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | passability, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |
//!
//! [`CostGrid`](gridpath_core::CostGrid) implements all three.

mod astar;
mod distance;
mod finder;
mod result;
mod traits;

pub use astar::find_path;
pub use distance::manhattan;
pub use finder::PathFinder;
pub use result::{Path, SearchResult, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
