//! **gridpath-core** — the grid model shared by the *gridpath* crates.
//!
//! This crate provides cell coordinates ([`Point`]), per-cell contents
//! ([`Tile`]) and the fixed-size weighted grid ([`CostGrid`]) that path
//! searches run against, together with a small text layout format for
//! building grids by hand.

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::Point;
pub use grid::{CostGrid, GridError, Tile};
pub use layout::LayoutError;
