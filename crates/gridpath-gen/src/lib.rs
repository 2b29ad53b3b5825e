//! Random grid generation for gridpath: obstacles and movement costs drawn
//! from an injected random source.

pub mod gridgen;

pub use gridgen::{GenConfig, GridGen, generate_grid, random_point};
