//! Spatial indexing utilities.
//!
//! A uniform grid over the arena, bucketing food by cell.

mod food_grid;

pub use food_grid::{CellIndex, FoodGrid};
