//! Game entities.
//!
//! Food items living in the spatial grid, and snakes (player and bots).

mod food;
mod snake;

pub use food::FoodItem;
pub use snake::{Segment, Snake, SnakeId, SnakeKind, head_radius, segment_radius, speed_for_size};
