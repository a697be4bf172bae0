//! AI-controlled snakes.

pub mod bot_manager;
pub mod steering;

pub use bot_manager::BotManager;
pub use steering::{bounce, find_nearby_food, steer};
