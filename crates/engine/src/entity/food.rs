//! Food item.

use crate::cosmetics::Color;
use glam::Vec2;

/// A food item that snakes grow from.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    /// Position in arena coordinates.
    pub position: Vec2,
    /// Segments gained when eaten (at least 1).
    pub value: u32,
    pub color: Color,
}

impl FoodItem {
    pub fn new(position: Vec2, value: u32, color: Color) -> Self {
        Self {
            position,
            value: value.max(1),
            color,
        }
    }
}
