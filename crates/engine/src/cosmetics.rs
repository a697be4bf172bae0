//! Colour and name tables.
//!
//! Purely cosmetic: nothing here feeds back into movement or collision.

use rand::Rng;
use std::fmt;

/// RGB color used for snakes and food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_rgb24(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Body colours for the player and bots.
pub const SNAKE_COLORS: [Color; 9] = [
    Color::from_rgb24(0x4bc0c0),
    Color::from_rgb24(0xe6d800),
    Color::from_rgb24(0x9b19f5),
    Color::from_rgb24(0xffa300),
    Color::from_rgb24(0xdc0ab4),
    Color::from_rgb24(0xb3d4ff),
    Color::from_rgb24(0x00bfa0),
    Color::from_rgb24(0xe60049),
    Color::from_rgb24(0x0bb4ff),
];

/// Food colours. Shares the tail of the list with [`SNAKE_COLORS`].
pub const FOOD_COLORS: [Color; 19] = [
    Color::from_rgb24(0x2662d9),
    Color::from_rgb24(0x2eb88a),
    Color::from_rgb24(0xe23670),
    Color::from_rgb24(0xe88c30),
    Color::from_rgb24(0xaf57db),
    Color::from_rgb24(0x2a9d90),
    Color::from_rgb24(0xe76e50),
    Color::from_rgb24(0x274754),
    Color::from_rgb24(0xe8c468),
    Color::from_rgb24(0xf4a462),
    Color::from_rgb24(0x4bc0c0),
    Color::from_rgb24(0xe6d800),
    Color::from_rgb24(0x9b19f5),
    Color::from_rgb24(0xffa300),
    Color::from_rgb24(0xdc0ab4),
    Color::from_rgb24(0xb3d4ff),
    Color::from_rgb24(0x00bfa0),
    Color::from_rgb24(0xe60049),
    Color::from_rgb24(0x0bb4ff),
];

/// Bot names.
pub const BOT_NAMES: &[&str] = &[
    "Slithery", "Wiggles", "Noodle", "Viper", "Cobra", "Python", "Mamba", "Fang", "Scales",
    "Hissy",
];

#[inline]
pub fn random_snake_color(rng: &mut impl Rng) -> Color {
    SNAKE_COLORS[rng.random_range(0..SNAKE_COLORS.len())]
}

#[inline]
pub fn random_food_color(rng: &mut impl Rng) -> Color {
    FOOD_COLORS[rng.random_range(0..FOOD_COLORS.len())]
}

#[inline]
pub fn random_bot_name(rng: &mut impl Rng) -> &'static str {
    BOT_NAMES[rng.random_range(0..BOT_NAMES.len())]
}
