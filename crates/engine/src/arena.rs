//! Arena bounds.

use crate::config::ArenaConfig;
use glam::Vec2;
use rand::Rng;

/// The rectangle `[0, width] x [0, height]` snakes move within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &ArenaConfig) -> Self {
        Self::new(config.width, config.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `pos` lies inside the arena, edges included.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    #[inline]
    pub fn x_out_of_bounds(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    #[inline]
    pub fn y_out_of_bounds(&self, y: f32) -> bool {
        y < 0.0 || y > self.height
    }

    /// Get a random position within the arena.
    #[inline]
    pub fn random_position(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_contains_includes_edges() {
        let arena = Arena::new(100.0, 50.0);
        assert!(arena.contains(Vec2::new(0.0, 0.0)));
        assert!(arena.contains(Vec2::new(100.0, 50.0)));
        assert!(!arena.contains(Vec2::new(100.001, 10.0)));
        assert!(!arena.contains(Vec2::new(10.0, -0.001)));
    }

    #[test]
    fn test_random_position_inside() {
        let arena = Arena::new(300.0, 200.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(arena.contains(arena.random_position(&mut rng)));
        }
    }
}
