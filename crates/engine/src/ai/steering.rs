//! Bot steering: wander, food seeking and edge bounce.

use crate::arena::Arena;
use crate::config::BotConfig;
use crate::entity::Snake;
use crate::spatial::FoodGrid;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Wrap an angle into `[-PI, PI)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Turn `heading` toward `target` by at most `max_step` radians, the short way round.
#[inline]
pub fn rotate_toward(heading: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - heading);
    heading + diff.signum() * diff.abs().min(max_step)
}

/// Food to chase from `pos`, looking only in the grid cell `pos` falls in.
///
/// Items inside `ignore_radius` are skipped, the first item inside `snap_radius`
/// wins outright, otherwise the closest item within `search_radius`.
pub fn find_nearby_food(grid: &FoodGrid, pos: Vec2, config: &BotConfig) -> Option<Vec2> {
    let mut closest = None;
    let mut closest_distance = config.search_radius;

    for item in grid.candidates_near(pos) {
        let distance = pos.distance(item.position);
        if distance < config.ignore_radius {
            continue;
        }
        if distance < config.snap_radius {
            return Some(item.position);
        }
        if distance < closest_distance {
            closest_distance = distance;
            closest = Some(item.position);
        }
    }

    closest
}

/// Update a bot's heading for this tick: random wander, then a clamped turn
/// toward nearby food.
pub fn steer(bot: &mut Snake, grid: &FoodGrid, config: &BotConfig, rng: &mut impl Rng) {
    if rng.random_bool(config.wander_chance) {
        bot.heading += (rng.random::<f32>() - 0.5) * config.wander_spread;
    }

    if let Some(target) = find_nearby_food(grid, bot.head, config) {
        let to_target = target - bot.head;
        let bearing = to_target.y.atan2(to_target.x);
        bot.heading = rotate_toward(bot.heading, bearing, config.max_turn);
    }
}

/// Reflect a bot off the arena walls and clamp it back inside.
///
/// Leaving through a side wall mirrors the heading horizontally (`PI - heading`),
/// through the top or bottom vertically (`-heading`). Returns whether it bounced.
pub fn bounce(bot: &mut Snake, arena: &Arena) -> bool {
    let mut bounced = false;
    if arena.x_out_of_bounds(bot.head.x) {
        bot.heading = PI - bot.heading;
        bot.head.x = bot.head.x.clamp(0.0, arena.width);
        bounced = true;
    }
    if arena.y_out_of_bounds(bot.head.y) {
        bot.heading = -bot.heading;
        bot.head.y = bot.head.y.clamp(0.0, arena.height);
        bounced = true;
    }
    bounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArenaConfig, FoodConfig, SnakeConfig};
    use crate::entity::SnakeKind;
    use crate::spatial::CellIndex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bot_at(head: Vec2, heading: f32) -> Snake {
        Snake::new(3, SnakeKind::Bot, head, 20, &SnakeConfig::default())
            .with_heading(heading)
            .with_name("Bot")
    }

    fn single_food_grid(cell: CellIndex, pos: Vec2) -> FoodGrid {
        let arena = Arena::new(3000.0, 3000.0);
        let mut config = ArenaConfig::default();
        config.food_per_cell = 1;
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = FoodGrid::populated(&arena, &config, &FoodConfig::default(), &mut rng);
        grid.cell_mut(cell)[0].position = pos;
        grid
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_toward_is_clamped() {
        assert!((rotate_toward(0.0, 1.0, 0.1) - 0.1).abs() < 1e-6);
        assert!((rotate_toward(0.0, -1.0, 0.1) + 0.1).abs() < 1e-6);
        assert!((rotate_toward(0.0, 0.05, 0.1) - 0.05).abs() < 1e-6);
        // Short way round across the +/-PI seam.
        assert!((rotate_toward(3.0, -3.0, 0.1) - 3.1).abs() < 1e-5);
    }

    #[test]
    fn test_find_nearby_food_radii() {
        let config = BotConfig::default();
        let head = Vec2::new(1100.0, 1100.0);
        let cell = CellIndex::new(4, 4);

        let grid = single_food_grid(cell, head + Vec2::new(2.0, 0.0));
        assert_eq!(find_nearby_food(&grid, head, &config), None);

        let target = head + Vec2::new(10.0, 0.0);
        let grid = single_food_grid(cell, target);
        assert_eq!(find_nearby_food(&grid, head, &config), Some(target));

        let target = head + Vec2::new(120.0, 0.0);
        let grid = single_food_grid(cell, target);
        assert_eq!(find_nearby_food(&grid, head, &config), Some(target));

        let grid = single_food_grid(cell, Vec2::new(1249.0, 1249.0));
        let far_head = Vec2::new(1001.0, 1001.0);
        assert_eq!(find_nearby_food(&grid, far_head, &config), None);
    }

    #[test]
    fn test_find_nearby_food_prefers_closest() {
        let config = BotConfig::default();
        let arena = Arena::new(3000.0, 3000.0);
        let mut arena_config = ArenaConfig::default();
        arena_config.food_per_cell = 2;
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid =
            FoodGrid::populated(&arena, &arena_config, &FoodConfig::default(), &mut rng);
        let head = Vec2::new(1100.0, 1100.0);
        let cell = grid.lookup_cell(head);
        grid.cell_mut(cell)[0].position = head + Vec2::new(90.0, 0.0);
        grid.cell_mut(cell)[1].position = head + Vec2::new(0.0, 40.0);

        assert_eq!(
            find_nearby_food(&grid, head, &config),
            Some(head + Vec2::new(0.0, 40.0))
        );
    }

    #[test]
    fn test_steer_turns_toward_food_by_max_turn() {
        let mut config = BotConfig::default();
        config.wander_chance = 0.0;
        let head = Vec2::new(1100.0, 1100.0);
        let grid = single_food_grid(CellIndex::new(4, 4), head + Vec2::new(0.0, 100.0));
        let mut bot = bot_at(head, 0.0);
        let mut rng = StdRng::seed_from_u64(1);

        steer(&mut bot, &grid, &config, &mut rng);
        assert!((bot.heading - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_left_wall() {
        let arena = Arena::new(3000.0, 3000.0);
        let heading = 2.5;
        let mut bot = bot_at(Vec2::new(-3.0, 1500.0), heading);

        assert!(bounce(&mut bot, &arena));
        assert_eq!(bot.heading, PI - heading);
        assert_eq!(bot.head.x, 0.0);
        assert_eq!(bot.head.y, 1500.0);
    }

    #[test]
    fn test_bounce_corner_reflects_both_axes() {
        let arena = Arena::new(3000.0, 3000.0);
        let heading = 0.7;
        let mut bot = bot_at(Vec2::new(3004.0, 3001.0), heading);

        assert!(bounce(&mut bot, &arena));
        assert_eq!(bot.heading, -(PI - heading));
        assert_eq!(bot.head, Vec2::new(3000.0, 3000.0));
    }

    #[test]
    fn test_no_bounce_inside() {
        let arena = Arena::new(3000.0, 3000.0);
        let mut bot = bot_at(Vec2::new(10.0, 10.0), 1.0);
        assert!(!bounce(&mut bot, &arena));
        assert_eq!(bot.heading, 1.0);
    }
}
