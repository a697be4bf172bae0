//! Food collision and growth.
//!
//! A snake only tests the food in the grid cell its head is in. Food just
//! across a cell edge is invisible until the head crosses into that cell.

use crate::config::Config;
use crate::entity::Snake;
use crate::spatial::{CellIndex, FoodGrid};
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Result of checking a head against one food item.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Combined radius of head and food.
    pub r: f32,
    /// Distance between centres.
    pub d: f32,
}

impl Contact {
    #[inline]
    pub fn is_colliding(&self) -> bool {
        self.d < self.r
    }
}

#[inline]
pub fn check_contact(head: Vec2, head_radius: f32, food: Vec2, food_radius: f32) -> Contact {
    Contact {
        r: head_radius + food_radius,
        d: head.distance(food),
    }
}

/// A food item the head is touching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodHit {
    pub cell: CellIndex,
    pub index: usize,
    pub value: u32,
}

/// Every food item in the head's cell that the head overlaps.
pub fn find_food_hits(head: Vec2, head_radius: f32, food_radius: f32, grid: &FoodGrid) -> Vec<FoodHit> {
    let cell = grid.lookup_cell(head);
    grid.cell(cell)
        .iter()
        .enumerate()
        .filter(|(_, item)| check_contact(head, head_radius, item.position, food_radius).is_colliding())
        .map(|(index, item)| FoodHit {
            cell,
            index,
            value: item.value,
        })
        .collect()
}

/// Eat everything the snake's head touches: respawn each item in place and grow
/// by its value. Returns the total growth applied.
pub fn consume_food(snake: &mut Snake, grid: &mut FoodGrid, config: &Config, rng: &mut impl Rng) -> u32 {
    let hits = find_food_hits(snake.head, snake.head_radius(&config.snake), config.food.radius, grid);
    let mut grown = 0;
    for hit in hits {
        grid.respawn(hit.cell, hit.index, rng);
        snake.grow(hit.value, &config.snake);
        grown += hit.value;
    }
    if grown > 0 {
        debug!("Snake {} ate {} food (size {})", snake.id, grown, snake.size);
    }
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::entity::SnakeKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(food_per_cell: usize) -> (Config, FoodGrid, StdRng) {
        let mut config = Config::default();
        config.arena.food_per_cell = food_per_cell;
        let mut rng = StdRng::seed_from_u64(11);
        let arena = Arena::from_config(&config.arena);
        let grid = FoodGrid::populated(&arena, &config.arena, &config.food, &mut rng);
        (config, grid, rng)
    }

    fn snake_at(head: Vec2, config: &Config) -> Snake {
        Snake::new(0, SnakeKind::Player, head, 20, &config.snake).with_name("P")
    }

    #[test]
    fn test_contact_check() {
        let contact = check_contact(Vec2::ZERO, 8.0, Vec2::new(10.0, 0.0), 5.0);
        assert!(contact.is_colliding());
        assert_eq!(contact.d, 10.0);

        let contact = check_contact(Vec2::ZERO, 8.0, Vec2::new(13.0, 0.0), 5.0);
        assert!(!contact.is_colliding());
    }

    #[test]
    fn test_eat_value_two_food() {
        let (config, mut grid, mut rng) = setup(1);
        let head = Vec2::new(1100.0, 1100.0);
        let mut snake = snake_at(head, &config);
        let cell = grid.lookup_cell(head);
        let food_pos = head + Vec2::new(3.0, 4.0);
        {
            let item = &mut grid.cell_mut(cell)[0];
            item.position = food_pos;
            item.value = 2;
        }

        let grown = consume_food(&mut snake, &mut grid, &config, &mut rng);

        assert_eq!(grown, 2);
        assert_eq!(snake.size, 22);
        assert_eq!(snake.score, 2);
        assert_eq!(snake.segments.len(), 22);
        let respawned = grid.cell(cell)[0].position;
        assert_ne!(respawned, food_pos);
        assert_eq!(grid.lookup_cell(respawned), cell);
        assert_eq!(grid.cell_population(cell), 1);
    }

    #[test]
    fn test_multiple_hits_accumulate() {
        let (config, mut grid, mut rng) = setup(3);
        let head = Vec2::new(1600.0, 400.0);
        let mut snake = snake_at(head, &config);
        let cell = grid.lookup_cell(head);
        for (i, item) in grid.cell_mut(cell).iter_mut().enumerate() {
            item.position = head + Vec2::new(i as f32, 0.0);
            item.value = 1;
        }

        assert_eq!(consume_food(&mut snake, &mut grid, &config, &mut rng), 3);
        assert_eq!(snake.size, 23);
        assert_eq!(snake.segments.len(), 23);
    }

    #[test]
    fn test_food_across_cell_edge_is_not_seen() {
        let (config, mut grid, mut rng) = setup(1);
        // Cells are 250 wide; the head sits on the left edge of column 4.
        let head = Vec2::new(1000.0, 1100.0);
        let mut snake = snake_at(head, &config);
        assert_eq!(grid.lookup_cell(head), CellIndex::new(4, 4));

        let neighbour = CellIndex::new(3, 4);
        grid.cell_mut(neighbour)[0].position = Vec2::new(999.0, 1100.0);
        let own = CellIndex::new(4, 4);
        grid.cell_mut(own)[0].position = Vec2::new(1200.0, 1200.0);

        assert_eq!(consume_food(&mut snake, &mut grid, &config, &mut rng), 0);
        assert_eq!(snake.size, 20);
    }
}
