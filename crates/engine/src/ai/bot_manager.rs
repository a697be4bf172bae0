use crate::arena::Arena;
use crate::config::Config;
use crate::cosmetics::{random_bot_name, random_snake_color};
use crate::entity::{Snake, SnakeId, SnakeKind};
use rand::Rng;
use std::f32::consts::TAU;

/// First ID handed to a bot; the player is always `0`.
const FIRST_BOT_ID: SnakeId = 1;

/// Bot roster.
#[derive(Debug)]
pub struct BotManager {
    /// Active bots.
    pub bots: Vec<Snake>,
    /// Next bot ID counter.
    next_id: SnakeId,
}

impl BotManager {
    /// Create an empty bot manager.
    pub fn new() -> Self {
        Self {
            bots: Vec::new(),
            next_id: FIRST_BOT_ID,
        }
    }

    /// Create a manager holding `config.bot.count` freshly spawned bots.
    pub fn spawn_roster(config: &Config, arena: &Arena, rng: &mut impl Rng) -> Self {
        let mut manager = Self::new();
        manager.bots.reserve(config.bot.count);
        for _ in 0..config.bot.count {
            manager.add_bot(config, arena, rng);
        }
        manager
    }

    /// Spawn a bot at a random position with a random heading, size and identity.
    pub fn add_bot(&mut self, config: &Config, arena: &Arena, rng: &mut impl Rng) -> SnakeId {
        let id = self.next_id;
        self.next_id += 1;

        let extra = if config.bot.extra_size > 0 {
            rng.random_range(0..config.bot.extra_size)
        } else {
            0
        };
        let head = arena.random_position(rng);
        let heading = rng.random_range(0.0..TAU);
        let color = random_snake_color(rng);
        let name = random_bot_name(rng);

        let mut bot = Snake::new(id, SnakeKind::Bot, head, config.snake.initial_size + extra, &config.snake)
            .with_heading(heading)
            .with_color(color)
            .with_name(name);
        bot.score = extra;
        self.bots.push(bot);
        id
    }

    /// Get a bot by ID.
    pub fn get_bot(&self, id: SnakeId) -> Option<&Snake> {
        self.bots.iter().find(|b| b.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snake> {
        self.bots.iter()
    }
}

impl Default for BotManager {
    fn default() -> Self {
        Self::new()
    }
}
