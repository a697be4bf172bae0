//! Game session state.

use crate::ai::BotManager;
use crate::arena::Arena;
use crate::config::Config;
use crate::cosmetics::random_snake_color;
use crate::entity::{Snake, SnakeKind};
use crate::minimap::MinimapFrame;
use crate::spatial::FoodGrid;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// ID of the player's snake.
pub const PLAYER_ID: u32 = 0;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    NotStarted,
    Playing,
    /// The player left the arena. Terminal until the session is replaced.
    Finished,
}

/// Everything one game owns: snakes, food and the RNG driving them.
#[derive(Debug)]
pub struct GameSession {
    pub status: SessionStatus,
    pub arena: Arena,
    pub player: Snake,
    pub bots: BotManager,
    pub food: FoodGrid,
    /// Ticks executed while playing.
    pub tick_count: u64,
    /// Latest minimap projection, if the minimap is enabled.
    pub minimap: Option<MinimapFrame>,
    seed: u64,
    pub(crate) rng: StdRng,
}

impl GameSession {
    /// Build a fresh session: player at the centre, bots and food at random.
    pub fn new(config: &Config) -> Self {
        Self::for_generation(config, 0)
    }

    /// Build the `generation`-th session of an engine. With a configured seed,
    /// session `n` is seeded with `seed + n`, so restarts differ but a whole run
    /// replays identically.
    pub fn for_generation(config: &Config, generation: u64) -> Self {
        let seed = match config.session.seed {
            Some(base) => base.wrapping_add(generation),
            None => rand::random(),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let arena = Arena::from_config(&config.arena);

        let player = Snake::new(
            PLAYER_ID,
            SnakeKind::Player,
            arena.center(),
            config.snake.initial_size,
            &config.snake,
        )
        .with_color(random_snake_color(&mut rng))
        .with_name(config.snake.player_name.clone());
        let food = FoodGrid::populated(&arena, &config.arena, &config.food, &mut rng);
        let bots = BotManager::spawn_roster(config, &arena, &mut rng);

        info!(
            "Session initialized (seed {}): {} food in {}x{} cells, {} bots",
            seed,
            food.total_food(),
            food.grid_size(),
            food.grid_size(),
            bots.len()
        );

        Self {
            status: SessionStatus::NotStarted,
            arena,
            player,
            bots,
            food,
            tick_count: 0,
            minimap: None,
            seed,
            rng,
        }
    }

    /// Player score: total food value eaten this session.
    #[inline]
    pub fn score(&self) -> u32 {
        self.player.score
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status == SessionStatus::Playing
    }

    /// The player followed by every bot.
    pub fn snakes(&self) -> impl Iterator<Item = &Snake> + '_ {
        std::iter::once(&self.player).chain(self.bots.iter())
    }

    /// Every snake has exactly `size` segments and every cell its full food count.
    pub fn check_invariants(&self) -> bool {
        let bodies = self
            .snakes()
            .all(|snake| snake.segments.len() == snake.size as usize);
        let food = self.food.total_food()
            == self.food.grid_size() * self.food.grid_size() * self.food.food_per_cell();
        bodies && food
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn seeded(seed: u64) -> Config {
        let mut config = Config::default();
        config.session.seed = Some(seed);
        config
    }

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::new(&seeded(1));

        assert_eq!(session.status, SessionStatus::NotStarted);
        assert_eq!(session.player.head, Vec2::new(1500.0, 1500.0));
        assert_eq!(session.player.heading, 0.0);
        assert_eq!(session.player.size, 20);
        assert_eq!(session.score(), 0);
        assert_eq!(session.bots.len(), 10);
        assert_eq!(session.food.total_food(), 1440);
        assert!(session.check_invariants());
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameSession::new(&seeded(42));
        let b = GameSession::new(&seeded(42));
        let heads_a: Vec<Vec2> = a.bots.iter().map(|bot| bot.head).collect();
        let heads_b: Vec<Vec2> = b.bots.iter().map(|bot| bot.head).collect();
        assert_eq!(heads_a, heads_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_generations_differ() {
        let config = seeded(42);
        let first = GameSession::for_generation(&config, 0);
        let second = GameSession::for_generation(&config, 1);
        assert_eq!(second.seed(), 43);

        let heads_a: Vec<Vec2> = first.bots.iter().map(|bot| bot.head).collect();
        let heads_b: Vec<Vec2> = second.bots.iter().map(|bot| bot.head).collect();
        assert_ne!(heads_a, heads_b);
    }
}
