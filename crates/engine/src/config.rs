//! Engine configuration.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// File the headless driver reads its configuration from.
pub const CONFIG_FILE: &str = "snake-arena.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub snake: SnakeConfig,
    #[serde(default)]
    pub food: FoodConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub minimap: MinimapConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration from `snake-arena.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config: Self = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        let arena = &self.arena;
        if !(arena.width.is_finite() && arena.width > 0.0) {
            return Err(EngineError::InvalidConfig("arena.width must be positive"));
        }
        if !(arena.height.is_finite() && arena.height > 0.0) {
            return Err(EngineError::InvalidConfig("arena.height must be positive"));
        }
        if arena.grid_size == 0 {
            return Err(EngineError::InvalidConfig("arena.grid_size must be at least 1"));
        }

        let snake = &self.snake;
        if snake.initial_size == 0 {
            return Err(EngineError::InvalidConfig("snake.initial_size must be at least 1"));
        }
        if !(snake.min_speed > 0.0 && snake.min_speed <= snake.base_speed) {
            return Err(EngineError::InvalidConfig(
                "snake.min_speed must be positive and not exceed snake.base_speed",
            ));
        }
        if !(snake.speed_decay.is_finite() && snake.speed_decay >= 0.0) {
            return Err(EngineError::InvalidConfig("snake.speed_decay must be non-negative"));
        }
        if !(snake.segment_size_divisor > 0.0 && snake.head_size_divisor > 0.0) {
            return Err(EngineError::InvalidConfig("snake size divisors must be positive"));
        }
        if !snake.segment_spacing.is_finite() {
            return Err(EngineError::InvalidConfig("snake.segment_spacing must be finite"));
        }

        let food = &self.food;
        if food.min_value == 0 || food.min_value > food.max_value {
            return Err(EngineError::InvalidConfig(
                "food.min_value must be at least 1 and not exceed food.max_value",
            ));
        }
        if !(food.radius.is_finite() && food.radius >= 0.0) {
            return Err(EngineError::InvalidConfig("food.radius must be non-negative"));
        }

        let bot = &self.bot;
        if !(0.0..=1.0).contains(&bot.wander_chance) {
            return Err(EngineError::InvalidConfig("bot.wander_chance must be within [0, 1]"));
        }
        if !(bot.max_turn.is_finite() && bot.max_turn >= 0.0) {
            return Err(EngineError::InvalidConfig("bot.max_turn must be non-negative"));
        }
        if !(bot.ignore_radius <= bot.snap_radius && bot.snap_radius <= bot.search_radius) {
            return Err(EngineError::InvalidConfig(
                "bot radii must satisfy ignore_radius <= snap_radius <= search_radius",
            ));
        }

        let minimap = &self.minimap;
        if !(minimap.size > 0.0 && minimap.zoom > 0.0) {
            return Err(EngineError::InvalidConfig("minimap.size and minimap.zoom must be positive"));
        }

        Ok(())
    }
}

/// Arena dimensions and food grid layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArenaConfig {
    #[serde(default = "default_arena_size")]
    pub width: f32,
    #[serde(default = "default_arena_size")]
    pub height: f32,
    /// Cells per side of the food grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Food items kept alive in every grid cell.
    #[serde(default = "default_food_per_cell")]
    pub food_per_cell: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: default_arena_size(),
            height: default_arena_size(),
            grid_size: default_grid_size(),
            food_per_cell: default_food_per_cell(),
        }
    }
}

fn default_arena_size() -> f32 {
    3000.0
}
fn default_grid_size() -> usize {
    12
}
fn default_food_per_cell() -> usize {
    10
}

/// Snake body, speed and sizing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnakeConfig {
    #[serde(default = "default_initial_size")]
    pub initial_size: u32,
    #[serde(default = "default_base_speed")]
    pub base_speed: f32,
    #[serde(default = "default_min_speed")]
    pub min_speed: f32,
    /// Speed lost per unit of `ln(size + 1)`.
    #[serde(default = "default_speed_decay")]
    pub speed_decay: f32,
    #[serde(default = "default_segment_min_radius")]
    pub segment_min_radius: f32,
    #[serde(default = "default_segment_size_divisor")]
    pub segment_size_divisor: f32,
    #[serde(default = "default_head_min_radius")]
    pub head_min_radius: f32,
    #[serde(default = "default_head_size_divisor")]
    pub head_size_divisor: f32,
    /// Distance between segments when a snake is first laid out.
    #[serde(default = "default_segment_spacing")]
    pub segment_spacing: f32,
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            initial_size: default_initial_size(),
            base_speed: default_base_speed(),
            min_speed: default_min_speed(),
            speed_decay: default_speed_decay(),
            segment_min_radius: default_segment_min_radius(),
            segment_size_divisor: default_segment_size_divisor(),
            head_min_radius: default_head_min_radius(),
            head_size_divisor: default_head_size_divisor(),
            segment_spacing: default_segment_spacing(),
            player_name: default_player_name(),
        }
    }
}

fn default_initial_size() -> u32 {
    20
}
fn default_base_speed() -> f32 {
    5.0
}
fn default_min_speed() -> f32 {
    2.0
}
fn default_speed_decay() -> f32 {
    0.25
}
fn default_segment_min_radius() -> f32 {
    5.0
}
fn default_segment_size_divisor() -> f32 {
    15.0
}
fn default_head_min_radius() -> f32 {
    8.0
}
fn default_head_size_divisor() -> f32 {
    10.0
}
fn default_segment_spacing() -> f32 {
    10.0
}
fn default_player_name() -> String {
    "Player".to_string()
}

/// Food configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoodConfig {
    /// Collision radius of a food item.
    #[serde(default = "default_food_radius")]
    pub radius: f32,
    #[serde(default = "default_food_min_value")]
    pub min_value: u32,
    #[serde(default = "default_food_max_value")]
    pub max_value: u32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            radius: default_food_radius(),
            min_value: default_food_min_value(),
            max_value: default_food_max_value(),
        }
    }
}

fn default_food_radius() -> f32 {
    5.0
}
fn default_food_min_value() -> u32 {
    1
}
fn default_food_max_value() -> u32 {
    2
}

/// AI snake roster and steering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Number of bots spawned per session.
    #[serde(default = "default_bot_count")]
    pub count: usize,
    /// Bots start with `initial_size + [0, extra_size)` segments.
    #[serde(default = "default_bot_extra_size")]
    pub extra_size: u32,
    /// Per-tick probability of a random heading nudge.
    #[serde(default = "default_wander_chance")]
    pub wander_chance: f64,
    /// Width in radians of the random nudge (centred on zero).
    #[serde(default = "default_wander_spread")]
    pub wander_spread: f32,
    #[serde(default = "default_search_radius")]
    pub search_radius: f32,
    /// Food closer than this is skipped.
    #[serde(default = "default_ignore_radius")]
    pub ignore_radius: f32,
    /// Food closer than this is taken without looking further.
    #[serde(default = "default_snap_radius")]
    pub snap_radius: f32,
    /// Largest heading correction per tick, in radians.
    #[serde(default = "default_max_turn")]
    pub max_turn: f32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            count: default_bot_count(),
            extra_size: default_bot_extra_size(),
            wander_chance: default_wander_chance(),
            wander_spread: default_wander_spread(),
            search_radius: default_search_radius(),
            ignore_radius: default_ignore_radius(),
            snap_radius: default_snap_radius(),
            max_turn: default_max_turn(),
        }
    }
}

fn default_bot_count() -> usize {
    10
}
fn default_bot_extra_size() -> u32 {
    30
}
fn default_wander_chance() -> f64 {
    0.02
}
fn default_wander_spread() -> f32 {
    1.0
}
fn default_search_radius() -> f32 {
    200.0
}
fn default_ignore_radius() -> f32 {
    4.0
}
fn default_snap_radius() -> f32 {
    12.0
}
fn default_max_turn() -> f32 {
    0.1
}

/// Minimap overlay and the follow camera it outlines.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MinimapConfig {
    #[serde(default = "default_minimap_enabled")]
    pub enabled: bool,
    /// Side length of the square overlay.
    #[serde(default = "default_minimap_size")]
    pub size: f32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            enabled: default_minimap_enabled(),
            size: default_minimap_size(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            zoom: default_zoom(),
        }
    }
}

fn default_minimap_enabled() -> bool {
    true
}
fn default_minimap_size() -> f32 {
    100.0
}
fn default_viewport_width() -> f32 {
    800.0
}
fn default_viewport_height() -> f32 {
    600.0
}
fn default_zoom() -> f32 {
    1.0
}

/// Session seeding and the headless tick driver.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Base RNG seed; the n-th session of a run uses `seed + n`. A fresh seed
    /// is drawn per session when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Stop the driver after this many ticks (0 = run until game over).
    #[serde(default)]
    pub max_ticks: u64,
    /// Log a progress line every this many ticks.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval_ms: default_tick_interval(),
            max_ticks: 0,
            report_every: default_report_every(),
        }
    }
}

fn default_tick_interval() -> u64 {
    16
}
fn default_report_every() -> u64 {
    300
}
