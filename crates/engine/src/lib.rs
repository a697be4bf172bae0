//! Snake arena simulation engine.
//!
//! A player snake and a roster of bots roam a rectangular arena, eating food
//! kept in a uniform grid. The host drives the game one [`Engine::frame`] at a
//! time and draws whatever the [`RenderTarget`] receives.

pub mod ai;
pub mod arena;
pub mod collision;
pub mod config;
pub mod cosmetics;
pub mod engine;
pub mod entity;
pub mod error;
pub mod input;
pub mod minimap;
pub mod session;
pub mod simulation;
pub mod spatial;

pub use arena::Arena;
pub use config::Config;
pub use engine::{Engine, FrameView, GameOver, NullTarget, RenderTarget};
pub use error::EngineError;
pub use input::SteeringIntent;
pub use minimap::{Camera, MinimapFrame, MinimapProjector};
pub use session::{GameSession, SessionStatus, PLAYER_ID};
pub use simulation::TickOutcome;
