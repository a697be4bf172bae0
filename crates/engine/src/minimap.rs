//! Minimap projection.
//!
//! Maps arena coordinates onto a square overlay of side `size`. Read-only: the
//! projector never touches game state, and headless runs can skip it.

use crate::arena::Arena;
use crate::config::MinimapConfig;
use crate::entity::Snake;
use crate::session::GameSession;
use glam::Vec2;

/// A follow camera over the arena: centred on a point, showing
/// `viewport / zoom` world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub viewport: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new(viewport: Vec2, zoom: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport,
            zoom,
        }
    }

    pub fn from_config(config: &MinimapConfig) -> Self {
        Self::new(Vec2::new(config.viewport_width, config.viewport_height), config.zoom)
    }

    /// Centre the camera on `target`.
    #[inline]
    pub fn follow(&mut self, target: Vec2) {
        self.position = target;
    }

    /// World-space size of what the camera shows.
    #[inline]
    pub fn view_size(&self) -> Vec2 {
        self.viewport / self.zoom
    }

    /// Top-left corner of the view in world coordinates.
    #[inline]
    pub fn scroll(&self) -> Vec2 {
        self.position - self.view_size() / 2.0
    }
}

/// Axis-aligned rectangle in minimap coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapRect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// A snake reduced to minimap dots.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapSnake {
    pub head: Vec2,
    pub segments: Vec<Vec2>,
}

/// Everything drawn on the minimap for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapFrame {
    pub player: MinimapSnake,
    pub bots: Vec<MinimapSnake>,
    pub viewport: MinimapRect,
}

/// Arena-to-minimap mapping.
#[derive(Debug, Clone, Copy)]
pub struct MinimapProjector {
    scale: Vec2,
}

impl MinimapProjector {
    pub fn new(arena: &Arena, size: f32) -> Self {
        Self {
            scale: Vec2::new(size / arena.width, size / arena.height),
        }
    }

    /// `(x, y) -> (x / W * size, y / H * size)`.
    #[inline]
    pub fn project(&self, pos: Vec2) -> Vec2 {
        pos * self.scale
    }

    pub fn project_snake(&self, snake: &Snake) -> MinimapSnake {
        MinimapSnake {
            head: self.project(snake.head),
            segments: snake.segment_positions().map(|p| self.project(p)).collect(),
        }
    }

    /// Outline of what `camera` currently shows.
    pub fn viewport(&self, camera: &Camera) -> MinimapRect {
        MinimapRect {
            origin: self.project(camera.scroll()),
            size: self.project(camera.view_size()),
        }
    }

    /// Project the whole session, with `camera` outlined.
    pub fn frame(&self, session: &GameSession, camera: &Camera) -> MinimapFrame {
        MinimapFrame {
            player: self.project_snake(&session.player),
            bots: session.bots.iter().map(|bot| self.project_snake(bot)).collect(),
            viewport: self.viewport(camera),
        }
    }
}
