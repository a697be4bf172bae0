//! Snake entity: a head with a trailing chain of segments.

use crate::config::SnakeConfig;
use crate::cosmetics::Color;
use crate::error::EngineError;
use glam::Vec2;

pub type SnakeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeKind {
    Player,
    Bot,
}

/// One body unit of a snake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub position: Vec2,
    pub radius: f32,
}

/// A player- or AI-controlled snake.
#[derive(Debug, Clone)]
pub struct Snake {
    pub id: SnakeId,
    pub kind: SnakeKind,
    /// Head position in arena coordinates.
    pub head: Vec2,
    /// Heading in radians.
    pub heading: f32,
    /// Body length; equals `segments.len()` between ticks.
    pub size: u32,
    /// Body segments, nearest the head first.
    pub segments: Vec<Segment>,
    pub color: Color,
    pub name: String,
    pub score: u32,
}

/// Per-tick distance travelled at `size`.
///
/// `max(min_speed, base_speed - speed_decay * ln(size + 1))`: growing costs mobility.
#[inline]
pub fn speed_for_size(size: u32, config: &SnakeConfig) -> f32 {
    let decayed = config.base_speed - config.speed_decay * (size as f32 + 1.0).ln();
    decayed.max(config.min_speed)
}

/// Radius shared by every body segment at `size`.
#[inline]
pub fn segment_radius(size: u32, config: &SnakeConfig) -> f32 {
    (size as f32 / config.segment_size_divisor).max(config.segment_min_radius)
}

/// Collision radius of the head at `size`.
#[inline]
pub fn head_radius(size: u32, config: &SnakeConfig) -> f32 {
    (size as f32 / config.head_size_divisor).max(config.head_min_radius)
}

impl Snake {
    /// Create a snake of `size` segments laid out in a straight line behind `head`,
    /// facing along +x. Identity and heading are set with the `with_*` methods.
    pub fn new(id: SnakeId, kind: SnakeKind, head: Vec2, size: u32, config: &SnakeConfig) -> Self {
        let radius = segment_radius(size, config);
        let segments = (0..size)
            .map(|i| Segment {
                position: Vec2::new(head.x - i as f32 * config.segment_spacing, head.y),
                radius,
            })
            .collect();

        Self {
            id,
            kind,
            head,
            heading: 0.0,
            size,
            segments,
            color: Color::default(),
            name: String::new(),
            score: 0,
        }
    }

    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == SnakeKind::Player
    }

    #[inline]
    pub fn speed(&self, config: &SnakeConfig) -> f32 {
        speed_for_size(self.size, config)
    }

    #[inline]
    pub fn head_radius(&self, config: &SnakeConfig) -> f32 {
        head_radius(self.size, config)
    }

    /// Unit vector of the current heading.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Where the head would be after one step, without moving it.
    #[inline]
    pub fn next_head(&self, config: &SnakeConfig) -> Vec2 {
        self.head + self.direction() * self.speed(config)
    }

    /// Move the head one step along the heading and return where it was.
    ///
    /// A non-finite result leaves the snake untouched.
    pub fn advance(&mut self, config: &SnakeConfig) -> Result<Vec2, EngineError> {
        let next = self.next_head(config);
        if !next.is_finite() {
            return Err(EngineError::NonFiniteHead { id: self.id });
        }
        let prev = self.head;
        self.head = next;
        Ok(prev)
    }

    /// Conveyor update: every segment takes the position the element ahead of it
    /// held before this tick's move. `prev_head` is the head position before `advance`.
    pub fn propagate(&mut self, prev_head: Vec2) {
        let mut ahead = prev_head;
        for segment in &mut self.segments {
            let own = segment.position;
            segment.position = ahead;
            ahead = own;
        }
    }

    /// Append `amount` segments at the tail and rescale the whole body.
    pub fn grow(&mut self, amount: u32, config: &SnakeConfig) {
        if amount == 0 {
            return;
        }
        let tail = self.segments.last().map_or(self.head, |s| s.position);

        self.size += amount;
        self.score += amount;

        let radius = segment_radius(self.size, config);
        self.segments.reserve(amount as usize);
        for _ in 0..amount {
            self.segments.push(Segment { position: tail, radius });
        }
        for segment in &mut self.segments {
            segment.radius = radius;
        }
    }

    /// Positions of every body segment, nearest the head first.
    pub fn segment_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.segments.iter().map(|s| s.position)
    }
}
