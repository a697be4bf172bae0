//! Heading intent from the host's input collaborator.

use glam::Vec2;

/// Where the player wants to go this tick. Only the direction matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SteeringIntent {
    /// Keep the current heading.
    #[default]
    Hold,
    /// Absolute heading in radians.
    Angle(f32),
    /// A pointer position in arena coordinates; steer from the head toward it.
    Pointer(Vec2),
    /// A joystick deflection; its angle is used, its magnitude ignored.
    Joystick(Vec2),
}

impl SteeringIntent {
    /// Heading in radians for a snake whose head is at `head`.
    ///
    /// `None` means hold the previous heading: no intent, a non-finite value, or
    /// a zero-length direction.
    pub fn resolve(&self, head: Vec2) -> Option<f32> {
        let heading = match *self {
            SteeringIntent::Hold => return None,
            SteeringIntent::Angle(angle) => angle,
            SteeringIntent::Pointer(target) => direction_angle(target - head)?,
            SteeringIntent::Joystick(vector) => direction_angle(vector)?,
        };
        heading.is_finite().then_some(heading)
    }
}

fn direction_angle(v: Vec2) -> Option<f32> {
    if !v.is_finite() || v.length_squared() == 0.0 {
        return None;
    }
    Some(v.y.atan2(v.x))
}
