//! One simulation tick.
//!
//! Order within a tick: player heading, player move and boundary check, player
//! body and food, then every bot (steer, move, bounce, body, food), then the
//! minimap. Constants are per tick, so speed scales with the frame rate.

use crate::ai::{bounce, steer};
use crate::collision::consume_food;
use crate::config::Config;
use crate::error::EngineError;
use crate::input::SteeringIntent;
use crate::minimap::{Camera, MinimapProjector};
use crate::session::{GameSession, SessionStatus};
use glam::Vec2;
use tracing::debug;

/// What a call to [`tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not playing; nothing moved.
    Idle,
    /// A full tick ran.
    Continued,
    /// The player left the arena this tick. The session is now finished.
    PlayerDied { score: u32 },
}

/// Advance `session` by one tick.
///
/// Every step is checked before anything is written: if any snake would move
/// to a non-finite position the tick returns an error and the session is left
/// exactly as it was.
pub fn tick(
    session: &mut GameSession,
    intent: SteeringIntent,
    config: &Config,
) -> Result<TickOutcome, EngineError> {
    if session.status != SessionStatus::Playing {
        return Ok(TickOutcome::Idle);
    }

    let heading = match intent.resolve(session.player.head) {
        Some(heading) => heading,
        None => {
            if intent != SteeringIntent::Hold {
                debug!("Ignoring unusable steering intent {:?}", intent);
            }
            session.player.heading
        }
    };
    check_steps(session, heading, config)?;

    session.player.heading = heading;
    let prev_head = session.player.advance(&config.snake)?;
    session.tick_count += 1;

    // Only the player dies at the walls; bots bounce.
    if !session.arena.contains(session.player.head) {
        session.status = SessionStatus::Finished;
        refresh_minimap(session, config);
        return Ok(TickOutcome::PlayerDied {
            score: session.player.score,
        });
    }

    session.player.propagate(prev_head);
    consume_food(&mut session.player, &mut session.food, config, &mut session.rng);

    for bot in session.bots.bots.iter_mut() {
        steer(bot, &session.food, &config.bot, &mut session.rng);
        let prev_head = bot.advance(&config.snake)?;
        bounce(bot, &session.arena);
        bot.propagate(prev_head);
        consume_food(bot, &mut session.food, config, &mut session.rng);
    }

    refresh_minimap(session, config);

    Ok(TickOutcome::Continued)
}

/// Reject the tick up front if the player, moving along `heading`, or any bot
/// would leave finite space.
///
/// Steering only turns a finite heading by a bounded amount toward finite food,
/// so a bot that passes here cannot fail its move later in the tick.
fn check_steps(session: &GameSession, heading: f32, config: &Config) -> Result<(), EngineError> {
    let player = &session.player;
    let next = player.head + Vec2::from_angle(heading) * player.speed(&config.snake);
    if !next.is_finite() {
        return Err(EngineError::NonFiniteHead { id: player.id });
    }

    match session
        .bots
        .iter()
        .find(|bot| !(bot.heading.is_finite() && bot.next_head(&config.snake).is_finite()))
    {
        Some(bot) => Err(EngineError::NonFiniteHead { id: bot.id }),
        None => Ok(()),
    }
}

fn refresh_minimap(session: &mut GameSession, config: &Config) {
    if !config.minimap.enabled {
        return;
    }
    let projector = MinimapProjector::new(&session.arena, config.minimap.size);
    let mut camera = Camera::from_config(&config.minimap);
    camera.follow(session.player.head);
    session.minimap = Some(projector.frame(session, &camera));
}
