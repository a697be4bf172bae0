//! Engine boundary: lifecycle, per-frame ticking and the render/game-over hooks.

use crate::config::Config;
use crate::error::EngineError;
use crate::input::SteeringIntent;
use crate::minimap::MinimapFrame;
use crate::session::{GameSession, SessionStatus};
use crate::simulation::{self, TickOutcome};
use tracing::{debug, error, info};

/// Read-only view handed to the render target after each executed tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub session: &'a GameSession,
    pub minimap: Option<&'a MinimapFrame>,
}

/// Host surface that draws the world.
pub trait RenderTarget {
    fn present(&mut self, view: &FrameView<'_>);
}

/// A render target that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTarget;

impl RenderTarget for NullTarget {
    fn present(&mut self, _view: &FrameView<'_>) {}
}

/// Reported to the game-over callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub ticks: u64,
}

type GameOverHook = Box<dyn FnMut(&GameOver)>;

/// Owns at most one session and drives it one frame at a time.
pub struct Engine {
    config: Config,
    session: Option<GameSession>,
    render: Option<Box<dyn RenderTarget>>,
    on_game_over: Option<GameOverHook>,
    halted: bool,
    /// Sessions built so far; offsets the configured seed.
    generation: u64,
}

impl Engine {
    /// Create an idle engine. Fails if `config` is invalid.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
            render: None,
            on_game_over: None,
            halted: false,
            generation: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the world and begin playing.
    ///
    /// Returns `false` without touching anything if a session already exists.
    pub fn start(
        &mut self,
        render: impl RenderTarget + 'static,
        on_game_over: impl FnMut(&GameOver) + 'static,
    ) -> bool {
        if self.session.is_some() {
            debug!("start ignored: a session is already running");
            return false;
        }

        self.render = Some(Box::new(render));
        self.on_game_over = Some(Box::new(on_game_over));
        self.begin_session();
        info!("Game started");
        true
    }

    /// Replace the current session with a fresh one and resume playing.
    ///
    /// Returns `false` if the engine was never started.
    pub fn reset(&mut self) -> bool {
        let Some(old) = self.session.take() else {
            debug!("reset ignored: engine not started");
            return false;
        };
        info!(
            "Resetting game (final score {}, {} ticks)",
            old.score(),
            old.tick_count
        );
        drop(old);

        self.begin_session();
        true
    }

    /// Drop the session and the host hooks.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            info!("Game stopped");
        }
        self.render = None;
        self.on_game_over = None;
        self.halted = false;
    }

    /// Run one tick with the given intent.
    pub fn frame(&mut self, intent: SteeringIntent) -> Result<TickOutcome, EngineError> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(TickOutcome::Idle);
        };

        let outcome = match simulation::tick(session, intent, &self.config) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Tick {} failed: {}", session.tick_count + 1, e);
                self.halted = true;
                return Err(e);
            }
        };

        if outcome == TickOutcome::Idle {
            return Ok(outcome);
        }

        if let TickOutcome::PlayerDied { score } = outcome {
            let report = GameOver {
                score,
                ticks: session.tick_count,
            };
            info!("Game over: score {} after {} ticks", report.score, report.ticks);
            if let Some(hook) = self.on_game_over.as_mut() {
                hook(&report);
            }
        }

        if let Some(render) = self.render.as_mut() {
            let session: &GameSession = session;
            let view = FrameView {
                session,
                minimap: session.minimap.as_ref(),
            };
            render.present(&view);
        }

        Ok(outcome)
    }

    /// Current player score, `0` without a session.
    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::NotStarted, |session| session.status)
    }

    pub fn tick_count(&self) -> u64 {
        self.session.as_ref().map_or(0, |session| session.tick_count)
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Mutable access for hosts and tests that stage a scenario.
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    fn begin_session(&mut self) {
        let mut session = GameSession::for_generation(&self.config, self.generation);
        self.generation = self.generation.wrapping_add(1);
        session.status = SessionStatus::Playing;
        self.session = Some(session);
        self.halted = false;
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("status", &self.status())
            .field("tick_count", &self.tick_count())
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine() -> Engine {
        let mut config = Config::default();
        config.session.seed = Some(99);
        Engine::new(config).unwrap()
    }

    struct Recorder(Rc<RefCell<Vec<u64>>>);

    impl RenderTarget for Recorder {
        fn present(&mut self, view: &FrameView<'_>) {
            self.0.borrow_mut().push(view.session.tick_count);
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.arena.grid_size = 0;
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn test_frame_before_start_is_idle() {
        let mut engine = engine();
        assert_eq!(engine.frame(SteeringIntent::Hold), Ok(TickOutcome::Idle));
        assert_eq!(engine.status(), SessionStatus::NotStarted);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_render_target_sees_every_tick() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut engine = engine();
        assert!(engine.start(Recorder(frames.clone()), |_| {}));

        for _ in 0..3 {
            engine.frame(SteeringIntent::Hold).unwrap();
        }
        assert_eq!(*frames.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_halts_after_fatal_tick() {
        let mut engine = engine();
        engine.start(NullTarget, |_| {});
        engine.session_mut().unwrap().player.heading = f32::INFINITY;

        assert_eq!(
            engine.frame(SteeringIntent::Hold),
            Err(EngineError::NonFiniteHead { id: 0 })
        );
        assert!(engine.is_halted());
        assert_eq!(engine.frame(SteeringIntent::Angle(0.0)), Err(EngineError::Halted));

        assert!(engine.reset());
        assert!(!engine.is_halted());
        assert!(engine.frame(SteeringIntent::Hold).is_ok());
    }

    #[test]
    fn test_stop_returns_to_not_started() {
        let mut engine = engine();
        engine.start(NullTarget, |_| {});
        engine.frame(SteeringIntent::Hold).unwrap();
        engine.stop();

        assert_eq!(engine.status(), SessionStatus::NotStarted);
        assert_eq!(engine.tick_count(), 0);
        assert!(!engine.reset());
        assert!(engine.start(NullTarget, |_| {}));
    }
}
