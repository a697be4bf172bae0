//! Snake Arena - headless simulation driver.
//!
//! Runs the engine on a fixed tick interval with an autopilot steering the
//! player, and reports progress through `tracing`.

use engine::{Arena, Config, Engine, FrameView, GameOver, RenderTarget, SteeringIntent, TickOutcome};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Distance kept between autopilot waypoints and the walls.
const SAFETY_MARGIN: f32 = 200.0;
/// A waypoint counts as reached within this distance.
const WAYPOINT_REACHED: f32 = 40.0;

/// Logs a progress line every `every` presented frames.
struct LogTarget {
    every: u64,
    frames: u64,
}

impl RenderTarget for LogTarget {
    fn present(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        if self.every == 0 || self.frames % self.every != 0 {
            return;
        }
        let session = view.session;
        let longest_bot = session.bots.iter().map(|bot| bot.size).max().unwrap_or(0);
        info!(
            "Tick {}: score {}, size {}, head ({:.0}, {:.0}), longest bot {}",
            session.tick_count,
            session.score(),
            session.player.size,
            session.player.head.x,
            session.player.head.y,
            longest_bot
        );
        if let Some(minimap) = view.minimap {
            debug!(
                "Minimap viewport at ({:.1}, {:.1}), {} bots drawn",
                minimap.viewport.origin.x,
                minimap.viewport.origin.y,
                minimap.bots.len()
            );
        }
    }
}

/// Steers the player toward random waypoints well inside the arena.
struct Autopilot {
    rng: StdRng,
    safe: Arena,
    margin: Vec2,
    waypoint: Vec2,
}

impl Autopilot {
    fn new(arena: &Arena, seed: u64) -> Self {
        let margin = SAFETY_MARGIN.min(arena.width / 4.0).min(arena.height / 4.0);
        let safe = Arena::new(arena.width - 2.0 * margin, arena.height - 2.0 * margin);
        let margin = Vec2::splat(margin);
        let mut rng = StdRng::seed_from_u64(seed);
        let waypoint = safe.random_position(&mut rng) + margin;
        Self {
            rng,
            safe,
            margin,
            waypoint,
        }
    }

    fn intent(&mut self, head: Vec2) -> SteeringIntent {
        if head.distance(self.waypoint) < WAYPOINT_REACHED {
            self.waypoint = self.safe.random_position(&mut self.rng) + self.margin;
            debug!("New waypoint ({:.0}, {:.0})", self.waypoint.x, self.waypoint.y);
        }
        SteeringIntent::Pointer(self.waypoint)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Snake Arena v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!("Loaded configuration");
    info!("  Arena: {}x{}", config.arena.width, config.arena.height);
    info!("  Grid: {0}x{0}, {1} food per cell", config.arena.grid_size, config.arena.food_per_cell);
    info!("  Bots: {}", config.bot.count);

    let tick_interval_ms = config.session.tick_interval_ms.max(1);
    let max_ticks = config.session.max_ticks;
    let report_every = config.session.report_every;
    let autopilot_seed = config.session.seed.unwrap_or_else(rand::random);

    let mut engine = Engine::new(config)?;
    let game_over = Rc::new(Cell::new(None::<GameOver>));
    let sink = game_over.clone();
    engine.start(
        LogTarget {
            every: report_every,
            frames: 0,
        },
        move |report: &GameOver| sink.set(Some(*report)),
    );

    let mut autopilot = match engine.session() {
        Some(session) => Autopilot::new(&session.arena, autopilot_seed),
        None => anyhow::bail!("engine did not start a session"),
    };

    let start = Instant::now() + Duration::from_millis(tick_interval_ms);
    let mut ticker = interval_at(start, Duration::from_millis(tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted at tick {}", engine.tick_count());
                break;
            }
        }

        let intent = match engine.session() {
            Some(session) => autopilot.intent(session.player.head),
            None => break,
        };

        let tick_start = std::time::Instant::now();
        let outcome = engine.frame(intent)?;
        let tick_ms = tick_start.elapsed().as_secs_f64() * 1000.0;

        let tick_budget = tick_interval_ms as f64 * 0.9;
        if tick_ms > tick_budget {
            warn!(
                "Slow tick #{}: {:.3}ms (budget: {:.1}ms)",
                engine.tick_count(),
                tick_ms,
                tick_budget
            );
        }

        if outcome == TickOutcome::Idle || game_over.get().is_some() {
            break;
        }
        if max_ticks > 0 && engine.tick_count() >= max_ticks {
            info!("Reached {} ticks", max_ticks);
            break;
        }
    }

    match game_over.get() {
        Some(report) => info!("Final score {} after {} ticks", report.score, report.ticks),
        None => info!("Stopped with score {} after {} ticks", engine.score(), engine.tick_count()),
    }
    engine.stop();

    Ok(())
}
