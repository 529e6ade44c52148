//! Terminal snake runner (default binary).
//!
//! Owns the things the core deliberately does not: the tick cadence, key
//! event wiring, pause, and the leaderboard. The core only ever sees
//! `push_direction` and `tick`.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::warn;

use tui_snek::core::{GameConfig, GameSession, Phase, TickOutcome};
use tui_snek::input::{heading_for_key, is_pause, is_restart, should_quit};
use tui_snek::store::{Leaderboard, ScoreEntry};
use tui_snek::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_snek::types::DEFAULT_TICK_MS;

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let mut session = GameSession::new(config, seed_from_clock());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut leaderboard = Leaderboard::open(leaderboard_path());

    let tick_interval = Duration::from_millis(DEFAULT_TICK_MS);
    // Tier is ticks-per-second; the leaderboard groups scores by it.
    let tier = (1000 / DEFAULT_TICK_MS) as u32;

    let mut last_tick = Instant::now();
    let mut paused = false;
    let mut score_recorded = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudView {
            score: session.score(),
            speed: 1000.0 / DEFAULT_TICK_MS as f32,
            phase: session.phase(),
            paused,
        };
        view.render_into(session.board(), config.grid, hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if is_pause(key) {
                        if session.is_active() {
                            paused = !paused;
                        }
                    } else if is_restart(key) {
                        session.start();
                        paused = false;
                        score_recorded = false;
                    } else if let Some(heading) = heading_for_key(key) {
                        // A direction press while idle both starts the game
                        // and queues the first turn.
                        if session.phase() == Phase::Idle {
                            session.start();
                            score_recorded = false;
                        }
                        if session.is_active() {
                            session.push_direction(heading);
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();

            if session.is_active() && !paused {
                if let TickOutcome::Died = session.tick()? {
                    if !score_recorded {
                        record_score(&mut leaderboard, tier, session.score());
                        score_recorded = true;
                    }
                }
            }
        }
    }
}

fn record_score(leaderboard: &mut Leaderboard, tier: u32, score: u32) {
    let name = std::env::var("SNEK_PLAYER").unwrap_or_else(|_| "anon".to_string());
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    leaderboard.submit(
        tier,
        ScoreEntry {
            name,
            score,
            timestamp_ms,
        },
    );
    if let Err(err) = leaderboard.save() {
        warn!(%err, "could not save leaderboard");
    }
}

fn leaderboard_path() -> String {
    std::env::var("SNEK_LEADERBOARD").unwrap_or_else(|_| "snek-leaderboard.json".to_string())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

/// Log to a file when `SNEK_LOG` is set (e.g. `SNEK_LOG=debug`); the
/// terminal itself belongs to the renderer.
fn init_logging() {
    let Ok(filter) = std::env::var("SNEK_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create("snek.log") else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}
