//! Game session - lifecycle and scoring around the engine.
//!
//! The session owns the board, the direction queue, and the score, and
//! exposes the small surface a host UI drives: `start`, `tick`, and
//! `push_direction`. The engine stays oblivious to lifecycle; the session is
//! where "don't advance a finished game" is enforced.

use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::direction::DirectionQueue;
use crate::engine::Engine;
use crate::rng::{SimpleRng, UniformRng};
use crate::types::{Heading, POINTS_PER_APPLE};

/// Session lifecycle: `Idle -> Active -> Dead -> Idle`.
///
/// `start` enters `Active` from anywhere; `reset` returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Dead,
}

/// Contract violations by the session's caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("tick on a session that is {0:?}, not Active")]
    NotActive(Phase),
}

/// What one tick meant at the session level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Plain movement.
    Moved,
    /// The snake ate; `points` were added to the score.
    Ate { points: u32 },
    /// Lethal tick; the session is now `Dead`.
    Died,
}

/// A single game from start to game-over.
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    engine: Engine<R>,
    directions: DirectionQueue,
    board: Option<Board>,
    phase: Phase,
    score: u32,
}

impl GameSession<SimpleRng> {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: UniformRng> GameSession<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let default_heading = config.default_heading;
        Self {
            engine: Engine::with_rng(config, rng),
            directions: DirectionQueue::new(default_heading),
            board: None,
            phase: Phase::Idle,
            score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The board as of the last tick, if a game is (or was) in progress.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// (Re)start: reset the direction queue and score, install a fresh
    /// initial board, and go `Active`. Valid from any phase.
    pub fn start(&mut self) {
        self.directions.clear();
        self.score = 0;
        self.board = Some(self.engine.initial_board());
        self.phase = Phase::Active;
        debug!(phase = ?self.phase, "session started");
    }

    /// Return to `Idle`, dropping the finished board.
    pub fn reset(&mut self) {
        self.directions.clear();
        self.score = 0;
        self.board = None;
        self.phase = Phase::Idle;
    }

    /// Forward a direction key to the queue. Illegal headings are dropped
    /// silently by design; the return value only reports acceptance.
    pub fn push_direction(&mut self, heading: Heading) -> bool {
        self.directions.push(heading)
    }

    /// Advance the simulation one tick.
    ///
    /// Ticking a session that is not `Active` is a caller bug and fails
    /// loudly rather than producing a stale board.
    pub fn tick(&mut self) -> Result<TickOutcome, SessionError> {
        if self.phase != Phase::Active {
            return Err(SessionError::NotActive(self.phase));
        }

        let board = self
            .board
            .as_ref()
            .expect("active session always has a board");
        let result = self.engine.advance(board, &mut self.directions);
        let (has_eaten, dead) = (result.has_eaten, result.dead);
        self.board = Some(result.board);

        if dead {
            self.phase = Phase::Dead;
            debug!(score = self.score, "session over");
            return Ok(TickOutcome::Died);
        }

        if has_eaten {
            self.score += POINTS_PER_APPLE;
            debug!(score = self.score, "apple eaten");
            Ok(TickOutcome::Ate {
                points: POINTS_PER_APPLE,
            })
        } else {
            Ok(TickOutcome::Moved)
        }
    }
}
