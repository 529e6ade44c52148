//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole simulation: board state, the per-tick
//! transition, direction queueing, and the session lifecycle. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: apple placement goes through an injectable RNG, so a
//!   seed (or a scripted sequence) reproduces a game exactly
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the same core drives the TUI runner or a headless harness
//!
//! # Module Structure
//!
//! - [`board`]: snake segments, apple, and the bounded dropping ring
//! - [`config`]: pixel-to-grid derivation and game parameters
//! - [`direction`]: the heading queue between key events and ticks
//! - [`engine`]: the per-tick `advance` transition
//! - [`rng`]: pluggable uniform sampling (LCG default)
//! - [`session`]: lifecycle state machine and scoring
//!
//! # Game Rules
//!
//! - The grid is **toroidal**: running off an edge wraps to the opposite side
//! - One heading change is committed per tick, never a 180° reversal
//! - Eating an apple grows the snake by one and respawns the apple on a free
//!   cell; the eaten-marker rides out to the tail and leaves a **dropping**
//! - At most ten droppings persist (oldest evicted); hitting one is as
//!   lethal as hitting the body
//!
//! # Example
//!
//! ```
//! use tui_snek_core::{GameConfig, GameSession, TickOutcome};
//! use tui_snek_core::types::Heading;
//!
//! let mut session = GameSession::new(GameConfig::default(), 12345);
//! session.start();
//!
//! session.push_direction(Heading::Up);
//! let outcome = session.tick().unwrap();
//! assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate { .. }));
//! ```

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod rng;
pub mod session;

pub use tui_snek_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, DroppingRing, Segment};
pub use config::{ConfigError, GameConfig, GridConfig};
pub use direction::DirectionQueue;
pub use engine::{Engine, TickResult};
pub use rng::{SequenceRng, SimpleRng, UniformRng};
pub use session::{GameSession, Phase, SessionError, TickOutcome};
