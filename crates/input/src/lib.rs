//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Heading`] values plus the few
//! session keys (pause, restart, quit). Direction legality is *not* decided
//! here - the core's direction queue owns that rule.

pub mod map;

pub use tui_snek_types as types;

pub use map::{heading_for_key, is_pause, is_restart, should_quit};
