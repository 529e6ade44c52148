//! Terminal rendering for the snake board.
//!
//! - [`fb`]: styled character framebuffer, pure data
//! - [`game_view`]: Board -> framebuffer projection (pure, unit-testable)
//! - [`renderer`]: raw-mode terminal session and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snek_core as core;
pub use tui_snek_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::TerminalRenderer;
