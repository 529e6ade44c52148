//! TUI Snek (workspace facade crate).
//!
//! This package keeps the `tui_snek::{core,input,store,term,types}` public
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_snek_core as core;
pub use tui_snek_input as input;
pub use tui_snek_store as store;
pub use tui_snek_term as term;
pub use tui_snek_types as types;
