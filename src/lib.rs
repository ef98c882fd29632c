//! TUI Bowling (workspace facade crate).
//!
//! This package keeps a single `tui_bowling::{core,term,input,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
