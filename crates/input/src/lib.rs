//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_bowling_types::GameAction`] values; the
//! shell decides what each action means against the live game state.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
