//! Terminal scoreboard module.
//!
//! This is a small, game-oriented rendering layer for terminal play. It
//! renders into a simple styled screen buffer that can be flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: `GameSnapshot` in, `Screen` out
//! - Own the terminal lifecycle (raw mode, alternate screen) in one place

pub mod renderer;
pub mod scoreboard;
pub mod screen;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};
pub use scoreboard::{frame_marks, status_line, AnchorY, Mark, MarkKind, ScoreboardView, Viewport};
pub use screen::{Cell, Screen, TextStyle};
