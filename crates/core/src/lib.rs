//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the bowling rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same roll sequence always produces the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`frame`]: a single scoring unit with bounded inline roll storage
//! - [`game_state`]: the frame/roll cursor state machine around `record_roll`
//! - [`scoring`]: pure cumulative score derivation with strike/spare lookahead
//! - [`snapshot`]: copyable display views for the render side
//!
//! # Game Rules
//!
//! Standard ten-pin scoring:
//!
//! - **Strike**: frame ends at one roll; worth 10 plus the next two rolls
//! - **Spare**: frame ends at two rolls; worth 10 plus the next roll
//! - **Open frame**: worth the sum of its own rolls
//! - **Tenth frame**: up to three rolls; a strike or spare grants the bonus
//!   roll(s) in place, and the frame is worth the plain sum of its rolls
//!
//! Mid-game scores are provisional: a strike or spare whose bonus rolls have
//! not happened yet counts them as 0 until a later recomputation.
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::GameState;
//! use tui_bowling_types::RollEvent;
//!
//! let mut game = GameState::new();
//!
//! // Frame 1: a spare.
//! game.record_roll(6).unwrap();
//! let outcome = game.record_roll(4).unwrap();
//! assert_eq!(outcome.event, Some(RollEvent::Spare));
//!
//! // Frame 2: the spare bonus lands with the next roll.
//! game.record_roll(3).unwrap();
//! assert_eq!(game.scores().per_frame[0], 13);
//! ```

pub mod frame;
pub mod game_state;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game_state::GameState;
pub use scoring::{score_frames, ScoreBoard};
pub use snapshot::{FrameSnapshot, GameSnapshot};
