//! Shared types module - data structures and constants for the bowling core
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Game Shape
//!
//! Standard ten-pin bowling:
//!
//! - **Frames**: 10 per game (indexed 0-9)
//! - **Pins**: 10 per rack
//! - **Rolls**: frames 1-9 hold at most 2 rolls; the tenth frame holds up to 3
//!
//! # Scoring Rules
//!
//! | Frame result | Value |
//! |--------------|-------|
//! | Strike | 10 + next two rolls (across one or two following frames) |
//! | Spare | 10 + next one roll |
//! | Open | Sum of the frame's own rolls |
//! | Tenth frame | Plain sum of its (up to 3) rolls, no lookahead |
//!
//! Scores are cumulative; a perfect game (12 consecutive strikes) totals 300.
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{GameAction, RollEvent, FRAME_COUNT, PIN_COUNT};
//!
//! // Parse a roll event from a string (case-insensitive)
//! let event = RollEvent::from_str("strike").unwrap();
//! assert_eq!(event, RollEvent::Strike);
//! assert_eq!(event.as_str(), "strike");
//!
//! // Shell-level action for knocking down 7 pins
//! let action = GameAction::Roll(7);
//! assert_eq!(action, GameAction::Roll(7));
//!
//! // Game shape
//! assert_eq!(PIN_COUNT, 10);
//! assert_eq!(FRAME_COUNT, 10);
//! ```

use std::fmt;

/// Pins in a full rack (10)
pub const PIN_COUNT: u8 = 10;

/// Frames per game (10)
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame (9)
pub const LAST_FRAME: usize = 9;

/// Maximum rolls in frames 1-9 (2)
pub const REGULAR_FRAME_ROLLS: usize = 2;

/// Maximum rolls in the tenth frame (3)
pub const LAST_FRAME_ROLLS: usize = 3;

/// Total score of a perfect game (12 consecutive strikes)
pub const PERFECT_SCORE: u32 = 300;

/// Notable event produced by a single roll
///
/// At most one of these applies to any roll:
/// - **Strike**: all 10 pins down on the first roll of a frame
/// - **Spare**: the remaining pins down on the second roll of a frame
/// - **Gutter**: zero pins on the first roll of a frame
///
/// A second roll that knocks down zero pins is not a gutter event; only the
/// opening miss of a frame counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollEvent {
    Strike,
    Spare,
    Gutter,
}

impl RollEvent {
    /// Parse a roll event from a string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::RollEvent;
    ///
    /// assert_eq!(RollEvent::from_str("strike"), Some(RollEvent::Strike));
    /// assert_eq!(RollEvent::from_str("Spare"), Some(RollEvent::Spare));
    /// assert_eq!(RollEvent::from_str("gutter"), Some(RollEvent::Gutter));
    /// assert_eq!(RollEvent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" => Some(RollEvent::Strike),
            "spare" => Some(RollEvent::Spare),
            "gutter" => Some(RollEvent::Gutter),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RollEvent::Strike => "strike",
            RollEvent::Spare => "spare",
            RollEvent::Gutter => "gutter",
        }
    }
}

/// Result of recording a single roll
///
/// Carries every fact the presentation layer needs to react to a roll: the
/// updated cursor, the rack state, whether the game just finished, and the
/// notable event (if any) for triggering banners or effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    /// Frame the cursor points at after the roll (1-based, 1-10).
    pub frame: u8,
    /// Roll the cursor points at after the roll (1-based, 1-3).
    pub roll: u8,
    /// Pins still standing after the roll.
    pub pins_standing: u8,
    /// Whether the game finished with this roll.
    pub game_complete: bool,
    /// Notable event of this roll, if any.
    pub event: Option<RollEvent>,
}

/// Error returned when a roll cannot be recorded
///
/// Out-of-range pin counts are rejected rather than clamped; clamping would
/// silently mask caller bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollError {
    /// The requested pin count exceeds the pins currently standing.
    InvalidPinCount { pins: u8, standing: u8 },
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollError::InvalidPinCount { pins, standing } => {
                write!(f, "cannot knock down {pins} pins with {standing} standing")
            }
        }
    }
}

impl std::error::Error for RollError {}

/// Game actions that the shell can apply to the game state
///
/// These are produced by keyboard input; a different host (test harness,
/// scripted driver) can construct them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Roll, knocking down exactly this many pins (0-10).
    Roll(u8),
    /// Roll, knocking down every pin still standing.
    RollRemaining,
    /// Discard the game and start a fresh one.
    Restart,
}
