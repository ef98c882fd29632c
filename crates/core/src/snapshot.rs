//! Copyable display snapshots of the game state.
//!
//! The render side works from a [`GameSnapshot`] rather than borrowing
//! `GameState` directly, so a host can take one under a lock and draw at its
//! leisure. Snapshots are plain `Copy` data and can be reused across frames
//! via [`GameState::snapshot_into`](crate::GameState::snapshot_into).

use crate::types::{FRAME_COUNT, LAST_FRAME_ROLLS, PIN_COUNT};

/// One frame as the scoreboard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Recorded rolls; only the first `roll_count` entries are meaningful.
    pub rolls: [u8; LAST_FRAME_ROLLS],
    pub roll_count: u8,
    pub is_strike: bool,
    pub is_spare: bool,
    pub is_complete: bool,
    /// Cumulative score through this frame.
    pub score: u32,
}

impl FrameSnapshot {
    /// Pin count of the roll at `idx`, if it has been recorded.
    pub fn roll(&self, idx: usize) -> Option<u8> {
        if idx < usize::from(self.roll_count) {
            Some(self.rolls[idx])
        } else {
            None
        }
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            rolls: [0; LAST_FRAME_ROLLS],
            roll_count: 0,
            is_strike: false,
            is_spare: false,
            is_complete: false,
            score: 0,
        }
    }
}

/// The whole game as the scoreboard sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// Frame cursor, 1-based.
    pub current_frame: u8,
    /// Roll cursor, 1-based.
    pub current_roll: u8,
    pub pins_standing: u8,
    pub game_complete: bool,
    pub total: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Index of the frame to highlight, `None` once the game is over.
    pub fn active_frame(&self) -> Option<usize> {
        if self.game_complete {
            None
        } else {
            Some(usize::from(self.current_frame) - 1)
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            frames: [FrameSnapshot::default(); FRAME_COUNT],
            current_frame: 1,
            current_roll: 1,
            pins_standing: PIN_COUNT,
            game_complete: false,
            total: 0,
        }
    }
}
