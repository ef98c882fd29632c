//! Scoring module - cumulative ten-pin score derivation
//!
//! Pure functions over the frame sequence. Scoring has no state of its own
//! and is recomputed from scratch after every roll, so mid-game results are
//! *provisional*: a frame whose bonus rolls have not happened yet scores the
//! bonus as 0 and settles on a later recomputation. That is the intended
//! live-scoreboard behavior, not an error.

use crate::frame::Frame;
use crate::types::{FRAME_COUNT, LAST_FRAME};

/// Cumulative scores derived from a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    /// Cumulative score through each frame (inclusive), indexed 0-9.
    pub per_frame: [u32; FRAME_COUNT],
    /// Total score; equals `per_frame[9]`.
    pub total: u32,
}

/// Derive cumulative per-frame scores and the total.
///
/// Callable at any point, mid-game or finished. Idempotent: the result
/// depends only on the frames passed in.
///
/// Frame values, for frame index `i`:
/// - `i < 9` strike: 10 plus the next two rolls, looking across one or two
///   following frames
/// - `i < 9` spare: 10 plus the next roll
/// - `i < 9` open (or still in progress): sum of the frame's recorded rolls
/// - `i == 9`: sum of the tenth frame's recorded rolls, no lookahead
pub fn score_frames(frames: &[Frame; FRAME_COUNT]) -> ScoreBoard {
    let mut board = ScoreBoard::default();
    let mut total = 0u32;

    for (i, frame) in frames.iter().enumerate() {
        let value = if i < LAST_FRAME {
            if frame.is_strike() {
                10 + strike_bonus(frames, i)
            } else if frame.is_spare() {
                10 + spare_bonus(frames, i)
            } else {
                frame.pin_total()
            }
        } else {
            frame.pin_total()
        };

        total += value;
        board.per_frame[i] = total;
    }

    board.total = total;
    board
}

/// Bonus for a strike in frame `i`: the next two rolls.
///
/// Both come from frame `i+1` unless that frame is itself a strike, in which
/// case the second bonus roll is the first roll of frame `i+2`. The tenth
/// frame holds its own bonus rolls, so a strike in frame 9 (index 8) always
/// reads both rolls from it. Unrolled bonus rolls count as 0.
fn strike_bonus(frames: &[Frame; FRAME_COUNT], i: usize) -> u32 {
    let next = &frames[i + 1];
    let mut bonus = u32::from(next.first_roll().unwrap_or(0));

    if next.is_strike() && i + 2 < FRAME_COUNT {
        bonus += u32::from(frames[i + 2].first_roll().unwrap_or(0));
    } else {
        bonus += u32::from(next.roll(1).unwrap_or(0));
    }

    bonus
}

/// Bonus for a spare in frame `i`: the first roll of frame `i+1`, 0 if not
/// yet rolled.
fn spare_bonus(frames: &[Frame; FRAME_COUNT], i: usize) -> u32 {
    u32::from(frames[i + 1].first_roll().unwrap_or(0))
}
