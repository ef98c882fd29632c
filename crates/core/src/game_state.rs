//! Game state module - frame/roll cursor state machine
//!
//! [`GameState`] owns the ten-frame sequence, the frame/roll cursor, the
//! pins-standing counter, and the game-complete flag. [`record_roll`] is the
//! sole mutator; everything else is a read-only view. Scoring lives in
//! [`scoring`](crate::scoring) and is derived on demand.
//!
//! [`record_roll`]: GameState::record_roll

use crate::frame::Frame;
use crate::scoring::{score_frames, ScoreBoard};
use crate::snapshot::GameSnapshot;
use crate::types::{RollError, RollEvent, RollOutcome, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    frames: [Frame; FRAME_COUNT],
    /// Frame cursor, 1-based (1-10).
    current_frame: u8,
    /// Roll cursor within the current frame, 1-based (3 only in the tenth frame).
    current_roll: u8,
    /// Pins not yet knocked down in the current roll sequence.
    pins_standing: u8,
    game_complete: bool,
}

impl GameState {
    /// Create a fresh game: ten empty frames, cursor at frame 1 roll 1, a
    /// full rack.
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|_| Frame::new()),
            current_frame: 1,
            current_roll: 1,
            pins_standing: PIN_COUNT,
            game_complete: false,
        }
    }

    /// Discard the game wholesale and start a fresh one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Frame the cursor points at, 1-based. Stays at 10 once the game ends.
    pub fn current_frame(&self) -> u8 {
        self.current_frame.min(FRAME_COUNT as u8)
    }

    /// Roll the cursor points at within the current frame, 1-based.
    pub fn current_roll(&self) -> u8 {
        self.current_roll
    }

    /// Pins still standing for the next roll.
    pub fn pins_standing(&self) -> u8 {
        self.pins_standing
    }

    pub fn game_complete(&self) -> bool {
        self.game_complete
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn frame(&self, idx: usize) -> &Frame {
        &self.frames[idx]
    }

    /// Total number of rolls recorded so far, across all frames.
    pub fn rolls_recorded(&self) -> usize {
        self.frames.iter().map(Frame::roll_count).sum()
    }

    /// Cumulative per-frame scores and the total, derived from the frames.
    pub fn scores(&self) -> ScoreBoard {
        score_frames(&self.frames)
    }

    /// Record one roll.
    ///
    /// The sole mutator. Either the whole roll commits (appended to the
    /// current frame, rack decremented, cursor advanced) or nothing changes:
    ///
    /// - After the game is complete, the call is a no-op and returns the
    ///   current state with no event. Extra input after the game ends is
    ///   ignored, not an error.
    /// - A pin count above the standing count is rejected with
    ///   [`RollError::InvalidPinCount`].
    pub fn record_roll(&mut self, pins: u8) -> Result<RollOutcome, RollError> {
        if self.game_complete {
            return Ok(self.outcome(None));
        }
        if pins > self.pins_standing {
            return Err(RollError::InvalidPinCount {
                pins,
                standing: self.pins_standing,
            });
        }

        let frame_index = usize::from(self.current_frame - 1);
        let event = self.classify(frame_index, pins);

        self.frames[frame_index].record(pins);
        self.pins_standing -= pins;

        if frame_index == LAST_FRAME {
            self.advance_last_frame(pins);
        } else {
            self.advance_regular_frame(pins);
        }

        Ok(self.outcome(event))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill a reusable snapshot with the current state, scores included.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let scores = self.scores();

        for (i, frame) in self.frames.iter().enumerate() {
            let slot = &mut out.frames[i];
            slot.rolls = [0; 3];
            for (j, &pins) in frame.rolls().iter().enumerate() {
                slot.rolls[j] = pins;
            }
            slot.roll_count = frame.roll_count() as u8;
            slot.is_strike = frame.is_strike();
            slot.is_spare = frame.is_spare();
            slot.is_complete = frame.is_complete();
            slot.score = scores.per_frame[i];
        }

        out.current_frame = self.current_frame();
        out.current_roll = self.current_roll;
        out.pins_standing = self.pins_standing;
        out.game_complete = self.game_complete;
        out.total = scores.total;
    }

    /// Classify the notable event of this roll, before it is applied.
    ///
    /// Strike and gutter apply to the first roll of any frame; spare applies
    /// to a second roll that clears the rack (never after a tenth-frame
    /// strike, whose second roll shoots a fresh rack).
    fn classify(&self, frame_index: usize, pins: u8) -> Option<RollEvent> {
        let frame = &self.frames[frame_index];

        if self.current_roll == 1 {
            if pins == PIN_COUNT {
                return Some(RollEvent::Strike);
            }
            if pins == 0 {
                return Some(RollEvent::Gutter);
            }
            return None;
        }

        if self.current_roll == 2
            && !frame.is_strike()
            && frame.first_roll().unwrap_or(0) + pins == PIN_COUNT
        {
            return Some(RollEvent::Spare);
        }

        None
    }

    /// Frames 1-9: two rolls at most, strike ends the frame at one.
    fn advance_regular_frame(&mut self, pins: u8) {
        let frame = &mut self.frames[usize::from(self.current_frame - 1)];

        if self.current_roll == 1 {
            if pins == PIN_COUNT {
                frame.set_strike();
                frame.set_complete();
                self.next_frame();
            } else {
                self.current_roll = 2;
            }
        } else {
            if frame.first_roll().unwrap_or(0) + pins == PIN_COUNT {
                frame.set_spare();
            }
            frame.set_complete();
            self.next_frame();
        }
    }

    /// The tenth frame: up to three rolls, a third only when a strike or
    /// spare grants a bonus roll. Whenever a further roll is owed after the
    /// rack was cleared, a fresh rack is set up.
    fn advance_last_frame(&mut self, pins: u8) {
        let frame = &mut self.frames[LAST_FRAME];

        match self.current_roll {
            1 => {
                if pins == PIN_COUNT {
                    frame.set_strike();
                    self.pins_standing = PIN_COUNT;
                }
                self.current_roll = 2;
            }
            2 => {
                if frame.is_strike() || frame.first_roll().unwrap_or(0) + pins == PIN_COUNT {
                    if !frame.is_strike() {
                        frame.set_spare();
                    }
                    self.pins_standing = PIN_COUNT;
                    self.current_roll = 3;
                } else {
                    frame.set_complete();
                    self.game_complete = true;
                }
            }
            _ => {
                frame.set_complete();
                self.game_complete = true;
            }
        }
    }

    /// Advance to the next frame with a fresh rack.
    fn next_frame(&mut self) {
        self.current_frame += 1;
        self.current_roll = 1;
        self.pins_standing = PIN_COUNT;

        // The regular path tops out at frame 10; this only fires if the
        // cursor ever drifts past it.
        if usize::from(self.current_frame) > FRAME_COUNT {
            self.game_complete = true;
        }
    }

    fn outcome(&self, event: Option<RollEvent>) -> RollOutcome {
        RollOutcome {
            frame: self.current_frame(),
            roll: self.current_roll,
            pins_standing: self.pins_standing,
            game_complete: self.game_complete,
            event,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
