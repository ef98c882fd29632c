//! Frame bookkeeping - one of the ten scoring units of a game.

use arrayvec::ArrayVec;

use crate::types::{LAST_FRAME_ROLLS, PIN_COUNT};

/// A single scoring unit.
///
/// Frames 1-9 hold at most 2 rolls; the tenth frame holds up to 3. The roll
/// storage is inline and bounded, so a `Frame` never allocates.
///
/// Mutation happens only through [`GameState`](crate::GameState); the public
/// surface is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rolls: ArrayVec<u8, LAST_FRAME_ROLLS>,
    is_strike: bool,
    is_spare: bool,
    is_complete: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rolls recorded into this frame so far, in order.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Pin count of the roll at `idx`, if it has been recorded.
    pub fn roll(&self, idx: usize) -> Option<u8> {
        self.rolls.get(idx).copied()
    }

    /// Pin count of the first roll, if it has been recorded.
    pub fn first_roll(&self) -> Option<u8> {
        self.roll(0)
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Sum of all recorded rolls.
    pub fn pin_total(&self) -> u32 {
        self.rolls.iter().map(|&pins| u32::from(pins)).sum()
    }

    /// All 10 pins down on the first roll.
    pub fn is_strike(&self) -> bool {
        self.is_strike
    }

    /// All 10 pins down across the first two rolls (and not a strike).
    pub fn is_spare(&self) -> bool {
        self.is_spare
    }

    /// No further rolls may be recorded into this frame.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub(crate) fn record(&mut self, pins: u8) {
        debug_assert!(pins <= PIN_COUNT);
        debug_assert!(!self.rolls.is_full());
        self.rolls.push(pins);
    }

    pub(crate) fn set_strike(&mut self) {
        self.is_strike = true;
    }

    pub(crate) fn set_spare(&mut self) {
        self.is_spare = true;
    }

    pub(crate) fn set_complete(&mut self) {
        self.is_complete = true;
    }
}
