//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Digits enter an exact pin count for the next roll; `x` (or space) sweeps
/// every pin still standing. Whether a count is legal for the current rack is
/// the core's decision, not the key map's.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(ch @ '0'..='9') => {
            let pins = ch as u8 - b'0';
            Some(GameAction::Roll(pins))
        }

        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char(' ') => {
            Some(GameAction::RollRemaining)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
