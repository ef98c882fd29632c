//! Terminal bowling runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a screen-buffer renderer. The loop is purely input-driven: bowling has no
//! gravity or clock, so the scoreboard only changes on key presses (and
//! terminal resizes).

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::core::{snapshot::GameSnapshot, GameState};
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{status_line, ScoreboardView, Screen, TerminalRenderer, Viewport};
use tui_bowling::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = ScoreboardView::default();

    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);

    let mut screen = Screen::new(0, 0);
    let mut status = status_line(&snap, None);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &status, Viewport::new(w, h), &mut screen);
        term.draw(&screen)?;

        // Input: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    status = apply_action(&mut game, action);
                    game.snapshot_into(&mut snap);
                }
            }
            Event::Resize(..) => {
                // Redraw at the new size on the next loop pass.
            }
            _ => {}
        }
    }
}

/// Apply one action to the game and produce the status line to display.
fn apply_action(game: &mut GameState, action: GameAction) -> String {
    let pins = match action {
        GameAction::Roll(pins) => pins,
        GameAction::RollRemaining => game.pins_standing(),
        GameAction::Restart => {
            game.reset();
            return status_line(&game.snapshot(), None);
        }
    };

    match game.record_roll(pins) {
        Ok(outcome) => status_line(&game.snapshot(), outcome.event),
        // Rejected rolls leave the game untouched; tell the player why.
        Err(err) => err.to_string(),
    }
}
