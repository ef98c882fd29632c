//! Integration tests for full games driven through the facade crate.

use tui_bowling::core::GameState;
use tui_bowling::types::{RollError, RollEvent, PIN_COUNT};

fn play(rolls: &[u8]) -> GameState {
    let mut state = GameState::new();
    for &pins in rolls {
        state.record_roll(pins).unwrap();
    }
    state
}

#[test]
fn textbook_mixed_game_scores_133() {
    // The classic worked example: spares, strikes, opens, and a tenth-frame
    // spare with its bonus roll.
    let state = play(&[1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]);

    assert!(state.game_complete());
    let scores = state.scores();
    assert_eq!(
        scores.per_frame,
        [5, 14, 29, 49, 60, 61, 77, 97, 117, 133]
    );
    assert_eq!(scores.total, 133);
}

#[test]
fn perfect_game_is_twelve_strikes_for_300() {
    let state = play(&[10; 12]);

    assert!(state.game_complete());
    assert_eq!(state.rolls_recorded(), 12);
    assert_eq!(state.scores().total, 300);
}

#[test]
fn gutter_game_ends_after_twenty_rolls_at_zero() {
    let mut state = GameState::new();
    for n in 1..=20 {
        assert!(!state.game_complete());
        state.record_roll(0).unwrap();
        assert_eq!(state.rolls_recorded(), n);
    }

    assert!(state.game_complete());
    assert_eq!(state.scores().total, 0);
}

#[test]
fn all_nines_game_totals_90() {
    let mut rolls = Vec::new();
    for _ in 0..10 {
        rolls.extend_from_slice(&[9, 0]);
    }
    let state = play(&rolls);

    assert!(state.game_complete());
    assert_eq!(state.scores().total, 90);
}

#[test]
fn all_spares_with_five_bonus_totals_150() {
    let state = play(&[5; 21]);

    assert!(state.game_complete());
    assert_eq!(state.scores().total, 150);
}

#[test]
fn cursor_walks_frames_in_order() {
    let mut state = GameState::new();

    for expected_frame in 1..=9u8 {
        assert_eq!(state.current_frame(), expected_frame);
        assert_eq!(state.current_roll(), 1);
        state.record_roll(3).unwrap();
        assert_eq!(state.current_roll(), 2);
        state.record_roll(4).unwrap();
    }

    assert_eq!(state.current_frame(), 10);
    assert!(!state.game_complete());
}

#[test]
fn outcome_events_fire_once_per_roll() {
    let mut state = GameState::new();

    assert_eq!(
        state.record_roll(10).unwrap().event,
        Some(RollEvent::Strike)
    );
    assert_eq!(state.record_roll(0).unwrap().event, Some(RollEvent::Gutter));
    assert_eq!(
        state.record_roll(10).unwrap().event,
        Some(RollEvent::Spare)
    );
    assert_eq!(state.record_roll(5).unwrap().event, None);
}

#[test]
fn invalid_roll_leaves_state_untouched() {
    let mut state = GameState::new();
    state.record_roll(6).unwrap();
    let before = state.clone();

    let err = state.record_roll(5).unwrap_err();
    assert!(matches!(err, RollError::InvalidPinCount { pins: 5, standing: 4 }));

    assert_eq!(state.rolls_recorded(), before.rolls_recorded());
    assert_eq!(state.current_roll(), before.current_roll());
    assert_eq!(state.pins_standing(), before.pins_standing());
    assert_eq!(state.scores(), before.scores());
}

#[test]
fn rolls_after_the_game_are_ignored_not_errors() {
    let mut state = play(&[10; 12]);
    assert!(state.game_complete());

    let outcome = state.record_roll(7).unwrap();
    assert!(outcome.game_complete);
    assert_eq!(outcome.event, None);
    assert_eq!(state.rolls_recorded(), 12);
    assert_eq!(state.scores().total, 300);
}

#[test]
fn restart_gives_a_fresh_game() {
    let mut state = play(&[10, 5, 3]);
    state.reset();

    assert_eq!(state.current_frame(), 1);
    assert_eq!(state.current_roll(), 1);
    assert_eq!(state.pins_standing(), PIN_COUNT);
    assert_eq!(state.rolls_recorded(), 0);
    assert!(!state.game_complete());
}

#[test]
fn mid_frame_rack_accounting_adds_up() {
    let mut state = GameState::new();

    state.record_roll(6).unwrap();
    assert_eq!(state.pins_standing(), 4);
    assert_eq!(
        state.pins_standing() as u32 + state.frame(0).pin_total(),
        PIN_COUNT as u32
    );

    // A strike resets the rack for the next frame immediately.
    state.record_roll(4).unwrap();
    state.record_roll(10).unwrap();
    assert_eq!(state.pins_standing(), PIN_COUNT);
}
