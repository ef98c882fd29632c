//! Scoring properties exercised through the facade crate.

use tui_bowling::core::{score_frames, GameState};

fn play(rolls: &[u8]) -> GameState {
    let mut state = GameState::new();
    for &pins in rolls {
        state.record_roll(pins).unwrap();
    }
    state
}

#[test]
fn spare_bonus_is_the_single_next_roll() {
    let state = play(&[6, 4, 3]);
    let scores = state.scores();

    assert_eq!(scores.per_frame[0], 13);
    assert_eq!(scores.total, 16);
}

#[test]
fn ninth_frame_strike_collects_both_tenth_frame_rolls() {
    let mut rolls = vec![0u8; 16];
    rolls.extend_from_slice(&[10, 10, 4, 0]);
    let state = play(&rolls);

    assert!(state.game_complete());
    let scores = state.scores();
    assert_eq!(scores.per_frame[8], 24);
    assert_eq!(scores.total, 38);
}

#[test]
fn provisional_scores_settle_as_bonus_rolls_land() {
    let mut state = GameState::new();

    state.record_roll(10).unwrap();
    assert_eq!(state.scores().per_frame[0], 10);

    state.record_roll(6).unwrap();
    assert_eq!(state.scores().per_frame[0], 16);

    state.record_roll(2).unwrap();
    assert_eq!(state.scores().per_frame[0], 18);

    // Later rolls never change a settled frame again.
    state.record_roll(10).unwrap();
    assert_eq!(state.scores().per_frame[0], 18);
}

#[test]
fn scoring_is_idempotent_between_rolls() {
    let state = play(&[10, 10, 6, 4, 8]);

    let first = score_frames(state.frames());
    let second = score_frames(state.frames());
    let third = state.scores();

    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn per_frame_scores_are_monotone_cumulative() {
    let state = play(&[1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]);
    let scores = state.scores();

    let mut prev = 0;
    for &score in &scores.per_frame {
        assert!(score >= prev);
        prev = score;
    }
    assert_eq!(scores.total, scores.per_frame[9]);
}

#[test]
fn tenth_frame_rolls_count_exactly_once() {
    // A tenth-frame turkey is worth 30, with no lookahead beyond the frame.
    let mut rolls = vec![0u8; 18];
    rolls.extend_from_slice(&[10, 10, 10]);
    let state = play(&rolls);

    let scores = state.scores();
    assert_eq!(scores.total, 30);
    assert_eq!(scores.per_frame[9] - scores.per_frame[8], 30);
}
