//! Tests for the round state machine.

use strictly_hangman::{RoundState, RoundStatus};

#[test]
fn test_covering_every_letter_wins() {
    for word in ["cat", "banana", "mississippi", "a", "amirhossein"] {
        let mut round = RoundState::new(word);
        for c in word.chars() {
            round.guess(c);
        }
        assert_eq!(round.status(), RoundStatus::Won, "word {word}");
        assert_eq!(round.revealed(), word);
        assert_eq!(round.wrong_guesses(), 0);
    }
}

#[test]
fn test_miss_adds_exactly_one_wrong_guess() {
    let mut round = RoundState::new("reza");
    round.guess('r');
    let before = round.revealed();

    assert!(!round.guess('q'));
    assert_eq!(round.wrong_guesses(), 1);
    assert_eq!(round.revealed(), before);
    assert_eq!(round.status(), RoundStatus::InProgress);
}

#[test]
fn test_time_up_twice_is_a_no_op() {
    let mut round = RoundState::new("cat");
    round.guess('c');

    assert!(round.time_up());
    let mask = round.revealed();
    assert!(!round.time_up());

    assert_eq!(round.status(), RoundStatus::LostByTimeout);
    assert_eq!(round.revealed(), mask);
}

#[test]
fn test_guess_after_timeout_is_ignored() {
    let mut round = RoundState::new("cat");
    round.time_up();

    assert!(!round.guess('c'));
    assert!(!round.guess('z'));
    assert_eq!(round.revealed(), "___");
    assert_eq!(round.wrong_guesses(), 0);
    assert_eq!(round.status(), RoundStatus::LostByTimeout);
}

#[test]
fn test_completed_word_beats_late_timeout() {
    let mut round = RoundState::new("ali");
    for c in ['a', 'l', 'i'] {
        round.guess(c);
    }

    assert!(!round.time_up());
    assert!(!round.lose_by_wrong_guesses());
    assert_eq!(round.status(), RoundStatus::Won);
}

#[test]
fn test_guess_after_win_is_ignored() {
    let mut round = RoundState::new("reza");
    for c in ['r', 'e', 'z', 'a'] {
        round.guess(c);
    }
    let mask = round.mask().to_vec();

    assert!(!round.guess('q'));
    assert!(!round.guess('r'));
    assert_eq!(round.wrong_guesses(), 0);
    assert_eq!(round.mask(), mask.as_slice());
    assert_eq!(round.status(), RoundStatus::Won);
}

#[test]
fn test_wrong_guess_limit_is_applied_by_caller() {
    let mut round = RoundState::new("cat");
    for c in ['x', 'y', 'z', 'q', 'w', 'v'] {
        round.guess(c);
    }
    // The round itself does not know the limit.
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.wrong_guesses(), 6);

    assert!(round.lose_by_wrong_guesses());
    assert_eq!(round.status(), RoundStatus::LostByWrongGuesses);
    assert!(!round.time_up());
    assert_eq!(round.status(), RoundStatus::LostByWrongGuesses);
}

#[test]
fn test_answer_hidden_until_round_ends() {
    let mut round = RoundState::new("hasan");
    round.guess('a');
    assert_eq!(round.answer(), None);

    round.time_up();
    assert_eq!(round.answer().as_deref(), Some("hasan"));
}

#[test]
fn test_mask_tracks_positions() {
    let mut round = RoundState::new("sajad");
    round.guess('a');
    assert_eq!(
        round.mask(),
        [None, Some('a'), None, Some('a'), None].as_slice()
    );
}
