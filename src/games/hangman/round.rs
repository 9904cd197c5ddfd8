//! Per-round guessing state machine.
//!
//! A round starts `InProgress` and ends in exactly one terminal status.
//! Terminal statuses are absorbing: whichever of a completing guess, the
//! wrong-guess limit or the countdown reaches the round first decides the
//! outcome, and every later transition attempt is ignored.

use strum::{Display, EnumIs};
use tracing::{debug, info, instrument};

/// Placeholder shown for letters not yet revealed.
pub const HIDDEN: char = '_';

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs)]
pub enum RoundStatus {
    /// Guesses are still accepted.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every letter was revealed.
    #[strum(to_string = "won")]
    Won,
    /// The wrong-guess limit was reached.
    #[strum(to_string = "lost (too many wrong guesses)")]
    LostByWrongGuesses,
    /// The countdown ran out.
    #[strum(to_string = "lost (time's up)")]
    LostByTimeout,
}

impl RoundStatus {
    /// Returns true once the round can no longer change.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

/// State of one round: the hidden word, what has been revealed, and misses.
#[derive(Debug, Clone)]
pub struct RoundState {
    word: Vec<char>,
    revealed: Vec<Option<char>>,
    wrong_guesses: u32,
    status: RoundStatus,
}

impl RoundState {
    /// Starts a round for `word` with every letter hidden.
    #[instrument(skip(word))]
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_lowercase().chars().collect();
        debug_assert!(!word.is_empty(), "rounds need a non-empty word");
        debug!(length = word.len(), "Round created");
        Self {
            revealed: vec![None; word.len()],
            word,
            wrong_guesses: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Applies one guessed character and reports whether it occurs in the word.
    ///
    /// Matching is case-insensitive. Every unrevealed position holding the
    /// character is uncovered. A character already revealed still counts as a
    /// hit, so repeating a correct guess is never penalised. A character absent
    /// from the word adds one wrong guess.
    ///
    /// Once the round is terminal the guess is ignored and `false` returned.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, c: char) -> bool {
        if self.status.is_terminal() {
            debug!("Guess after round end ignored");
            return false;
        }

        let c = c.to_lowercase().next().unwrap_or(c);
        let mut hit = false;
        for (slot, &letter) in self.revealed.iter_mut().zip(&self.word) {
            if letter == c {
                hit = true;
                if slot.is_none() {
                    *slot = Some(letter);
                }
            }
        }

        if !hit {
            self.wrong_guesses += 1;
        }

        if self.revealed.iter().all(Option::is_some) {
            info!("Word completed");
            self.status = RoundStatus::Won;
        }

        debug!(hit, wrong_guesses = self.wrong_guesses, "Guess applied");
        hit
    }

    /// Ends the round because the countdown expired.
    ///
    /// Returns true if this call decided the outcome.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn time_up(&mut self) -> bool {
        self.finish(RoundStatus::LostByTimeout)
    }

    /// Ends the round because the wrong-guess limit was reached.
    ///
    /// The limit lives in the session rules, so the caller decides when to
    /// apply it. Returns true if this call decided the outcome.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn lose_by_wrong_guesses(&mut self) -> bool {
        self.finish(RoundStatus::LostByWrongGuesses)
    }

    fn finish(&mut self, status: RoundStatus) -> bool {
        if self.status.is_terminal() {
            debug!(requested = %status, "Round already over");
            return false;
        }
        info!(%status, "Round ended");
        self.status = status;
        true
    }

    /// Returns the current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns true once the round is over.
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns true if the word was completed.
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// Returns the number of guesses that matched nothing.
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Returns the per-position reveal mask.
    pub fn mask(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Renders the mask with [`HIDDEN`] in place of unrevealed letters.
    pub fn revealed(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(HIDDEN))
            .collect()
    }

    /// Returns the word once the round is over; `None` while it is running.
    pub fn answer(&self) -> Option<String> {
        self.is_finished().then(|| self.word.iter().collect())
    }
}
