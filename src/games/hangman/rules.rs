//! Scoring and limit rules for a hangman session.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Read-only rules shared by every round of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Points awarded for any won round.
    pub base_score: u32,
    /// Extra points per second left on the clock when the round is won.
    pub bonus_per_second_remaining: u32,
    /// Points deducted per wrong guess in a won round.
    pub penalty_per_wrong_guess: u32,
    /// Wrong guesses that lose the round.
    pub max_wrong_guesses: u32,
    /// Length of the round countdown.
    pub round_time_seconds: u32,
}

impl GameRules {
    /// Standard rules: 50 base, 2 per second, 5 per miss, 5 misses, 30 seconds.
    pub const STANDARD: Self = Self {
        base_score: 50,
        bonus_per_second_remaining: 2,
        penalty_per_wrong_guess: 5,
        max_wrong_guesses: 5,
        round_time_seconds: 30,
    };

    /// Rejects rules under which no round could be played.
    #[instrument]
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.round_time_seconds == 0 {
            warn!("Round time must be positive");
            return Err(RulesError::ZeroRoundTime);
        }
        if self.max_wrong_guesses == 0 {
            warn!("Wrong-guess limit must be positive");
            return Err(RulesError::ZeroMaxWrongGuesses);
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Configuration rejected before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// `round_time_seconds` was zero.
    #[display("Round time must be at least one second")]
    ZeroRoundTime,

    /// `max_wrong_guesses` was zero.
    #[display("Maximum wrong guesses must be at least one")]
    ZeroMaxWrongGuesses,

    /// The session was asked to play zero rounds.
    #[display("A game needs at least one round")]
    ZeroRounds,
}
