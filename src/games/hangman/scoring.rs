//! Round scoring and the session score tally.

use super::rules::GameRules;
use tracing::{debug, instrument};

/// Scores one round.
///
/// A lost round scores nothing. A won round scores
/// `base + bonus * seconds_remaining - penalty * wrong_guesses`, floored at 0.
#[instrument]
pub fn score(rules: &GameRules, won: bool, seconds_remaining: u32, wrong_guesses: u32) -> u32 {
    if !won {
        return 0;
    }

    let earned = rules
        .base_score
        .saturating_add(rules.bonus_per_second_remaining.saturating_mul(seconds_remaining));
    let penalty = rules.penalty_per_wrong_guess.saturating_mul(wrong_guesses);
    let total = earned.saturating_sub(penalty);
    debug!(earned, penalty, total, "Round scored");
    total
}

/// Running total across a session. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    total: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a round score and returns the new total.
    #[instrument(skip(self), fields(total = self.total))]
    pub fn add(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.total
    }

    /// Returns the total so far.
    pub fn total(&self) -> u32 {
        self.total
    }
}
