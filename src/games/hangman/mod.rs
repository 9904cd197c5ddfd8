//! Hangman: guess a hidden word one letter at a time.

mod round;
mod rules;
mod scoring;
mod words;

pub use round::{HIDDEN, RoundState, RoundStatus};
pub use rules::{GameRules, RulesError};
pub use scoring::{ScoreTally, score};
pub use words::{WordSource, WordSourceError};
