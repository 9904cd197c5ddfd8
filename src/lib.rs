//! Strictly Hangman library - a timed word-guessing game
//!
//! A player guesses the letters of a hidden word against a per-round
//! countdown and a wrong-guess limit, scoring across several rounds.
//!
//! # Architecture
//!
//! - **Games**: the hangman round state machine, rules, scoring and word source
//! - **Timer**: a cancellable per-second countdown on its own task
//! - **Orchestrator**: races guesses against the countdown, round by round
//! - **Players**: guess sources (console input, scripted input)
//! - **Render**: turns game events into console text
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman::{GameRules, Orchestrator, ScriptedGuesser, WordSource};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (event_tx, _event_rx) = tokio::sync::mpsc::unbounded_channel();
//! let words = WordSource::seeded(["cat"], 1)?;
//! let guesser = ScriptedGuesser::new(["c", "a", "t"]);
//!
//! let orchestrator = Orchestrator::new(GameRules::STANDARD, 1, words, Box::new(guesser), event_tx)?;
//! let summary = orchestrator.run().await?;
//! assert_eq!(summary.final_score, 110);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod render;
mod timer;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_WORDS, GameConfig};

// Crate-level exports - Game types (hangman)
pub use games::hangman::{
    GameRules, HIDDEN, RoundState, RoundStatus, RulesError, ScoreTally, WordSource,
    WordSourceError, score,
};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, GameSummary, Orchestrator, RoundSummary};

// Crate-level exports - Guess sources
pub use players::{ConsoleGuesser, Guesser, ScriptedGuesser, parse_guess};

// Crate-level exports - Console output
pub use render::{print_events, render_event};

// Crate-level exports - Countdown
pub use timer::{RoundTimer, TICK, TimerHandle};
