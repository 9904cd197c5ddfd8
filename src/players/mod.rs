//! Guess sources and input normalization.

mod console;
mod scripted;

pub use console::ConsoleGuesser;
pub use scripted::ScriptedGuesser;

use anyhow::Result;

/// A source of guesses for the orchestrator.
///
/// The orchestrator races `read_guess` against the round countdown and drops
/// the future when the countdown wins, so implementations must be
/// cancel-safe: a dropped read must not lose input.
#[async_trait::async_trait]
pub trait Guesser: Send {
    /// Waits for the next guess.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only input, and an error
    /// once no more input can arrive.
    async fn read_guess(&mut self) -> Result<Option<char>>;

    /// Returns the guesser's display name.
    fn name(&self) -> &str;
}

/// Normalizes one line of input into a guess: the first non-whitespace
/// character, lowercased.
pub fn parse_guess(line: &str) -> Option<char> {
    line.trim()
        .chars()
        .next()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess_takes_first_letter() {
        assert_eq!(parse_guess("abc"), Some('a'));
        assert_eq!(parse_guess("  Q \n"), Some('q'));
    }

    #[test]
    fn test_parse_guess_ignores_blank_lines() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess(" \t\n"), None);
    }
}
