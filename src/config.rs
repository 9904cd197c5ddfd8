//! Session configuration loaded from TOML.

use crate::games::hangman::{GameRules, RulesError, WordSource, WordSourceError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Words used when no list is configured.
pub const DEFAULT_WORDS: [&str; 7] = [
    "akbar",
    "abgher",
    "ali",
    "reza",
    "hasan",
    "sajad",
    "amirhossein",
];

/// Everything a session needs before the first round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct GameConfig {
    /// Number of rounds to play.
    #[serde(default = "default_rounds")]
    rounds: u32,

    /// Seed for word selection; random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Candidate words.
    #[serde(default = "default_words")]
    words: Vec<String>,

    /// Scoring and limits.
    #[serde(default)]
    rules: GameRules,
}

#[instrument]
fn default_rounds() -> u32 {
    3
}

#[instrument]
fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            seed: None,
            words: default_words(),
            rules: GameRules::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rounds = config.rounds, words = config.words.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Checks that a game could start under this configuration.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()?;
        if self.rounds == 0 {
            return Err(RulesError::ZeroRounds.into());
        }
        self.word_source()?;
        Ok(())
    }

    /// Builds the word source, seeded when a seed is configured.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn word_source(&self) -> Result<WordSource, WordSourceError> {
        match self.seed {
            Some(seed) => WordSource::seeded(&self.words, seed),
            None => WordSource::new(&self.words),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RulesError> for ConfigError {
    #[track_caller]
    fn from(err: RulesError) -> Self {
        Self::new(format!("Invalid rules: {}", err))
    }
}

impl From<WordSourceError> for ConfigError {
    #[track_caller]
    fn from(err: WordSourceError) -> Self {
        Self::new(format!("Invalid word list: {}", err))
    }
}
