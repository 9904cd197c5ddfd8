//! Command-line interface for strictly_hangman.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_hangman::{ConfigError, GameConfig};
use tracing::{info, instrument};

/// Strictly Hangman - guess the word before the clock runs out
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Timed word-guessing game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the console
    Play {
        /// Session settings
        #[command(flatten)]
        config: ConfigArgs,

        /// Write logs to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Rules {
        /// Session settings
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Comma-separated word list
    #[arg(short, long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Seed for word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds per round
    #[arg(short, long)]
    pub time: Option<u32>,

    /// Wrong guesses allowed per round
    #[arg(short, long)]
    pub max_wrong: Option<u32>,
}

impl ConfigArgs {
    /// Loads the config file (or defaults) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => {
                info!("No config file given, using defaults");
                GameConfig::default()
            }
        };

        if let Some(rounds) = self.rounds {
            config = config.with_rounds(rounds);
        }
        if let Some(words) = &self.words {
            config = config.with_words(words.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        let mut rules = *config.rules();
        if let Some(time) = self.time {
            rules.round_time_seconds = time;
        }
        if let Some(max_wrong) = self.max_wrong {
            rules.max_wrong_guesses = max_wrong;
        }

        Ok(config.with_rules(rules))
    }
}
