//! Strictly Hangman - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, ConfigArgs};
use std::path::PathBuf;
use strictly_hangman::{ConsoleGuesser, Orchestrator, print_events};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => {
            initialize_tracing(log_file)?;
            run_game(config).await
        }
        Command::Rules { config } => {
            initialize_tracing(None)?;
            show_rules(config)
        }
    }
}

/// Play a full session on the console
#[instrument(skip_all)]
async fn run_game(args: ConfigArgs) -> Result<()> {
    let config = args.load()?;
    config.validate()?;
    info!(rounds = config.rounds(), "Starting Strictly Hangman");

    let words = config.word_source()?;
    let guesser = ConsoleGuesser::stdin("Player")?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(print_events(event_rx));

    let orchestrator = Orchestrator::new(
        *config.rules(),
        *config.rounds(),
        words,
        Box::new(guesser),
        event_tx,
    )?;
    let summary = orchestrator.run().await;

    // The orchestrator owned the only sender; the renderer drains and exits.
    renderer.await?;

    let summary = summary?;
    info!(final_score = summary.final_score, "Session complete");
    Ok(())
}

/// Print the effective configuration
#[instrument(skip_all)]
fn show_rules(args: ConfigArgs) -> Result<()> {
    let config = args.load()?;
    config.validate()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Logs go to stderr, or to a file, so stdout carries only the game.
fn initialize_tracing(log_file: Option<PathBuf>) -> Result<()> {
    let default = if log_file.is_some() {
        "info,strictly_hangman=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
