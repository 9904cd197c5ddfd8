//! Human player typing guesses on standard input.

use super::{Guesser, parse_guess};
use anyhow::Result;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Guesser fed by lines of text.
pub struct ConsoleGuesser {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl ConsoleGuesser {
    /// Creates a guesser reading lines from `input_rx`.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }

    /// Creates a guesser reading from the process's standard input.
    ///
    /// Lines are pumped by a detached reader thread, since a blocking stdin
    /// read cannot be cancelled and must not hold up runtime shutdown.
    #[instrument(skip(name))]
    pub fn stdin(name: impl Into<String>) -> Result<Self> {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    match line {
                        Ok(line) => {
                            if input_tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "Failed to read stdin");
                            break;
                        }
                    }
                }
                debug!("Stdin reader exiting");
            })?;
        info!("Reading guesses from stdin");
        Ok(Self::new(name, input_rx))
    }
}

#[async_trait::async_trait]
impl Guesser for ConsoleGuesser {
    async fn read_guess(&mut self) -> Result<Option<char>> {
        match self.input_rx.recv().await {
            Some(line) => {
                let guess = parse_guess(&line);
                debug!(player = %self.name, ?guess, "Read input line");
                Ok(guess)
            }
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
