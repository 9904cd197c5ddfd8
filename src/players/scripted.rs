//! Pre-recorded guesses, for tests and demos.

use super::{Guesser, parse_guess};
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Guesser replaying a fixed script of input lines.
///
/// Each line may be delayed to simulate thinking time. Once the script runs
/// out the guesser goes quiet and never answers again, like a player who has
/// walked away.
pub struct ScriptedGuesser {
    name: String,
    steps: VecDeque<(Duration, String)>,
    ready_at: Option<Instant>,
}

impl ScriptedGuesser {
    /// Replays `lines` immediately, one per read.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::timed(lines.into_iter().map(|line| (Duration::ZERO, line)))
    }

    /// Replays each line after waiting its delay.
    pub fn timed<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = (Duration, S)>,
        S: Into<String>,
    {
        Self {
            name: "Script".to_string(),
            steps: steps
                .into_iter()
                .map(|(delay, line)| (delay, line.into()))
                .collect(),
            ready_at: None,
        }
    }
}

#[async_trait::async_trait]
impl Guesser for ScriptedGuesser {
    async fn read_guess(&mut self) -> Result<Option<char>> {
        let Some(delay) = self.steps.front().map(|(delay, _)| *delay) else {
            debug!(player = %self.name, "Script exhausted");
            return std::future::pending().await;
        };

        // The deadline survives a cancelled read, so the delay is not restarted.
        let ready_at = *self.ready_at.get_or_insert_with(|| Instant::now() + delay);
        tokio::time::sleep_until(ready_at).await;

        self.ready_at = None;
        let line = self.steps.pop_front().map(|(_, line)| line).unwrap_or_default();
        debug!(player = %self.name, line = %line, "Scripted input");
        Ok(parse_guess(&line))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
