//! Plain-text console output for game events.

use crate::games::hangman::RoundStatus;
use crate::orchestrator::GameEvent;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Formats an event for the console.
///
/// Returns `None` for events the console does not show. Text without a
/// trailing newline is a prompt.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::RoundStarted { round, revealed, seconds } => Some(format!(
            "\n--- Round {round} ---\nWord: {revealed} ({seconds}s on the clock)\n"
        )),
        GameEvent::AwaitingGuess => Some("Enter a letter: ".to_string()),
        GameEvent::GuessEvaluated {
            hit,
            revealed,
            wrong_guesses,
            max_wrong_guesses,
            seconds_remaining,
            ..
        } => Some(format!(
            "{}\nWord: {revealed} | Wrong: {wrong_guesses}/{max_wrong_guesses} | Time left: {seconds_remaining}s\n",
            if *hit { "Hit!" } else { "Miss!" },
        )),
        GameEvent::Tick { .. } => None,
        GameEvent::TimeUp => Some("\nTime's up!\n".to_string()),
        GameEvent::RoundEnded(summary) => {
            let verdict = match summary.status {
                RoundStatus::Won => format!("You won! +{} pts", summary.score),
                _ => format!("You lost. The word was: {}", summary.word),
            };
            Some(format!("{verdict}\nTotal score: {}\n", summary.total_score))
        }
        GameEvent::GameOver { final_score, .. } => {
            Some(format!("\nGame finished. Final score: {final_score}\n"))
        }
    }
}

/// Prints events to stdout until the orchestrator hangs up.
#[instrument(skip_all)]
pub async fn print_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        debug!(?event, "Rendering event");
        let Some(text) = render_event(&event) else {
            continue;
        };
        if let Err(e) = write_stdout(&text) {
            warn!(error = %e, "Failed to write to stdout");
            return;
        }
    }
    debug!("Event channel closed");
}

fn write_stdout(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
