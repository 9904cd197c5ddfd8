//! Round orchestration: words, guesses, countdown and score.

use crate::games::hangman::{
    GameRules, RoundState, RoundStatus, RulesError, ScoreTally, WordSource, score,
};
use crate::players::Guesser;
use crate::timer::RoundTimer;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A round began.
    RoundStarted {
        /// 1-based round number.
        round: u32,
        /// Masked word.
        revealed: String,
        /// Time on the clock.
        seconds: u32,
    },
    /// Waiting for the player to type a guess.
    AwaitingGuess,
    /// A guess was applied to the round.
    GuessEvaluated {
        /// Normalized guess.
        guess: char,
        /// Whether the letter occurs in the word.
        hit: bool,
        /// Masked word after the guess.
        revealed: String,
        /// Misses so far.
        wrong_guesses: u32,
        /// Misses allowed.
        max_wrong_guesses: u32,
        /// Last observed time left.
        seconds_remaining: u32,
    },
    /// The countdown ticked.
    Tick {
        /// Time left.
        seconds_remaining: u32,
    },
    /// The countdown ended the round.
    TimeUp,
    /// A round finished.
    RoundEnded(RoundSummary),
    /// Every round was played.
    GameOver {
        /// Session total.
        final_score: u32,
        /// Number of rounds played.
        rounds: u32,
    },
}

/// Result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    /// The hidden word.
    pub word: String,
    /// How the round ended.
    pub status: RoundStatus,
    /// Misses made.
    pub wrong_guesses: u32,
    /// Time left when the round ended.
    pub seconds_remaining: u32,
    /// Points earned this round.
    pub score: u32,
    /// Session total after this round.
    pub total_score: u32,
}

/// Result of a whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Every round, in order.
    pub rounds: Vec<RoundSummary>,
    /// Session total.
    pub final_score: u32,
}

/// Countdown notifications forwarded from the timer task.
#[derive(Debug, Clone, Copy)]
enum TimerEvent {
    Tick(u32),
    Finished,
}

/// What woke the guess loop.
enum Wake {
    Timer(Option<TimerEvent>),
    Guess(Result<Option<char>>),
}

/// Plays a fixed number of rounds against one guesser.
pub struct Orchestrator {
    rules: GameRules,
    rounds: u32,
    words: WordSource,
    guesser: Box<dyn Guesser>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    timer: RoundTimer,
    tally: ScoreTally,
}

impl Orchestrator {
    /// Creates an orchestrator, rejecting rules no round could be played under.
    #[instrument(skip(words, guesser, event_tx))]
    pub fn new(
        rules: GameRules,
        rounds: u32,
        words: WordSource,
        guesser: Box<dyn Guesser>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Result<Self, RulesError> {
        rules.validate()?;
        if rounds == 0 {
            return Err(RulesError::ZeroRounds);
        }

        Ok(Self {
            rules,
            rounds,
            words,
            guesser,
            event_tx,
            timer: RoundTimer::new(),
            tally: ScoreTally::new(),
        })
    }

    /// Plays every round, then releases the timer.
    #[instrument(skip(self), fields(rounds = self.rounds, player = %self.guesser.name()))]
    pub async fn run(mut self) -> Result<GameSummary> {
        info!("Starting game orchestration");

        let played = self.play_rounds().await;
        self.timer.shutdown().await;
        let played = played?;

        let final_score = self.tally.total();
        info!(final_score, "Game finished");
        self.event_tx.send(GameEvent::GameOver {
            final_score,
            rounds: self.rounds,
        })?;

        Ok(GameSummary {
            rounds: played,
            final_score,
        })
    }

    async fn play_rounds(&mut self) -> Result<Vec<RoundSummary>> {
        let mut played = Vec::with_capacity(self.rounds as usize);
        for number in 1..=self.rounds {
            played.push(self.play_round(number).await?);
        }
        Ok(played)
    }

    #[instrument(skip(self))]
    async fn play_round(&mut self, number: u32) -> Result<RoundSummary> {
        let word = self.words.next_word();
        let mut round = RoundState::new(&word);
        let seconds = self.rules.round_time_seconds;

        info!(seconds, "Round started");
        self.event_tx.send(GameEvent::RoundStarted {
            round: number,
            revealed: round.revealed(),
            seconds,
        })?;

        // A fresh channel per round: nothing a previous countdown sent can
        // reach this one.
        let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
        let tick_tx = timer_tx.clone();
        self.timer
            .start(
                seconds,
                move |remaining| {
                    if tick_tx.send(TimerEvent::Tick(remaining)).is_err() {
                        debug!(remaining, "Round channel closed, tick dropped");
                    }
                },
                move || {
                    if timer_tx.send(TimerEvent::Finished).is_err() {
                        debug!("Round channel closed, expiry dropped");
                    }
                },
            )
            .await;

        let mut seconds_remaining = seconds;
        let outcome = self
            .guess_loop(&mut round, &mut timer_rx, &mut seconds_remaining)
            .await;
        self.timer.stop().await;
        outcome?;

        let status = round.status();
        let points = score(
            &self.rules,
            round.is_won(),
            seconds_remaining,
            round.wrong_guesses(),
        );
        let total_score = self.tally.add(points);

        let summary = RoundSummary {
            round: number,
            word: round.answer().unwrap_or(word),
            status,
            wrong_guesses: round.wrong_guesses(),
            seconds_remaining,
            score: points,
            total_score,
        };
        info!(%status, points, total_score, "Round finished");
        self.event_tx.send(GameEvent::RoundEnded(summary.clone()))?;

        Ok(summary)
    }

    /// Feeds guesses to the round until it reaches a terminal status.
    async fn guess_loop(
        &mut self,
        round: &mut RoundState,
        timer_rx: &mut mpsc::UnboundedReceiver<TimerEvent>,
        seconds_remaining: &mut u32,
    ) -> Result<()> {
        let mut prompt = true;

        while !round.is_finished() {
            if round.wrong_guesses() >= self.rules.max_wrong_guesses {
                round.lose_by_wrong_guesses();
                break;
            }

            if prompt {
                self.event_tx.send(GameEvent::AwaitingGuess)?;
                prompt = false;
            }

            // Timer first: when both are ready, an expiry already delivered is
            // applied before the guess.
            let wake = tokio::select! {
                biased;
                event = timer_rx.recv() => Wake::Timer(event),
                guess = self.guesser.read_guess() => Wake::Guess(guess),
            };

            match wake {
                Wake::Timer(Some(TimerEvent::Tick(remaining))) => {
                    *seconds_remaining = remaining;
                    self.event_tx.send(GameEvent::Tick {
                        seconds_remaining: remaining,
                    })?;
                }
                Wake::Timer(Some(TimerEvent::Finished)) => {
                    *seconds_remaining = 0;
                    if round.time_up() {
                        self.event_tx.send(GameEvent::TimeUp)?;
                    }
                }
                Wake::Timer(None) => {
                    // Both senders live in the countdown task, which only exits
                    // after sending Finished.
                    warn!("Countdown vanished without finishing");
                    *seconds_remaining = 0;
                    if round.time_up() {
                        self.event_tx.send(GameEvent::TimeUp)?;
                    }
                }
                Wake::Guess(guess) => {
                    prompt = true;
                    let Some(c) = guess? else {
                        debug!("Blank input ignored");
                        continue;
                    };
                    let hit = round.guess(c);
                    self.event_tx.send(GameEvent::GuessEvaluated {
                        guess: c,
                        hit,
                        revealed: round.revealed(),
                        wrong_guesses: round.wrong_guesses(),
                        max_wrong_guesses: self.rules.max_wrong_guesses,
                        seconds_remaining: *seconds_remaining,
                    })?;
                }
            }
        }

        Ok(())
    }
}
