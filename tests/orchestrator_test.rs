//! Integration tests for round orchestration, on tokio's paused clock.

use anyhow::Result;
use std::time::Duration;
use strictly_hangman::{
    GameEvent, GameRules, Guesser, Orchestrator, RoundStatus, RulesError, ScriptedGuesser,
    WordSource,
};
use tokio::sync::mpsc;

const RULES: GameRules = GameRules::STANDARD;

fn orchestrator(
    rounds: u32,
    guesser: impl Guesser + 'static,
) -> (Orchestrator, mpsc::UnboundedReceiver<GameEvent>) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let words = WordSource::seeded(["cat"], 1).expect("valid corpus");
    let orchestrator = Orchestrator::new(RULES, rounds, words, Box::new(guesser), event_tx)
        .expect("valid rules");
    (orchestrator, event_rx)
}

fn drain(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    events
}

fn after(delay_ms: u64, line: &str) -> (Duration, String) {
    (Duration::from_millis(delay_ms), line.to_string())
}

#[tokio::test(start_paused = true)]
async fn test_quick_clean_win_scores_90() {
    let guesser = ScriptedGuesser::timed([after(10_500, "c"), after(0, "a"), after(0, "t")]);
    let (orchestrator, event_rx) = orchestrator(1, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let round = &summary.rounds[0];
    assert_eq!(round.status, RoundStatus::Won);
    assert_eq!(round.seconds_remaining, 20);
    assert_eq!(round.wrong_guesses, 0);
    assert_eq!(round.score, 90);
    assert_eq!(summary.final_score, 90);

    let events = drain(event_rx);
    assert!(!events.contains(&GameEvent::TimeUp));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            final_score: 90,
            rounds: 1
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_sloppy_late_win_scores_40() {
    let guesser = ScriptedGuesser::timed([
        after(0, "x"),
        after(0, "y"),
        after(0, "z"),
        after(0, "q"),
        after(25_500, "c"),
        after(0, "a"),
        after(0, "t"),
    ]);
    let (orchestrator, _event_rx) = orchestrator(1, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let round = &summary.rounds[0];
    assert_eq!(round.status, RoundStatus::Won);
    assert_eq!(round.wrong_guesses, 4);
    assert_eq!(round.seconds_remaining, 5);
    assert_eq!(round.score, 40);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_loses_and_reveals_word() {
    let guesser = ScriptedGuesser::new(["c"]);
    let (orchestrator, event_rx) = orchestrator(1, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let round = &summary.rounds[0];
    assert_eq!(round.status, RoundStatus::LostByTimeout);
    assert_eq!(round.score, 0);
    assert_eq!(round.seconds_remaining, 0);
    assert_eq!(round.word, "cat");

    let events = drain(event_rx);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::TimeUp).count(),
        1
    );
    let ended = events.iter().find_map(|e| match e {
        GameEvent::RoundEnded(summary) => Some(summary),
        _ => None,
    });
    assert_eq!(ended.map(|s| s.word.as_str()), Some("cat"));
}

#[tokio::test(start_paused = true)]
async fn test_wrong_guess_limit_loses() {
    let guesser = ScriptedGuesser::new(["x", "y", "z", "q", "w", "c", "a", "t"]);
    let (orchestrator, event_rx) = orchestrator(1, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let round = &summary.rounds[0];
    assert_eq!(round.status, RoundStatus::LostByWrongGuesses);
    assert_eq!(round.wrong_guesses, RULES.max_wrong_guesses);
    assert_eq!(round.score, 0);

    // No guess is read once the limit is reached.
    let evaluated = drain(event_rx)
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GuessEvaluated { .. }))
        .count();
    assert_eq!(evaluated, 5);
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_costs_nothing() {
    let guesser = ScriptedGuesser::new(["", "   ", "C", "\t", "a", "t"]);
    let (orchestrator, event_rx) = orchestrator(1, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let round = &summary.rounds[0];
    assert_eq!(round.status, RoundStatus::Won);
    assert_eq!(round.wrong_guesses, 0);
    assert_eq!(round.score, 110);

    let guesses: Vec<char> = drain(event_rx)
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::GuessEvaluated { guess, .. } => Some(guess),
            _ => None,
        })
        .collect();
    assert_eq!(guesses, ['c', 'a', 't']);
}

#[tokio::test(start_paused = true)]
async fn test_scores_accumulate_across_rounds() {
    let guesser = ScriptedGuesser::new(["c", "a", "t", "t", "x", "a", "c"]);
    let (orchestrator, _event_rx) = orchestrator(2, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    let scores: Vec<u32> = summary.rounds.iter().map(|r| r.score).collect();
    let totals: Vec<u32> = summary.rounds.iter().map(|r| r.total_score).collect();
    assert_eq!(scores, [110, 105]);
    assert_eq!(totals, [110, 215]);
    assert_eq!(summary.final_score, 215);
}

#[tokio::test(start_paused = true)]
async fn test_previous_countdown_never_reaches_next_round() {
    // Round one is won a moment before its clock would expire; round two idles.
    let guesser = ScriptedGuesser::timed([after(29_500, "c"), after(0, "a"), after(0, "t")]);
    let (orchestrator, event_rx) = orchestrator(2, guesser);

    let summary = orchestrator.run().await.expect("game runs");

    assert_eq!(summary.rounds[0].status, RoundStatus::Won);
    assert_eq!(summary.rounds[0].seconds_remaining, 1);
    assert_eq!(summary.rounds[0].score, 52);
    assert_eq!(summary.rounds[1].status, RoundStatus::LostByTimeout);

    let events = drain(event_rx);
    let second_start = events
        .iter()
        .position(|e| matches!(e, GameEvent::RoundStarted { round: 2, .. }))
        .expect("second round started");

    let ticks: Vec<u32> = events[second_start..]
        .iter()
        .filter_map(|e| match e {
            GameEvent::Tick { seconds_remaining } => Some(*seconds_remaining),
            _ => None,
        })
        .collect();
    let expected: Vec<u32> = (0..RULES.round_time_seconds).rev().collect();
    assert_eq!(ticks, expected);

    assert_eq!(
        events[..second_start]
            .iter()
            .filter(|e| **e == GameEvent::TimeUp)
            .count(),
        0
    );
}

#[tokio::test(start_paused = true)]
async fn test_closed_input_ends_game_with_error() {
    struct Hangup;

    #[async_trait::async_trait]
    impl Guesser for Hangup {
        async fn read_guess(&mut self) -> Result<Option<char>> {
            anyhow::bail!("Input channel closed")
        }

        fn name(&self) -> &str {
            "Hangup"
        }
    }

    let (orchestrator, event_rx) = orchestrator(3, Hangup);

    let err = orchestrator.run().await.unwrap_err();
    assert!(err.to_string().contains("Input channel closed"));

    let events = drain(event_rx);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundEnded(_) | GameEvent::GameOver { .. }))
    );
}

#[test]
fn test_invalid_rules_rejected_before_play() {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let words = WordSource::seeded(["cat"], 1).unwrap();
    let no_time = GameRules {
        round_time_seconds: 0,
        ..RULES
    };
    let result = Orchestrator::new(
        no_time,
        1,
        words.clone(),
        Box::new(ScriptedGuesser::new(["c"])),
        event_tx.clone(),
    );
    assert!(matches!(result, Err(RulesError::ZeroRoundTime)));

    let result = Orchestrator::new(
        RULES,
        0,
        words,
        Box::new(ScriptedGuesser::new(["c"])),
        event_tx,
    );
    assert!(matches!(result, Err(RulesError::ZeroRounds)));
}
