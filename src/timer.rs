//! Round countdown running on its own task.
//!
//! [`RoundTimer`] owns at most one countdown at a time. Cancelling is
//! abort-and-join: once [`RoundTimer::stop`] returns, the cancelled countdown
//! can no longer invoke either of its callbacks.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

/// Interval between countdown ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// One running countdown.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
    seconds: u32,
}

impl TimerHandle {
    /// Returns true once the countdown has fired its finish callback or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Returns the duration this countdown started from.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Cancels the countdown and waits until its task has exited.
    #[instrument(skip(self), fields(seconds = self.seconds))]
    pub async fn cancel(self) {
        self.task.abort();
        match self.task.await {
            Ok(()) => debug!("Countdown had already finished"),
            Err(e) if e.is_cancelled() => debug!("Countdown cancelled"),
            Err(e) => warn!(error = %e, "Countdown task panicked"),
        }
    }
}

/// Schedules per-second countdowns, one at a time.
#[derive(Debug, Default)]
pub struct RoundTimer {
    active: Option<TimerHandle>,
}

impl RoundTimer {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown of `seconds`, cancelling any countdown still running.
    ///
    /// Every [`TICK`] the remaining time drops by one and `on_tick` receives it.
    /// When it reaches zero `on_finish` runs once and the countdown ends.
    /// Both callbacks run on the timer's task, concurrently with the caller.
    #[instrument(skip(self, on_tick, on_finish))]
    pub async fn start<T, F>(&mut self, seconds: u32, on_tick: T, on_finish: F)
    where
        T: FnMut(u32) + Send + 'static,
        F: FnOnce() + Send + 'static,
    {
        self.stop().await;

        info!("Starting countdown");
        let task = tokio::spawn(countdown(seconds, on_tick, on_finish));
        self.active = Some(TimerHandle { task, seconds });
    }

    /// Cancels the running countdown, if any, and waits for it to exit.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel().await;
        }
    }

    /// Returns true while a countdown is still ticking.
    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels anything pending and releases the timer.
    #[instrument(skip(self))]
    pub async fn shutdown(mut self) {
        self.stop().await;
        info!("Timer shut down");
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        // Drop cannot await the join, so only abort here.
        if let Some(handle) = self.active.take() {
            handle.task.abort();
        }
    }
}

async fn countdown<T, F>(seconds: u32, mut on_tick: T, on_finish: F)
where
    T: FnMut(u32),
    F: FnOnce(),
{
    let mut interval = time::interval_at(Instant::now() + TICK, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut remaining = seconds;
    loop {
        interval.tick().await;
        remaining = remaining.saturating_sub(1);
        debug!(remaining, "Tick");
        on_tick(remaining);
        if remaining == 0 {
            debug!("Countdown reached zero");
            on_finish();
            return;
        }
    }
}
