//! Tokio-backed timers that drive a [`LoadingState`].
//!
//! Two tasks share one `watch` sender: a ticker that advances progress and a
//! one-shot completion timer. Both are aborted when [`LoadingTimers`] is
//! dropped, so nothing can be observed after the owner goes away.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::ConfigError;
use crate::loading::{LoadingState, LoadingTimings};

/// Running loading sequence. Dropping it cancels both timers.
#[derive(Debug)]
pub struct LoadingTimers {
    progress_task: JoinHandle<()>,
    completion_task: JoinHandle<()>,
    state: watch::Receiver<LoadingState>,
}

impl LoadingTimers {
    /// Spawn the progress ticker and completion timer on the current runtime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(timings: LoadingTimings) -> Result<Self, ConfigError> {
        timings.validate()?;

        let (tx, state) = watch::channel(LoadingState::new());
        let tx = Arc::new(tx);
        let started = Instant::now();

        let progress_task = tokio::spawn(run_progress(Arc::clone(&tx), timings, started));
        let completion_task = tokio::spawn(run_completion(tx, timings, started));

        tracing::debug!(
            tick_ms = timings.tick_ms,
            step = timings.step,
            completion_delay_ms = timings.completion_delay_ms,
            "Loading sequence started"
        );

        Ok(Self {
            progress_task,
            completion_task,
            state,
        })
    }

    /// Receiver that is notified on every progress change and on completion.
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state.clone()
    }
}

impl Drop for LoadingTimers {
    fn drop(&mut self) {
        self.progress_task.abort();
        self.completion_task.abort();
        tracing::trace!("Loading timers cancelled");
    }
}

async fn run_progress(tx: Arc<watch::Sender<LoadingState>>, timings: LoadingTimings, started: Instant) {
    let tick = timings.tick();
    let mut interval = time::interval_at(started + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut settled = false;
        tx.send_if_modified(|state| {
            let changed = state.advance(timings.step);
            settled = state.is_completed() || state.progress().is_full();
            changed
        });

        // Further ticks cannot change anything
        if settled {
            break;
        }
    }
}

async fn run_completion(tx: Arc<watch::Sender<LoadingState>>, timings: LoadingTimings, started: Instant) {
    time::sleep_until(started + timings.completion_delay()).await;

    if tx.send_if_modified(LoadingState::complete) {
        tracing::debug!("Loading sequence complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::loading::Progress;

    #[tokio::test(start_paused = true)]
    async fn test_default_timeline() {
        let start = Instant::now();
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let mut rx = timers.subscribe();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().progress(), Progress::new(10));
        assert_eq!(start.elapsed(), Duration::from_millis(300));

        while !rx.borrow_and_update().progress().is_full() {
            rx.changed().await.unwrap();
        }
        assert_eq!(start.elapsed(), Duration::from_millis(3000));
        assert!(!rx.borrow().is_completed());

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_completed());
        assert_eq!(start.elapsed(), Duration::from_millis(4000));

        // Both tasks have exited, so the channel closes
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_is_monotonic() {
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let mut rx = timers.subscribe();
        let mut last = Progress::ZERO;

        while rx.changed().await.is_ok() {
            let progress = rx.borrow_and_update().progress();
            assert!(progress >= last);
            assert!(progress.percent() <= 100);
            last = progress;
        }
        assert_eq!(last, Progress::FULL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_observed_once() {
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let mut rx = timers.subscribe();
        let mut completions = 0;
        let mut was_completed = false;

        while rx.changed().await.is_ok() {
            let completed = rx.borrow_and_update().is_completed();
            if completed && !was_completed {
                completions += 1;
            }
            was_completed = completed;
        }

        assert_eq!(completions, 1);
        assert_eq!(rx.borrow().phase(), crate::LoadingPhase::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_before_full_progress() {
        let timings = LoadingTimings {
            tick_ms: 1000,
            step: 10,
            completion_delay_ms: 2500,
        };
        let timers = LoadingTimers::start(timings).unwrap();
        let mut rx = timers.subscribe();

        while !rx.borrow_and_update().is_completed() {
            rx.changed().await.unwrap();
        }
        assert_eq!(rx.borrow().progress(), Progress::new(20));

        // Ticker stops once the sequence is done
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.borrow().progress(), Progress::new(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timers() {
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let mut rx = timers.subscribe();

        rx.changed().await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().progress(), Progress::new(20));

        drop(timers);
        time::sleep(Duration::from_secs(10)).await;

        let state = *rx.borrow();
        assert_eq!(state.progress(), Progress::new(20));
        assert!(!state.is_completed());
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_rejects_zero_tick() {
        let timings = LoadingTimings {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(matches!(LoadingTimers::start(timings), Err(ConfigError::ZeroTick)));
    }
}
