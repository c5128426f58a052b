//! Splash screen with a fake progress bar.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{LoadingPhase, LoadingState, LoadingTimers, LoadingTimings, Progress};
use tokio::sync::watch;

/// Mirror a loading sequence into the UI.
///
/// `on_progress` sees every published value; `on_done` runs at most once.
/// Without a receiver (timers failed to start) the splash is skipped.
/// If the channel closes before completion, `on_done` never runs.
pub(crate) async fn follow_sequence(
    receiver: Option<watch::Receiver<LoadingState>>,
    mut on_progress: impl FnMut(Progress),
    on_done: impl FnOnce(),
) {
    let Some(mut rx) = receiver else {
        on_done();
        return;
    };

    loop {
        let state = *rx.borrow_and_update();
        on_progress(state.progress());
        if state.phase() == LoadingPhase::Done {
            on_done();
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}

/// Splash view that calls `on_complete` once the loading sequence is done.
#[component]
pub fn LoadingScreen(timings: LoadingTimings, on_complete: EventHandler<()>) -> Element {
    let mut progress = use_signal(|| Progress::ZERO);

    // Timers live exactly as long as this component; dropping them aborts both tasks
    let timers = use_hook(move || match LoadingTimers::start(timings) {
        Ok(timers) => Some(Rc::new(timers)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to start loading timers, skipping splash");
            None
        }
    });

    use_future(move || {
        let receiver = timers.as_ref().map(|t| t.subscribe());
        follow_sequence(receiver, move |p| progress.set(p), move || on_complete.call(()))
    });

    let current = progress();
    let width = current.css_width();

    rsx! {
        div { class: "loading-screen",
            div { class: "loading-knot", "\u{221E}" }
            p { class: "loading-label", "Profile Loading..." }
            div { class: "loading-track",
                div { class: "loading-fill", style: "width: {width}" }
            }
            p { class: "loading-percent", "{current}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_completion_forwarded_once() {
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let seen = RefCell::new(Vec::new());
        let done = Cell::new(0);

        follow_sequence(
            Some(timers.subscribe()),
            |p| seen.borrow_mut().push(p),
            || done.set(done.get() + 1),
        )
        .await;

        assert_eq!(done.get(), 1);
        let seen = seen.into_inner();
        assert_eq!(seen.first(), Some(&Progress::ZERO));
        assert_eq!(seen.last(), Some(&Progress::FULL));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_timers_skip_splash() {
        let done = Cell::new(0);
        let mut updates = 0;

        follow_sequence(None, |_| updates += 1, || done.set(done.get() + 1)).await;

        assert_eq!(done.get(), 1);
        assert_eq!(updates, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_timers_never_complete() {
        let timers = LoadingTimers::start(LoadingTimings::default()).unwrap();
        let receiver = timers.subscribe();
        let done = Cell::new(false);

        let follow = follow_sequence(Some(receiver), |_| {}, || done.set(true));
        tokio::pin!(follow);

        // Run past the first tick, then tear the timers down
        let _ = tokio::time::timeout(Duration::from_millis(700), follow.as_mut()).await;
        drop(timers);
        follow.await;

        assert!(!done.get());
    }
}
