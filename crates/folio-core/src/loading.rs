//! Loading sequence state machine.
//!
//! The splash screen shows a fake progress bar that advances by a fixed step
//! on every tick, while a separate timer decides when the splash is done.
//! The two clocks are deliberately independent: with the default timings the
//! bar fills at 3000 ms and the sequence completes at 4000 ms.
//!
//! [`LoadingState`] holds the pure transitions. [`LoadingTimers`](crate::LoadingTimers)
//! drives them from the tokio runtime.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default interval between progress ticks.
pub const DEFAULT_TICK_MS: u64 = 300;

/// Default percentage added per tick.
pub const DEFAULT_STEP: u8 = 10;

/// Default delay from mount until the sequence completes.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 4000;

/// A progress percentage clamped to `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const FULL: Progress = Progress(100);

    /// Create a progress value, saturating at 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_full(self) -> bool {
        self.0 == 100
    }

    /// Progress after adding `step`, capped at 100.
    pub fn advanced(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// CSS width value for the progress bar fill.
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Observable phase of the loading sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Ticking; progress may or may not have reached 100.
    Running(Progress),
    /// Completion has been signalled.
    Done,
}

/// Snapshot of the loading sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingState {
    progress: Progress,
    completed: bool,
}

impl LoadingState {
    /// A fresh sequence in `Running(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn phase(&self) -> LoadingPhase {
        if self.completed {
            LoadingPhase::Done
        } else {
            LoadingPhase::Running(self.progress)
        }
    }

    /// Apply one progress tick.
    ///
    /// Returns `true` if the visible progress changed. Ticks after completion
    /// or at 100% are no-ops.
    pub fn advance(&mut self, step: u8) -> bool {
        if self.completed {
            return false;
        }
        let next = self.progress.advanced(step);
        if next == self.progress {
            return false;
        }
        self.progress = next;
        true
    }

    /// Move to `Done`.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }
}

/// Timing parameters for the loading sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingTimings {
    /// Milliseconds between progress ticks
    pub tick_ms: u64,
    /// Percentage added per tick
    pub step: u8,
    /// Milliseconds from mount until completion fires
    pub completion_delay_ms: u64,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            step: DEFAULT_STEP,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
        }
    }
}

impl LoadingTimings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(250).percent(), 100);
        assert_eq!(Progress::new(95).advanced(10), Progress::FULL);
        assert_eq!(Progress::FULL.advanced(u8::MAX), Progress::FULL);
        assert_eq!(Progress::new(40).to_string(), "40%");
        assert_eq!(Progress::new(40).css_width(), "40%");
    }

    #[test]
    fn test_advance_is_monotonic_and_capped() {
        let mut state = LoadingState::new();
        let mut last = state.progress();
        for _ in 0..25 {
            state.advance(DEFAULT_STEP);
            assert!(state.progress() >= last);
            assert!(state.progress().percent() <= 100);
            last = state.progress();
        }
        assert!(state.progress().is_full());
        assert!(!state.advance(DEFAULT_STEP));
    }

    #[test]
    fn test_uneven_step_reaches_full() {
        let mut state = LoadingState::new();
        for _ in 0..4 {
            state.advance(30);
        }
        assert_eq!(state.progress(), Progress::FULL);
    }

    #[test]
    fn test_complete_fires_once() {
        let mut state = LoadingState::new();
        state.advance(10);
        assert_eq!(state.phase(), LoadingPhase::Running(Progress::new(10)));

        assert!(state.complete());
        assert!(!state.complete());
        assert_eq!(state.phase(), LoadingPhase::Done);
    }

    #[test]
    fn test_no_progress_after_completion() {
        let mut state = LoadingState::new();
        state.advance(10);
        state.complete();
        assert!(!state.advance(10));
        assert_eq!(state.progress().percent(), 10);
    }

    #[test]
    fn test_completion_independent_of_progress() {
        let mut state = LoadingState::new();
        assert!(state.complete());
        assert_eq!(state.progress(), Progress::ZERO);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let zero_tick = LoadingTimings { tick_ms: 0, ..Default::default() };
        assert!(matches!(zero_tick.validate(), Err(ConfigError::ZeroTick)));

        let zero_step = LoadingTimings { step: 0, ..Default::default() };
        assert!(matches!(zero_step.validate(), Err(ConfigError::ZeroStep)));

        assert!(LoadingTimings::default().validate().is_ok());
    }
}
