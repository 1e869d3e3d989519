// src/clock/mod.rs

//! Continuous playback clock for the "now" marker.
//!
//! Logical time is `base_minutes` (committed) plus, while playing, the wall
//! time elapsed since play began. The value is computed on read from the
//! injected [`TimeSource`], so it does not depend on how often anybody
//! samples it.

pub mod mock;
pub mod source;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

pub use mock::ManualTimeSource;
pub use source::{SystemTimeSource, TimeSource};

/// Playback state of the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockState {
    Stopped,
    /// Playing since the given source reading.
    Playing { since: Duration },
}

#[derive(Debug, Clone)]
pub struct ClockModel {
    source: Arc<dyn TimeSource>,
    base_minutes: f64,
    state: ClockState,
}

impl ClockModel {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self {
            source,
            base_minutes: 0.0,
            state: ClockState::Stopped,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, ClockState::Playing { .. })
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Minutes already folded into the committed offset.
    pub fn base_minutes(&self) -> f64 {
        self.base_minutes
    }

    /// Begin advancing from the committed offset. No-op while playing.
    pub fn start(&mut self) {
        if self.is_playing() {
            return;
        }
        let since = self.source.now();
        self.state = ClockState::Playing { since };
        debug!(base_minutes = self.base_minutes, "clock started");
    }

    /// Commit the in-flight interval and stop. No-op while stopped.
    ///
    /// Reading the elapsed time, folding it into `base_minutes` and leaving
    /// the playing state happen in this one call.
    pub fn pause(&mut self) {
        if let ClockState::Playing { since } = self.state {
            self.base_minutes += elapsed_minutes(since, self.source.now());
            self.state = ClockState::Stopped;
            debug!(base_minutes = self.base_minutes, "clock paused");
        }
    }

    /// Stop and set the committed offset directly.
    ///
    /// The in-flight interval, if any, is dropped rather than committed.
    /// Negative targets clamp to zero; non-finite targets are ignored.
    pub fn jump(&mut self, target_minutes: f64) {
        if !target_minutes.is_finite() {
            warn!(target_minutes, "ignoring non-finite clock jump");
            return;
        }
        self.state = ClockState::Stopped;
        self.base_minutes = target_minutes.max(0.0);
        debug!(base_minutes = self.base_minutes, "clock jumped");
    }

    pub fn reset(&mut self) {
        self.jump(0.0);
    }

    /// Current logical time in (fractional) minutes.
    pub fn current_minutes(&self) -> f64 {
        match self.state {
            ClockState::Stopped => self.base_minutes,
            ClockState::Playing { since } => {
                self.base_minutes + elapsed_minutes(since, self.source.now())
            }
        }
    }

    /// Whole seconds of logical time, for the elapsed readout.
    pub fn elapsed_seconds(&self) -> u64 {
        (self.current_minutes() * 60.0).floor().max(0.0) as u64
    }
}

fn elapsed_minutes(since: Duration, now: Duration) -> f64 {
    now.saturating_sub(since).as_secs_f64() / 60.0
}
