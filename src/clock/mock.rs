// src/clock/mock.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::TimeSource;

/// A time source that only moves when told to.
///
/// Clones share the same underlying reading, so a test can keep one handle
/// and give another to the clock under test.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Arc<Mutex<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn advance_minutes(&self, minutes: f64) {
        self.advance(Duration::from_secs_f64(minutes * 60.0));
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
