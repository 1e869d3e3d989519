// src/clock/source.rs

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Abstract monotonic wall-clock.
///
/// `now()` is the time elapsed since an arbitrary, fixed origin. Only
/// differences between readings are meaningful.
pub trait TimeSource: Send + Sync + Debug {
    fn now(&self) -> Duration;
}

/// Implementation backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
