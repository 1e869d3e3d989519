// src/timers/bank.rs

use tracing::{debug, info};

use crate::timers::timer::Timer;
use crate::types::{TimerId, TimerMode};

/// Ordered collection of timers keyed by id.
///
/// Ids come from a counter and are never reused, even after removal.
/// Operations on an unknown id do nothing and return `false`.
#[derive(Debug, Clone, Default)]
pub struct TimerBank {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bank pre-filled with `count` idle timers.
    pub fn with_timers(count: usize) -> Self {
        let mut bank = Self::new();
        for _ in 0..count {
            bank.add();
        }
        bank
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: &str) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Append an idle countdown timer and return its id.
    pub fn add(&mut self) -> TimerId {
        self.next_id += 1;
        let id = format!("t{}", self.next_id);
        self.timers.push(Timer::new(id.clone()));
        debug!(timer = %id, "timer added");
        id
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id() != id);
        let removed = self.timers.len() != before;
        if removed {
            debug!(timer = %id, "timer removed");
        }
        removed
    }

    pub fn start(&mut self, id: &str) -> bool {
        self.with_timer(id, |t| {
            let started = t.start();
            if !started {
                debug!(
                    timer = %t.id(),
                    minutes = %t.minutes_text(),
                    seconds = %t.seconds_text(),
                    "timer has no time to count down; start ignored"
                );
            }
            started
        })
    }

    pub fn stop(&mut self, id: &str) -> bool {
        self.with_timer(id, |t| {
            t.stop();
            true
        })
    }

    pub fn clear(&mut self, id: &str) -> bool {
        self.with_timer(id, |t| {
            t.clear();
            true
        })
    }

    pub fn set_name(&mut self, id: &str, name: &str) -> bool {
        self.with_timer(id, |t| {
            t.set_name(name);
            true
        })
    }

    pub fn set_mode(&mut self, id: &str, mode: TimerMode) -> bool {
        self.with_timer(id, |t| {
            t.set_mode(mode);
            true
        })
    }

    pub fn set_duration_text(&mut self, id: &str, minutes: &str, seconds: &str) -> bool {
        self.with_timer(id, |t| {
            t.set_duration_text(minutes, seconds);
            true
        })
    }

    /// Return every timer to idle.
    pub fn reset_all(&mut self) {
        for t in &mut self.timers {
            t.clear();
        }
        info!(count = self.timers.len(), "all timers cleared");
    }

    /// Advance every running timer by one second.
    ///
    /// Returns the ids of countdowns that expired on this tick.
    pub fn tick(&mut self) -> Vec<TimerId> {
        self.timers
            .iter_mut()
            .filter_map(|t| t.tick().then(|| t.id().to_string()))
            .collect()
    }

    pub fn any_running(&self) -> bool {
        self.timers.iter().any(Timer::is_running)
    }

    fn with_timer(&mut self, id: &str, f: impl FnOnce(&mut Timer) -> bool) -> bool {
        match self.timers.iter_mut().find(|t| t.id() == id) {
            Some(timer) => f(timer),
            None => {
                debug!(timer = %id, "unknown timer; ignoring");
                false
            }
        }
    }
}
