// src/timers/timer.rs

//! A single manual timer.
//!
//! The lifecycle is an explicit state machine:
//!
//! ```text
//!            start                 tick (down, reaches 0)
//!   Idle ─────────────▶ Running ─────────────────────────▶ Expired
//!    ▲                  │     ▲                               │
//!    │ clear       stop │     │ start (time left)             │ start
//!    │                  ▼     │                               ▼
//!    └──────────────── Stopped                     Running (re-armed)
//! ```
//!
//! `clear` returns any state to `Idle`. Running and expired can never hold
//! at the same time because they are different variants.

use serde::Serialize;

use crate::types::{TimerId, TimerMode};

/// Seconds field is capped at this value when arming a countdown.
const MAX_SECONDS_FIELD: u64 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Never run, or explicitly cleared.
    Idle,
    /// Counting in `mode`; `remaining` is seconds left (down, always > 0)
    /// or elapsed (up).
    Running { mode: TimerMode, remaining: u64 },
    /// Halted by the user with progress kept.
    Stopped { remaining: u64 },
    /// A countdown reached zero on its own and awaits acknowledgement.
    Expired,
}

/// Presentation state derived from the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayState {
    CountingUp,
    CountingDown,
    Paused,
    Expired,
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    id: TimerId,
    name: String,
    minutes_text: String,
    seconds_text: String,
    mode: TimerMode,
    state: TimerState,
}

impl Timer {
    pub fn new(id: impl Into<TimerId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            minutes_text: "0".to_string(),
            seconds_text: "00".to_string(),
            mode: TimerMode::Down,
            state: TimerState::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn minutes_text(&self) -> &str {
        &self.minutes_text
    }

    pub fn seconds_text(&self) -> &str {
        &self.seconds_text
    }

    pub fn remaining_seconds(&self) -> u64 {
        match self.state {
            TimerState::Running { remaining, .. } | TimerState::Stopped { remaining } => remaining,
            TimerState::Idle | TimerState::Expired => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// True only in the idle state, as opposed to having run out.
    pub fn is_cleared(&self) -> bool {
        matches!(self.state, TimerState::Idle)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Takes effect on the next start or resume.
    pub fn set_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
    }

    /// Edit the configured duration. Non-digit characters are dropped, the
    /// way the input fields filter keystrokes.
    pub fn set_duration_text(&mut self, minutes: &str, seconds: &str) {
        self.minutes_text = digits_only(minutes);
        self.seconds_text = digits_only(seconds);
    }

    /// Configured countdown length in seconds.
    ///
    /// Blank fields count as zero and seconds clamp to 59. Returns `None`
    /// when a field does not fit a number.
    pub fn configured_seconds(&self) -> Option<u64> {
        let minutes = parse_field(&self.minutes_text)?;
        let seconds = parse_field(&self.seconds_text)?.min(MAX_SECONDS_FIELD);
        minutes.checked_mul(60)?.checked_add(seconds)
    }

    /// Start or resume.
    ///
    /// With time left, resumes from it. At zero, a countdown re-arms from
    /// the configured fields and a count-up restarts from zero. Returns
    /// `false` if the fields cannot be parsed (nothing changes) or if they
    /// describe a zero-length countdown (the timer is left idle).
    pub fn start(&mut self) -> bool {
        let current = self.remaining_seconds();
        let remaining = if current > 0 {
            current
        } else {
            match self.mode {
                TimerMode::Up => 0,
                TimerMode::Down => match self.configured_seconds() {
                    Some(0) => {
                        // A countdown is never running at zero.
                        self.state = TimerState::Idle;
                        return false;
                    }
                    Some(secs) => secs,
                    None => return false,
                },
            }
        };

        self.state = TimerState::Running {
            mode: self.mode,
            remaining,
        };
        true
    }

    /// Halt while keeping progress. Only affects a running timer.
    pub fn stop(&mut self) {
        if let TimerState::Running { remaining, .. } = self.state {
            self.state = TimerState::Stopped { remaining };
        }
    }

    pub fn clear(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Advance by one second. Returns `true` if this tick expired the timer.
    pub fn tick(&mut self) -> bool {
        match self.state {
            TimerState::Running {
                mode: TimerMode::Up,
                remaining,
            } => {
                self.state = TimerState::Running {
                    mode: TimerMode::Up,
                    remaining: remaining.saturating_add(1),
                };
                false
            }
            TimerState::Running {
                mode: TimerMode::Down,
                remaining,
            } => {
                let next = remaining.saturating_sub(1);
                if next == 0 {
                    self.state = TimerState::Expired;
                    true
                } else {
                    self.state = TimerState::Running {
                        mode: TimerMode::Down,
                        remaining: next,
                    };
                    false
                }
            }
            TimerState::Idle | TimerState::Stopped { .. } | TimerState::Expired => false,
        }
    }

    pub fn display_state(&self) -> DisplayState {
        match self.state {
            TimerState::Running {
                mode: TimerMode::Up,
                ..
            } => DisplayState::CountingUp,
            TimerState::Running { remaining, .. } if remaining > 0 => DisplayState::CountingDown,
            TimerState::Stopped { remaining } if remaining > 0 => DisplayState::Paused,
            // Running out a zero-length countdown is not worth flagging.
            TimerState::Expired if self.configured_seconds().unwrap_or(0) > 0 => {
                DisplayState::Expired
            }
            _ => DisplayState::Idle,
        }
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn parse_field(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        Some(0)
    } else {
        s.parse().ok()
    }
}
