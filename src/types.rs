use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a task in the loaded plan (the dataset's `id`).
pub type TaskId = String;

/// Identifier of a person on the roster (`p1`, `p2`, ...).
pub type PersonId = String;

/// Identifier of a timer in the bank (`t1`, `t2`, ...).
pub type TimerId = String;

/// Display colors assigned by index, shared by lanes and people.
pub const PALETTE: [&str; 10] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

/// Direction a timer counts in.
///
/// - `Down`: counts toward zero from the configured duration, then expires.
/// - `Up`: counts up from zero without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Down,
    Up,
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Down
    }
}

impl FromStr for TimerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "down" | "countdown" => Ok(TimerMode::Down),
            "up" | "countup" | "count-up" => Ok(TimerMode::Up),
            other => Err(format!(
                "invalid timer mode: {other} (expected \"down\" or \"up\")"
            )),
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerMode::Down => f.write_str("down"),
            TimerMode::Up => f.write_str("up"),
        }
    }
}
