// src/format.rs

//! Human-readable durations for the readouts.

/// `m:ss`, e.g. `125` -> `"2:05"`. Minutes are not wrapped into hours.
pub fn fmt_mmss(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Compact duration, e.g. `12` -> `"12 min"`, `60` -> `"1h"`,
/// `65` -> `"1h 5m"`. Rounds to whole minutes; negatives read as zero.
pub fn fmt_duration(minutes: f64) -> String {
    let m = minutes.round().max(0.0) as u64;
    if m < 60 {
        return format!("{m} min");
    }
    let (h, rem) = (m / 60, m % 60);
    if rem == 0 {
        format!("{h}h")
    } else {
        format!("{h}h {rem}m")
    }
}

/// Label of the "now" marker: the current minute, rounded.
pub fn fmt_marker(minutes: f64) -> String {
    format!("{}m", minutes.max(0.0).round() as u64)
}

/// `"25-33m"` style span of a task.
pub fn fmt_span(start_min: f64, end_min: f64) -> String {
    format!("{start_min}-{end_min}m")
}
