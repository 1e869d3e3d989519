// tests/clock_model.rs

use std::sync::Arc;
use std::time::Duration;

use cookplan::clock::{ClockModel, ClockState, ManualTimeSource};

fn clock() -> (ManualTimeSource, ClockModel) {
    let time = ManualTimeSource::new();
    let model = ClockModel::new(Arc::new(time.clone()));
    (time, model)
}

#[test]
fn stopped_clock_does_not_move() {
    let (time, clock) = clock();
    time.advance_minutes(5.0);

    assert!(!clock.is_playing());
    assert_eq!(clock.current_minutes(), 0.0);
}

#[test]
fn playing_clock_follows_the_time_source() {
    let (time, mut clock) = clock();
    clock.start();
    time.advance(Duration::from_secs(90));

    assert!(clock.is_playing());
    assert_eq!(clock.current_minutes(), 1.5);
    assert_eq!(clock.elapsed_seconds(), 90);
}

#[test]
fn pause_and_resume_are_continuous() {
    let (time, mut clock) = clock();

    clock.start();
    time.advance_minutes(2.0);
    clock.pause();
    assert_eq!(clock.base_minutes(), 2.0);

    // wall time while paused is not counted
    time.advance_minutes(10.0);
    assert_eq!(clock.current_minutes(), 2.0);

    clock.start();
    time.advance_minutes(3.0);
    assert_eq!(clock.current_minutes(), 5.0);
}

#[test]
fn start_while_playing_keeps_the_original_anchor() {
    let (time, mut clock) = clock();
    clock.start();
    time.advance_minutes(1.0);
    clock.start();
    time.advance_minutes(1.0);

    assert_eq!(clock.current_minutes(), 2.0);
}

#[test]
fn pause_while_stopped_is_a_no_op() {
    let (_time, mut clock) = clock();
    clock.jump(4.0);
    clock.pause();

    assert_eq!(clock.state(), ClockState::Stopped);
    assert_eq!(clock.current_minutes(), 4.0);
}

#[test]
fn jump_stops_and_sets_the_offset() {
    let (time, mut clock) = clock();
    clock.start();
    time.advance_minutes(7.0);

    clock.jump(10.0);
    assert!(!clock.is_playing());
    assert_eq!(clock.current_minutes(), 10.0);

    // the in-flight 7 minutes were dropped, not committed
    time.advance_minutes(1.0);
    assert_eq!(clock.current_minutes(), 10.0);
}

#[test]
fn jump_clamps_negatives_and_ignores_non_finite() {
    let (_time, mut clock) = clock();

    clock.jump(-3.0);
    assert_eq!(clock.current_minutes(), 0.0);

    clock.jump(6.0);
    clock.jump(f64::NAN);
    clock.jump(f64::INFINITY);
    assert_eq!(clock.current_minutes(), 6.0);
}

#[test]
fn reset_returns_to_zero_and_stops() {
    let (time, mut clock) = clock();
    clock.start();
    time.advance_minutes(3.0);

    clock.reset();
    assert_eq!(clock.state(), ClockState::Stopped);
    assert_eq!(clock.current_minutes(), 0.0);
    assert_eq!(clock.elapsed_seconds(), 0);
}

#[test]
fn pause_start_pause_without_elapsed_time_changes_nothing() {
    let (time, mut clock) = clock();
    clock.start();
    time.advance_minutes(2.5);

    clock.pause();
    let before = clock.current_minutes();
    clock.start();
    clock.pause();

    assert_eq!(clock.current_minutes(), before);
}
