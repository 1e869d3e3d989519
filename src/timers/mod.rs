// src/timers/mod.rs

//! Bank of manual kitchen timers, independent of the playback clock.

pub mod bank;
pub mod timer;

pub use bank::TimerBank;
pub use timer::{DisplayState, Timer, TimerState};
