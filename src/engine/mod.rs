// src/engine/mod.rs

//! Session engine for cookplan.
//!
//! This module ties together:
//! - the schedule (grouping, row packing, layout)
//! - the playback clock
//! - the timer bank
//! - people, assignments and pins
//!
//! and reacts to:
//! - user commands (stdin lines)
//! - the one-second timer tick
//! - clock sampling for the moving marker
//! - plan (re)load results
//! - shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::path::PathBuf;

use crate::plan::Task;
use crate::snapshot::Snapshot;

pub mod command;
pub mod core;
pub mod event_handlers;
pub mod runtime;

pub use command::{HELP, UserCommand};
pub use core::CoreSession;
pub use event_handlers::{CoreCommand, CoreStep};
pub use runtime::Runtime;

/// Events flowing into the runtime from stdin, tickers, the watcher, etc.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// A raw input line, parsed by the core.
    Input(String),
    /// One second of real time passed (drives the timer bank).
    TimerTick,
    /// Sample the playback clock for the marker.
    ClockSample,
    /// The plan file changed on disk.
    ReloadRequested { path: PathBuf },
    /// A dataset was read and validated.
    PlanLoaded { source: String, tasks: Vec<Task> },
    /// A dataset was rejected; the current plan stays.
    PlanRejected { source: String, message: String },
    /// Graceful shutdown requested (e.g. Ctrl-C, end of input).
    ShutdownRequested,
}

/// How much of a snapshot the frontend should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The whole chart.
    Full,
    /// Just the clock and active timers.
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub kind: FrameKind,
    pub snapshot: Snapshot,
}
