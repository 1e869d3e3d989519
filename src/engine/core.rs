// src/engine/core.rs

//! Pure core session state machine.
//!
//! [`CoreSession`] consumes [`RuntimeEvent`]s and produces:
//! - an updated session state
//! - a list of [`CoreCommand`]s describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Runtime`) is responsible for reading
//! events from channels, reading plan files and writing frames to the
//! frontend. The core itself never touches Tokio, channels or the
//! filesystem, so it can be driven step by step in tests.

use std::sync::Arc;

use crate::clock::{ClockModel, TimeSource};
use crate::config::{ConfigFile, LayoutSection};
use crate::engine::event_handlers::{
    CoreCommand, CoreStep, handle_clock_sample, handle_input, handle_plan_loaded,
    handle_plan_rejected, handle_timer_tick,
};
use crate::engine::{FrameKind, RuntimeEvent};
use crate::people::{Assignments, Roster};
use crate::pins::PinBoard;
use crate::plan::Task;
use crate::schedule::Schedule;
use crate::snapshot::{Snapshot, SnapshotSource};
use crate::timers::TimerBank;

/// All mutable session state. Each part is only changed through its own
/// operations.
#[derive(Debug)]
pub struct SessionState {
    pub(crate) layout: LayoutSection,
    pub(crate) schedule: Schedule,
    pub(crate) clock: ClockModel,
    pub(crate) timers: TimerBank,
    pub(crate) roster: Roster,
    pub(crate) assignments: Assignments,
    pub(crate) pins: PinBoard,
    pub(crate) error: Option<String>,
    /// Elapsed second shown by the last status frame from clock sampling.
    pub(crate) last_sampled_second: Option<u64>,
}

impl SessionState {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot::capture(SnapshotSource {
            schedule: &self.schedule,
            clock: &self.clock,
            timers: &self.timers,
            roster: &self.roster,
            assignments: &self.assignments,
            pins: &self.pins,
            error: self.error.as_deref(),
        })
    }

    pub(crate) fn frame(&self, kind: FrameKind) -> CoreCommand {
        CoreCommand::Present(crate::engine::Frame {
            kind,
            snapshot: self.snapshot(),
        })
    }
}

#[derive(Debug)]
pub struct CoreSession {
    state: SessionState,
}

impl CoreSession {
    /// Build a session from validated config and an initial task list.
    pub fn new(cfg: &ConfigFile, tasks: Vec<Task>, time: Arc<dyn TimeSource>) -> Self {
        let mut roster = Roster::new();
        for person in &cfg.person {
            roster.add(&person.name, person.color.as_deref());
        }

        let state = SessionState {
            layout: cfg.layout,
            schedule: Schedule::build(tasks, &cfg.layout),
            clock: ClockModel::new(time),
            timers: TimerBank::with_timers(cfg.timers.initial),
            roster,
            assignments: Assignments::new(),
            pins: PinBoard::new(),
            error: None,
            last_sampled_second: None,
        };

        Self { state }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }

    pub fn clock(&self) -> &ClockModel {
        &self.state.clock
    }

    pub fn timers(&self) -> &TimerBank {
        &self.state.timers
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    pub fn assignments(&self) -> &Assignments {
        &self.state.assignments
    }

    pub fn pins(&self) -> &PinBoard {
        &self.state.pins
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Handle a single runtime event, updating session state and returning
    /// the resulting commands for the IO shell.
    pub fn step(&mut self, event: RuntimeEvent) -> CoreStep {
        match event {
            RuntimeEvent::Input(line) => handle_input(&mut self.state, &line),
            RuntimeEvent::TimerTick => handle_timer_tick(&mut self.state),
            RuntimeEvent::ClockSample => handle_clock_sample(&mut self.state),
            RuntimeEvent::ReloadRequested { path } => CoreStep {
                commands: vec![CoreCommand::LoadPlan { path, force: false }],
                keep_running: true,
            },
            RuntimeEvent::PlanLoaded { source, tasks } => {
                handle_plan_loaded(&mut self.state, &source, tasks)
            }
            RuntimeEvent::PlanRejected { source, message } => {
                handle_plan_rejected(&mut self.state, &source, message)
            }
            RuntimeEvent::ShutdownRequested => CoreStep {
                commands: vec![CoreCommand::RequestExit],
                keep_running: false,
            },
        }
    }
}
