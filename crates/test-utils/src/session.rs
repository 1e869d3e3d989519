#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use cookplan::clock::ManualTimeSource;
use cookplan::config::ConfigFile;
use cookplan::engine::{CoreCommand, CoreSession, CoreStep, Frame, FrameKind, RuntimeEvent};
use cookplan::plan::Task;

/// A `CoreSession` on a hand-driven clock.
///
/// Wall time only moves through [`SessionHarness::advance_minutes`] /
/// [`SessionHarness::advance`], so clock readouts are exact.
#[derive(Debug)]
pub struct SessionHarness {
    pub time: ManualTimeSource,
    pub core: CoreSession,
}

impl SessionHarness {
    pub fn new(cfg: &ConfigFile, tasks: Vec<Task>) -> Self {
        let time = ManualTimeSource::new();
        let core = CoreSession::new(cfg, tasks, Arc::new(time.clone()));
        Self { time, core }
    }

    /// Feed one stdin line.
    pub fn input(&mut self, line: &str) -> CoreStep {
        self.core.step(RuntimeEvent::Input(line.to_string()))
    }

    /// Feed several stdin lines, dropping the results.
    pub fn script(&mut self, lines: &[&str]) {
        for line in lines {
            self.input(line);
        }
    }

    pub fn step(&mut self, event: RuntimeEvent) -> CoreStep {
        self.core.step(event)
    }

    /// Deliver `seconds` one-second timer ticks; returns every message sent.
    pub fn tick_timers(&mut self, seconds: u32) -> Vec<String> {
        (0..seconds)
            .flat_map(|_| {
                let step = self.core.step(RuntimeEvent::TimerTick);
                notes(&step).into_iter().map(str::to_string).collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn advance(&self, by: Duration) {
        self.time.advance(by);
    }

    pub fn advance_minutes(&self, minutes: f64) {
        self.time.advance_minutes(minutes);
    }
}

/// Messages in a step, in order.
pub fn notes(step: &CoreStep) -> Vec<&str> {
    step.commands
        .iter()
        .filter_map(|c| match c {
            CoreCommand::Notify(msg) => Some(msg.as_str()),
            _ => None,
        })
        .collect()
}

/// Frames in a step, in order.
pub fn frames(step: &CoreStep) -> Vec<&Frame> {
    step.commands
        .iter()
        .filter_map(|c| match c {
            CoreCommand::Present(frame) => Some(frame),
            _ => None,
        })
        .collect()
}

pub fn frame_kinds(step: &CoreStep) -> Vec<FrameKind> {
    frames(step).into_iter().map(|f| f.kind).collect()
}
