// src/engine/event_handlers.rs

//! Event handling logic for the core session.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::engine::command::{HELP, UserCommand};
use crate::engine::core::SessionState;
use crate::engine::FrameKind;
use crate::plan::Task;
use crate::schedule::Schedule;
use crate::timers::DisplayState;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// Show this frame.
    Present(crate::engine::Frame),
    /// Show a one-off message (timer expiry, rejected input, load result).
    Notify(String),
    /// Read and validate a plan file, then feed the result back as
    /// `PlanLoaded` / `PlanRejected`. Without `force`, content identical to
    /// the last load is skipped.
    LoadPlan { path: PathBuf, force: bool },
    /// Request that the process exits.
    RequestExit,
}

/// Decision returned by the core after handling a single `RuntimeEvent`.
#[derive(Debug, Clone)]
pub struct CoreStep {
    /// Commands the IO shell should execute, in order.
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    fn running(commands: Vec<CoreCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }
}

/// Parse a raw input line and handle it. Blank lines are ignored; parse
/// failures are reported back without touching state.
pub fn handle_input(state: &mut SessionState, line: &str) -> CoreStep {
    if line.trim().is_empty() {
        return CoreStep::running(Vec::new());
    }
    match line.parse::<UserCommand>() {
        Ok(cmd) => handle_user_command(state, cmd),
        Err(msg) => {
            debug!(%line, %msg, "rejected input");
            CoreStep::running(vec![CoreCommand::Notify(msg)])
        }
    }
}

/// Apply a user command and show the updated chart.
pub fn handle_user_command(state: &mut SessionState, cmd: UserCommand) -> CoreStep {
    let mut commands = Vec::new();

    match cmd {
        UserCommand::Start => state.clock.start(),
        UserCommand::Pause => state.clock.pause(),
        UserCommand::Reset => state.clock.reset(),
        UserCommand::Jump(raw) => match raw.trim().parse::<f64>() {
            Ok(target) => state.clock.jump(target),
            Err(_) => debug!(input = %raw, "non-numeric jump target; ignoring"),
        },
        UserCommand::Load(path) => {
            return CoreStep::running(vec![CoreCommand::LoadPlan { path, force: true }]);
        }
        UserCommand::Show => {}
        UserCommand::Help => {
            return CoreStep::running(vec![CoreCommand::Notify(HELP.to_string())]);
        }
        UserCommand::Quit => {
            return CoreStep {
                commands: vec![CoreCommand::RequestExit],
                keep_running: false,
            };
        }
        UserCommand::TimerAdd => {
            state.timers.add();
        }
        UserCommand::TimerStart(id) => {
            state.timers.start(&id);
        }
        UserCommand::TimerStop(id) => {
            state.timers.stop(&id);
        }
        UserCommand::TimerClear(id) => {
            state.timers.clear(&id);
        }
        UserCommand::TimerRemove(id) => {
            state.timers.remove(&id);
        }
        UserCommand::TimerResetAll => state.timers.reset_all(),
        UserCommand::TimerSet {
            id,
            minutes,
            seconds,
        } => {
            state.timers.set_duration_text(&id, &minutes, &seconds);
        }
        UserCommand::TimerMode { id, mode } => {
            state.timers.set_mode(&id, mode);
        }
        UserCommand::TimerName { id, name } => {
            state.timers.set_name(&id, &name);
        }
        UserCommand::PersonAdd(name) => {
            state.roster.add(&name, None);
        }
        UserCommand::PersonRemove(id) => {
            // Roster and assignment cascade change together in this step.
            if state.roster.remove(&id) {
                state.assignments.remove_person(&id);
                info!(person = %id, "person removed");
            } else {
                debug!(person = %id, "unknown person; ignoring");
            }
        }
        UserCommand::Assign { person, task } => {
            if state.roster.contains(&person) && state.schedule.task(&task).is_some() {
                state.assignments.toggle_task(&task, &person);
            } else {
                debug!(%person, %task, "unknown person or task; ignoring assign");
            }
        }
        UserCommand::AssignLane { person, lane } => {
            let task_ids = state.schedule.lane_task_ids(&lane);
            if state.roster.contains(&person) && !task_ids.is_empty() {
                state.assignments.toggle_lane(&task_ids, &person);
            } else {
                debug!(%person, %lane, "unknown person or lane; ignoring assign-lane");
            }
        }
        UserCommand::Pin(task_id) => match state.schedule.task(&task_id) {
            Some(task) => state.pins.pin(task.clone()),
            None => debug!(task = %task_id, "unknown task; ignoring pin"),
        },
        UserCommand::Unpin(task_id) => {
            state.pins.unpin(&task_id);
        }
    }

    commands.push(state.frame(FrameKind::Full));
    CoreStep::running(commands)
}

/// Advance running timers by one second and report expiries.
pub fn handle_timer_tick(state: &mut SessionState) -> CoreStep {
    let had_running = state.timers.any_running();
    let expired = state.timers.tick();

    let mut commands = Vec::new();
    for id in &expired {
        let Some(timer) = state.timers.get(id) else {
            continue;
        };
        if timer.display_state() != DisplayState::Expired {
            continue;
        }
        let label = if timer.name().is_empty() {
            id.clone()
        } else {
            format!("{id} ({})", timer.name())
        };
        info!(timer = %id, "timer expired");
        commands.push(CoreCommand::Notify(format!("timer {label} expired")));
    }

    if had_running {
        commands.push(state.frame(FrameKind::Status));
    }

    CoreStep::running(commands)
}

/// Emit a status frame while playing, once per displayed second.
pub fn handle_clock_sample(state: &mut SessionState) -> CoreStep {
    if !state.clock.is_playing() {
        state.last_sampled_second = None;
        return CoreStep::running(Vec::new());
    }

    let second = state.clock.elapsed_seconds();
    if state.last_sampled_second == Some(second) {
        return CoreStep::running(Vec::new());
    }
    state.last_sampled_second = Some(second);

    CoreStep::running(vec![state.frame(FrameKind::Status)])
}

/// Swap in a freshly validated plan.
///
/// The clock and pins reset; timers are left alone; assignments for tasks
/// that no longer exist are dropped.
pub fn handle_plan_loaded(state: &mut SessionState, source: &str, tasks: Vec<Task>) -> CoreStep {
    let count = tasks.len();
    state.schedule = Schedule::build(tasks, &state.layout);
    state
        .assignments
        .retain_tasks(state.schedule.tasks().iter().map(|t| t.id.as_str()));
    state.clock.reset();
    state.pins.clear();
    state.error = None;
    state.last_sampled_second = None;

    info!(%source, tasks = count, lanes = state.schedule.lanes().len(), "plan loaded");

    CoreStep::running(vec![
        CoreCommand::Notify(format!("loaded {count} task(s) from {source}")),
        state.frame(FrameKind::Full),
    ])
}

/// Keep the current plan and surface the loader's message.
pub fn handle_plan_rejected(state: &mut SessionState, source: &str, message: String) -> CoreStep {
    warn!(%source, %message, "plan rejected; keeping current plan");
    state.error = Some(message.clone());
    CoreStep::running(vec![CoreCommand::Notify(format!(
        "could not load {source}: {message}"
    ))])
}
