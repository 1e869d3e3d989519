// src/snapshot.rs

//! Render-facing view of the session.
//!
//! A [`Snapshot`] is everything a drawing layer needs for one frame:
//! lane and bar geometry, the clock marker, axis ticks and the live state
//! of timers, people, assignments and pins. It serializes to JSON for
//! external frontends and has a plain-text form for the terminal.

use std::fmt::Write as _;

use serde::Serialize;

use crate::clock::ClockModel;
use crate::format::{fmt_duration, fmt_marker, fmt_mmss, fmt_span};
use crate::people::{Assignments, Person, Roster};
use crate::pins::PinBoard;
use crate::schedule::{AxisTick, BarGeometry, Schedule};
use crate::timers::{DisplayState, TimerBank};
use crate::types::{PersonId, TimerId, TimerMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub clock: ClockView,
    pub canvas: CanvasView,
    pub lanes: Vec<LaneView>,
    pub ticks: Vec<AxisTick>,
    pub timers: Vec<TimerView>,
    pub people: Vec<Person>,
    pub pins: Vec<PinView>,
    /// Message from the last rejected plan load, until the next good one.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockView {
    pub minutes: f64,
    pub playing: bool,
    /// `m:ss` readout of elapsed logical time.
    pub elapsed: String,
    pub marker_x: f64,
    pub marker_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasView {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneView {
    pub name: String,
    pub color: String,
    pub top: f64,
    pub height: f64,
    pub rows: usize,
    /// People assigned to at least one task of the lane.
    pub people: Vec<PersonId>,
    pub bars: Vec<BarView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    #[serde(flatten)]
    pub geometry: BarGeometry,
    pub assignees: Vec<PersonId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    pub id: TimerId,
    pub name: String,
    pub mode: TimerMode,
    pub minutes: String,
    pub seconds: String,
    pub remaining_seconds: u64,
    pub remaining: String,
    pub running: bool,
    pub state: DisplayState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinView {
    pub task_id: String,
    pub title: String,
    pub lane: String,
    pub duration: String,
    pub span: String,
    pub description: String,
}

/// Borrowed session parts a snapshot is assembled from.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotSource<'a> {
    pub schedule: &'a Schedule,
    pub clock: &'a ClockModel,
    pub timers: &'a TimerBank,
    pub roster: &'a Roster,
    pub assignments: &'a Assignments,
    pub pins: &'a PinBoard,
    pub error: Option<&'a str>,
}

impl Snapshot {
    pub fn capture(src: SnapshotSource<'_>) -> Self {
        let layout = src.schedule.layout();
        let minutes = src.clock.current_minutes();

        let lanes = layout
            .lanes
            .iter()
            .map(|lane| {
                let task_ids: Vec<&str> = lane.bars.iter().map(|b| b.task_id.as_str()).collect();
                LaneView {
                    name: lane.name.clone(),
                    color: lane.color.clone(),
                    top: lane.top,
                    height: lane.height,
                    rows: lane.rows,
                    people: src
                        .roster
                        .people()
                        .iter()
                        .filter(|p| src.assignments.lane_has_person(&task_ids, &p.id))
                        .map(|p| p.id.clone())
                        .collect(),
                    bars: lane
                        .bars
                        .iter()
                        .map(|bar| BarView {
                            geometry: bar.clone(),
                            assignees: src.assignments.assignees(&bar.task_id),
                        })
                        .collect(),
                }
            })
            .collect();

        let timers = src
            .timers
            .timers()
            .iter()
            .map(|t| TimerView {
                id: t.id().to_string(),
                name: t.name().to_string(),
                mode: t.mode(),
                minutes: t.minutes_text().to_string(),
                seconds: t.seconds_text().to_string(),
                remaining_seconds: t.remaining_seconds(),
                remaining: fmt_mmss(t.remaining_seconds()),
                running: t.is_running(),
                state: t.display_state(),
            })
            .collect();

        let pins = src
            .pins
            .pinned()
            .iter()
            .map(|t| PinView {
                task_id: t.id.clone(),
                title: t.title.clone(),
                lane: t.lane.clone(),
                duration: fmt_duration(t.duration_min),
                span: fmt_span(t.start_min, t.end_min()),
                description: t.description.clone(),
            })
            .collect();

        Snapshot {
            clock: ClockView {
                minutes,
                playing: src.clock.is_playing(),
                elapsed: fmt_mmss(src.clock.elapsed_seconds()),
                marker_x: layout.marker_x(minutes),
                marker_label: fmt_marker(minutes),
            },
            canvas: CanvasView {
                width: layout.width,
                height: layout.height,
            },
            lanes,
            ticks: layout.ticks.clone(),
            timers,
            people: src.roster.people().to_vec(),
            pins,
            error: src.error.map(str::to_string),
        }
    }

    /// One line: elapsed clock plus any timers that are not idle.
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "[{}] {} (marker {})",
            if self.clock.playing { "playing" } else { "paused" },
            self.clock.elapsed,
            self.clock.marker_label
        );
        for t in self.timers.iter().filter(|t| t.state != DisplayState::Idle) {
            let _ = write!(line, " | {} {} {:?}", label_of(t), t.remaining, t.state);
        }
        line
    }

    /// Multi-line terminal view of the whole chart.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.status_line());
        if let Some(err) = &self.error {
            let _ = writeln!(out, "error: {err}");
        }

        let _ = writeln!(
            out,
            "canvas {}x{} px, {} lane(s)",
            self.canvas.width,
            self.canvas.height,
            self.lanes.len()
        );
        for lane in &self.lanes {
            let _ = writeln!(
                out,
                "lane {:?} ({} row(s), top {}, height {}) {}",
                lane.name, lane.rows, lane.top, lane.height, lane.color
            );
            for bar in &lane.bars {
                let g = &bar.geometry;
                let _ = write!(
                    out,
                    "  row {} | {:<28} {:>9} ({}) x={} w={}",
                    g.row,
                    g.title,
                    fmt_duration(g.duration_min),
                    fmt_span(g.start_min, g.start_min + g.duration_min),
                    g.x,
                    g.width
                );
                if !bar.assignees.is_empty() {
                    let _ = write!(out, " [{}]", self.person_names(&bar.assignees));
                }
                out.push('\n');
            }
        }

        if !self.timers.is_empty() {
            let _ = writeln!(out, "timers:");
            for t in &self.timers {
                let _ = writeln!(
                    out,
                    "  {} {} set {}:{} {:?}",
                    label_of(t),
                    t.remaining,
                    t.minutes,
                    t.seconds,
                    t.state
                );
            }
        }

        if !self.people.is_empty() {
            let names: Vec<String> = self
                .people
                .iter()
                .map(|p| format!("{} {} {}", p.id, p.name, p.color))
                .collect();
            let _ = writeln!(out, "people: {}", names.join(", "));
        }

        for pin in &self.pins {
            let _ = writeln!(
                out,
                "pinned: {} ({}) {} ({}) {}",
                pin.title, pin.lane, pin.duration, pin.span, pin.description
            );
        }

        out
    }

    fn person_names(&self, ids: &[PersonId]) -> String {
        ids.iter()
            .map(|id| {
                self.people
                    .iter()
                    .find(|p| &p.id == id)
                    .map_or(id.as_str(), |p| p.name.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn label_of(t: &TimerView) -> String {
    if t.name.is_empty() {
        t.id.clone()
    } else {
        format!("{} ({})", t.id, t.name)
    }
}
