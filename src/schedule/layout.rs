// src/schedule/layout.rs

//! Pure chart geometry derived from packed lanes.
//!
//! Lanes are stacked top-down in lane order. Within a lane, row `r` sits at
//! `lane_top + lane_padding + r * (row_height + row_gap)`. Horizontal
//! positions scale minutes by `px_per_minute` and are relative to the plot
//! area (the label column is to its left).

use serde::Serialize;

use crate::config::LayoutSection;
use crate::schedule::packer::PackedLane;
use crate::types::{PALETTE, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub task_id: TaskId,
    pub title: String,
    pub start_min: f64,
    pub duration_min: f64,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneGeometry {
    pub name: String,
    pub color: String,
    pub rows: usize,
    pub top: f64,
    pub height: f64,
    pub bars: Vec<BarGeometry>,
}

/// Upper bound on axis ticks; longer plans get a wider tick stride.
pub const MAX_AXIS_TICKS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTick {
    pub minute: u64,
    pub x: f64,
    /// Ticks on multiples of ten minutes are drawn solid.
    pub major: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub lanes: Vec<LaneGeometry>,
    /// Last task end, rounded up to a whole minute.
    pub max_end_min: f64,
    pub width: f64,
    pub height: f64,
    pub ticks: Vec<AxisTick>,
    pub px_per_minute: f64,
}

impl ChartLayout {
    /// Horizontal position of the "now" marker.
    pub fn marker_x(&self, minutes: f64) -> f64 {
        minutes * self.px_per_minute
    }

    pub fn lane(&self, name: &str) -> Option<&LaneGeometry> {
        self.lanes.iter().find(|l| l.name == name)
    }

    pub fn bar(&self, task_id: &str) -> Option<&BarGeometry> {
        self.lanes
            .iter()
            .flat_map(|l| l.bars.iter())
            .find(|b| b.task_id == task_id)
    }
}

/// Height of a lane block holding `rows` rows.
pub fn lane_height(rows: usize, c: &LayoutSection) -> f64 {
    let rows_f = rows as f64;
    rows_f * c.row_height + rows.saturating_sub(1) as f64 * c.row_gap + 2.0 * c.lane_padding
}

/// Compose absolute geometry for all lanes.
pub fn compose(lanes: &[PackedLane], c: &LayoutSection) -> ChartLayout {
    let mut cursor = 0.0;
    let mut out = Vec::with_capacity(lanes.len());

    for (idx, lane) in lanes.iter().enumerate() {
        let top = cursor;
        let height = lane_height(lane.rows, c);
        cursor += height;

        let bars = lane
            .tasks
            .iter()
            .map(|assigned| {
                let t = &assigned.task;
                BarGeometry {
                    task_id: t.id.clone(),
                    title: t.title.clone(),
                    start_min: t.start_min,
                    duration_min: t.duration_min,
                    row: assigned.row,
                    x: t.start_min * c.px_per_minute,
                    y: top + c.lane_padding + assigned.row as f64 * (c.row_height + c.row_gap),
                    width: (t.duration_min * c.px_per_minute).max(c.min_bar_width),
                    height: c.row_height,
                }
            })
            .collect();

        out.push(LaneGeometry {
            name: lane.name.clone(),
            color: PALETTE[idx % PALETTE.len()].to_string(),
            rows: lane.rows,
            top,
            height,
            bars,
        });
    }

    let max_end = lanes
        .iter()
        .flat_map(|l| l.tasks.iter())
        .map(|a| a.task.end_min())
        .fold(0.0_f64, f64::max);
    let max_end_min = max_end.ceil();

    let width = (max_end_min * c.px_per_minute + c.label_width).max(c.min_canvas_width);
    let height = cursor + c.top_axis_padding;

    ChartLayout {
        lanes: out,
        max_end_min,
        width,
        height,
        ticks: axis_ticks(max_end_min, c),
        px_per_minute: c.px_per_minute,
    }
}

/// Ticks every `tick_interval_min` minutes from 0 to `max_end_min` inclusive.
///
/// When that would exceed [`MAX_AXIS_TICKS`], the stride grows to a multiple
/// of the interval so the count stays within the bound.
pub fn axis_ticks(max_end_min: f64, c: &LayoutSection) -> Vec<AxisTick> {
    let interval = u64::from(c.tick_interval_min.max(1));
    // Float-to-int `as` saturates; the loader only admits finite extents.
    let last = max_end_min.max(0.0) as u64;
    let stride = (last / interval) / MAX_AXIS_TICKS + 1;
    let step = usize::try_from(interval.saturating_mul(stride)).unwrap_or(usize::MAX);

    (0..=last)
        .step_by(step)
        .map(|minute| AxisTick {
            minute,
            x: minute as f64 * c.px_per_minute,
            major: minute % 10 == 0,
        })
        .collect()
}
