// src/schedule/mod.rs

//! Task grouping, row packing and chart layout.
//!
//! - [`index`] groups tasks into lanes sorted by name.
//! - [`packer`] stacks overlapping tasks of a lane into rows.
//! - [`layout`] turns packed lanes into absolute geometry.
//!
//! Everything here is a pure function of the task list. A [`Schedule`] is
//! rebuilt from scratch whenever the plan changes; nothing is patched in
//! place, so row indices never go stale.

pub mod index;
pub mod layout;
pub mod packer;

use tracing::debug;

use crate::config::LayoutSection;
use crate::plan::Task;

pub use index::{LaneTasks, group_by_lane};
pub use layout::{AxisTick, BarGeometry, ChartLayout, LaneGeometry, MAX_AXIS_TICKS, compose};
pub use packer::{AssignedTask, PackedLane, max_overlap, pack_lane, pack_rows};

/// The loaded plan plus everything derived from it.
#[derive(Debug, Clone)]
pub struct Schedule {
    tasks: Vec<Task>,
    lanes: Vec<PackedLane>,
    layout: ChartLayout,
}

impl Schedule {
    pub fn build(tasks: Vec<Task>, constants: &LayoutSection) -> Self {
        let lanes: Vec<PackedLane> = group_by_lane(&tasks).into_iter().map(pack_lane).collect();
        let layout = compose(&lanes, constants);

        debug!(
            tasks = tasks.len(),
            lanes = lanes.len(),
            width = layout.width,
            height = layout.height,
            "schedule rebuilt"
        );

        Self {
            tasks,
            lanes,
            layout,
        }
    }

    /// Tasks in dataset order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn lanes(&self) -> &[PackedLane] {
        &self.lanes
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Ids of the tasks in `lane`; empty for an unknown lane.
    pub fn lane_task_ids(&self, lane: &str) -> Vec<String> {
        self.lanes
            .iter()
            .find(|l| l.name == lane)
            .map(|l| l.task_ids().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
