// src/schedule/packer.rs

//! Row packing for a single lane.
//!
//! Tasks are visited in order of start time (shorter first on ties, dataset
//! order after that) and each goes into the first row whose last task has
//! already ended. Visiting in start order makes this greedy colouring of the
//! interval graph optimal: the number of rows equals the largest number of
//! tasks running at the same instant.

use tracing::trace;

use crate::plan::Task;
use crate::schedule::index::LaneTasks;

/// A task together with the row it was packed into (0-based).
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedTask {
    pub task: Task,
    pub row: usize,
}

/// A lane after row packing.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedLane {
    pub name: String,
    /// Tasks in packing order (start ascending, then duration ascending).
    pub tasks: Vec<AssignedTask>,
    pub rows: usize,
}

impl PackedLane {
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|a| a.task.id.as_str())
    }
}

/// Pack every task of `lane` into rows.
pub fn pack_lane(lane: LaneTasks) -> PackedLane {
    let (tasks, rows) = pack_rows(lane.tasks);
    trace!(lane = %lane.name, rows, "packed lane");
    PackedLane {
        name: lane.name,
        tasks,
        rows,
    }
}

/// Assign a row to each task; returns the annotated tasks and the row count.
pub fn pack_rows(mut tasks: Vec<Task>) -> (Vec<AssignedTask>, usize) {
    // `sort_by` is stable, so identical intervals keep their dataset order.
    tasks.sort_by(|a, b| {
        a.start_min
            .total_cmp(&b.start_min)
            .then(a.duration_min.total_cmp(&b.duration_min))
    });

    // End time of the last task placed in each row.
    let mut row_ends: Vec<f64> = Vec::new();
    let mut assigned = Vec::with_capacity(tasks.len());

    for task in tasks {
        let end = task.end_min();
        let row = match row_ends.iter().position(|&row_end| row_end <= task.start_min) {
            Some(row) => {
                row_ends[row] = end;
                row
            }
            None => {
                row_ends.push(end);
                row_ends.len() - 1
            }
        };
        assigned.push(AssignedTask { task, row });
    }

    (assigned, row_ends.len())
}

/// Largest number of tasks that overlap at a single instant.
///
/// Used to cross-check [`pack_rows`]; the sweep processes ends before
/// starts at the same instant because intervals are half-open.
pub fn max_overlap(tasks: &[Task]) -> usize {
    let mut events: Vec<(f64, i32)> = Vec::with_capacity(tasks.len() * 2);
    for task in tasks {
        events.push((task.start_min, 1));
        events.push((task.end_min(), -1));
    }
    events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut current = 0i32;
    let mut best = 0i32;
    for (_, delta) in events {
        current += delta;
        best = best.max(current);
    }
    best as usize
}
