// src/plan/model.rs

use serde::Serialize;

use crate::types::TaskId;

/// One step of the cooking plan.
///
/// Intervals are half-open: a task occupies `[start_min, end_min())`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: TaskId,
    /// Lane (recipe) the task belongs to; `parent` in the dataset.
    pub lane: String,
    pub title: String,
    pub start_min: f64,
    pub duration_min: f64,
    pub description: String,
}

impl Task {
    pub fn end_min(&self) -> f64 {
        self.start_min + self.duration_min
    }

    /// Whether the two half-open intervals share any instant.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_min < other.end_min() && other.start_min < self.end_min()
    }
}
