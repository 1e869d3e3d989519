// src/people/assignment.rs

//! Many-to-many relation between tasks and the people responsible for them.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::types::{PersonId, TaskId};

/// Task id -> set of person ids. Empty sets are never stored, so "no entry"
/// and "nobody assigned" are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    by_task: BTreeMap<TaskId, BTreeSet<PersonId>>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_assigned(&self, task_id: &str, person_id: &str) -> bool {
        self.by_task
            .get(task_id)
            .is_some_and(|people| people.contains(person_id))
    }

    /// People on a task, in id order.
    pub fn assignees(&self, task_id: &str) -> Vec<PersonId> {
        self.by_task
            .get(task_id)
            .map(|people| people.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether any of the given tasks carries the person.
    pub fn lane_has_person<S: AsRef<str>>(&self, lane_tasks: &[S], person_id: &str) -> bool {
        lane_tasks
            .iter()
            .any(|task_id| self.is_assigned(task_id.as_ref(), person_id))
    }

    /// Add the person to the task if absent, remove them if present.
    pub fn toggle_task(&mut self, task_id: &str, person_id: &str) {
        if self.is_assigned(task_id, person_id) {
            self.unassign(task_id, person_id);
        } else {
            self.assign(task_id, person_id);
        }
    }

    /// Bulk toggle across a lane.
    ///
    /// If the person is on every task (and there is at least one), they are
    /// removed from all of them. Otherwise they are added to each task that
    /// lacks them, so a partially assigned lane becomes fully assigned.
    pub fn toggle_lane<S: AsRef<str>>(&mut self, lane_tasks: &[S], person_id: &str) {
        let all_assigned = !lane_tasks.is_empty()
            && lane_tasks
                .iter()
                .all(|task_id| self.is_assigned(task_id.as_ref(), person_id));

        for task_id in lane_tasks {
            if all_assigned {
                self.unassign(task_id.as_ref(), person_id);
            } else {
                self.assign(task_id.as_ref(), person_id);
            }
        }

        debug!(
            person = %person_id,
            tasks = lane_tasks.len(),
            removed = all_assigned,
            "lane assignment toggled"
        );
    }

    /// Strip the person from every task.
    pub fn remove_person(&mut self, person_id: &str) {
        self.by_task.retain(|_, people| {
            people.remove(person_id);
            !people.is_empty()
        });
    }

    /// Drop entries for tasks not in `task_ids` (after a plan reload).
    pub fn retain_tasks<'a>(&mut self, task_ids: impl IntoIterator<Item = &'a str>) {
        let keep: BTreeSet<&str> = task_ids.into_iter().collect();
        self.by_task.retain(|task_id, _| keep.contains(task_id.as_str()));
    }

    /// Iterate `(task_id, person_ids)` for every non-empty entry.
    pub fn iter(&self) -> impl Iterator<Item = (&TaskId, &BTreeSet<PersonId>)> {
        self.by_task.iter()
    }

    fn assign(&mut self, task_id: &str, person_id: &str) {
        self.by_task
            .entry(task_id.to_string())
            .or_default()
            .insert(person_id.to_string());
    }

    fn unassign(&mut self, task_id: &str, person_id: &str) {
        if let Some(people) = self.by_task.get_mut(task_id) {
            people.remove(person_id);
            if people.is_empty() {
                self.by_task.remove(task_id);
            }
        }
    }
}
