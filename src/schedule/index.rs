// src/schedule/index.rs

use std::collections::BTreeMap;

use crate::plan::Task;

/// Tasks of one lane, in their original dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneTasks {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Group tasks by lane name.
///
/// Lanes come out in ascending lexicographic order of their name so the
/// display order is stable across reloads; within a lane the dataset order
/// is preserved. An empty input yields no lanes.
pub fn group_by_lane(tasks: &[Task]) -> Vec<LaneTasks> {
    let mut by_lane: BTreeMap<&str, Vec<Task>> = BTreeMap::new();

    for task in tasks {
        by_lane
            .entry(task.lane.as_str())
            .or_default()
            .push(task.clone());
    }

    by_lane
        .into_iter()
        .map(|(name, tasks)| LaneTasks {
            name: name.to_string(),
            tasks,
        })
        .collect()
}
