// src/pins.rs

use crate::plan::Task;

/// How many tasks can be pinned at once.
pub const PIN_CAPACITY: usize = 3;

/// Tasks pinned for quick reference, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinBoard {
    pinned: Vec<Task>,
}

impl PinBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pinned(&self) -> &[Task] {
        &self.pinned
    }

    /// Pin `task` at the front. Re-pinning moves it to the front; past
    /// capacity the oldest pin is dropped.
    pub fn pin(&mut self, task: Task) {
        self.pinned.retain(|t| t.id != task.id);
        self.pinned.insert(0, task);
        self.pinned.truncate(PIN_CAPACITY);
    }

    pub fn unpin(&mut self, task_id: &str) -> bool {
        let before = self.pinned.len();
        self.pinned.retain(|t| t.id != task_id);
        self.pinned.len() != before
    }

    pub fn clear(&mut self) {
        self.pinned.clear();
    }
}
