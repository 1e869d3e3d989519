#![allow(dead_code)]

use cookplan::config::{ConfigFile, PersonConfig, RawConfigFile};
use cookplan::plan::Task;

/// Builder for a single `Task` to simplify test setup.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, lane: &str, start_min: f64, duration_min: f64) -> Self {
        Self {
            task: Task {
                id: id.to_string(),
                lane: lane.to_string(),
                title: id.to_string(),
                start_min,
                duration_min,
                description: String::new(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for a task list.
#[derive(Default)]
pub struct PlanBuilder {
    tasks: Vec<Task>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task with the given interval; the id doubles as the title.
    pub fn task(mut self, id: &str, lane: &str, start_min: f64, duration_min: f64) -> Self {
        self.tasks
            .push(TaskBuilder::new(id, lane, start_min, duration_min).build());
        self
    }

    pub fn with(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }
}

/// The three-task "Side" lane: A[0,65) B[3,15) C[16,46).
pub fn side_lane() -> Vec<Task> {
    PlanBuilder::new()
        .task("A", "Side", 0.0, 65.0)
        .task("B", "Side", 3.0, 12.0)
        .task("C", "Side", 16.0, 30.0)
        .build()
}

/// Builder for `ConfigFile`.
///
/// Starts from the defaults but with an empty roster, so tests add exactly
/// the people they need and get predictable ids.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                person: Vec::new(),
                ..RawConfigFile::default()
            },
        }
    }

    pub fn with_person(mut self, name: &str) -> Self {
        self.config.person.push(PersonConfig {
            name: name.to_string(),
            color: None,
        });
        self
    }

    pub fn with_timers(mut self, initial: usize) -> Self {
        self.config.timers.initial = initial;
        self
    }

    pub fn with_px_per_minute(mut self, px: f64) -> Self {
        self.config.layout.px_per_minute = px;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
