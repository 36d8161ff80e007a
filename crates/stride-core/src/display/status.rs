//! Task completion feedback.

use std::fmt;

use crate::models::TaskId;

/// Result of toggling one task in a session's completion set.
pub struct TaskStatus {
    pub task: TaskId,
    pub completed: bool,
}

impl TaskStatus {
    pub fn new(task: TaskId, completed: bool) -> Self {
        Self { task, completed }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Task `{}` marked as {}",
            self.task,
            if self.completed { "completed" } else { "not completed" }
        )
    }
}
