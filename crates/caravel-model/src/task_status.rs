use serde::{Deserialize, Serialize};

/// Lifecycle state of a launched task, as reported by the scheduler.
///
/// The scheduler's native lifecycle is collapsed to three states; the
/// orchestrator only cares about terminal vs non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been placed but not started yet.
    Pending,
    /// Task is currently executing.
    Running,
    /// Task reached its terminal state. No further transitions are possible.
    Stopped,
}

impl TaskStatus {
    /// Returns `true` if the task won't transition further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Stopped)
    }

    /// Returns `true` if the task is still pending or running.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}
