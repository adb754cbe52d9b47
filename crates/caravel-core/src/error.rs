use std::time::Duration;

use thiserror::Error;

use caravel_logs::LogError;
use caravel_model::LogEntry;

/// Fatal orchestration outcomes.
///
/// Every variant propagates to the `execute` caller unwrapped; there is no
/// partial-success state — either a full completion report or one of these.
#[derive(Debug, Error)]
pub enum OrchestrateError {
    /// Scheduler rejected the task specification. Never retried.
    #[error("scheduler rejected definition for family {family}: {reason}")]
    Registration { family: String, reason: String },

    /// Scheduler could not place an instance. Never retried.
    #[error("failed to launch task on cluster {cluster}: {reason}")]
    Launch { cluster: String, reason: String },

    /// A container was killed by the platform for exceeding its memory
    /// bound. Reported distinctly from application failure: it indicates a
    /// sizing problem, not a code defect.
    #[error("container killed for exceeding its memory limit: {reason}")]
    ResourceExhaustion { reason: String },

    /// Task stopped without the completion marker in its final log line.
    /// The error tail travels along so the caller can inspect it.
    #[error("task {task_arn} stopped without completion marker ({} tail entries)", tail.len())]
    ApplicationFailure {
        task_arn: String,
        tail: Vec<LogEntry>,
    },

    #[error("tasks did not stop within {0:?}")]
    DeadlineExceeded(Duration),

    #[error("orchestration canceled")]
    Canceled,

    /// Scheduler transport failure after retries were exhausted.
    #[error("scheduler unavailable: {0}")]
    Scheduler(String),

    #[error(transparent)]
    Logs(#[from] LogError),
}
