use thiserror::Error;

use caravel_model::LogEntry;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log stream not found: {0}")]
    StreamNotFound(String),

    #[error("log source request failed: {0}")]
    Transient(String),

    /// The stream's final line was not the completion marker; only the
    /// error tail was retrieved and the run must be treated as a failure.
    #[error("task finished without completion marker ({} tail entries)", tail.len())]
    Incomplete { tail: Vec<LogEntry> },
}

impl LogError {
    /// Log fetches are idempotent reads; transient failures are safe to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, LogError::Transient(_))
    }
}
