use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use caravel_model::{DefinitionHandle, NetworkPlacement, StopOutcome, TaskHandle, TaskSpec, TaskStatus};

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The submitted specification is invalid (role, container definition,
    /// quota).
    #[error("rejected: {0}")]
    Rejected(String),

    /// No capacity or placement for the requested instances.
    #[error("capacity: {0}")]
    Capacity(String),

    /// Transport-level failure; safe to retry for idempotent reads.
    #[error("transport: {0}")]
    Transient(String),
}

impl SchedulerError {
    pub fn is_transient(&self) -> bool {
        matches!(self, SchedulerError::Transient(_))
    }
}

/// Terminal-or-not description of one launched task, as sampled by a poll
/// tick. The orchestrator never observes intermediate transitions, only
/// whichever state the sample catches.
#[derive(Debug, Clone)]
pub struct TaskDescription {
    pub task_arn: String,
    pub last_status: TaskStatus,
    pub stop_code: Option<String>,
    pub stopped_reason: Option<String>,
    pub container_reasons: Vec<String>,
}

impl TaskDescription {
    /// Read-only classification view of a terminal description.
    pub fn outcome(&self) -> StopOutcome {
        StopOutcome {
            stop_code: self.stop_code.clone(),
            stopped_reason: self.stopped_reason.clone(),
            container_reasons: self.container_reasons.clone(),
        }
    }
}

/// Cluster scheduler backend (consumed interface).
///
/// Registration persists an append-only definition revision scheduler-side;
/// run-task launches instances under an explicit network placement;
/// describe-tasks is an idempotent read.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn register_definition(
        &self,
        spec: &TaskSpec,
    ) -> Result<DefinitionHandle, SchedulerError>;

    async fn run_task(
        &self,
        cluster: &str,
        definition: &str,
        network: &NetworkPlacement,
        count: u32,
    ) -> Result<Vec<TaskHandle>, SchedulerError>;

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<TaskDescription>, SchedulerError>;
}

#[async_trait]
impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    async fn register_definition(
        &self,
        spec: &TaskSpec,
    ) -> Result<DefinitionHandle, SchedulerError> {
        (**self).register_definition(spec).await
    }

    async fn run_task(
        &self,
        cluster: &str,
        definition: &str,
        network: &NetworkPlacement,
        count: u32,
    ) -> Result<Vec<TaskHandle>, SchedulerError> {
        (**self).run_task(cluster, definition, network, count).await
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<TaskDescription>, SchedulerError> {
        (**self).describe_tasks(cluster, task_arns).await
    }
}
