use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use caravel_logs::{LogError, LogReader, LogSource, LogTarget, render};
use caravel_model::{DefinitionHandle, StopOutcome, TaskHandle, TaskSpec};

use crate::{
    OrchestrateError, OrchestratorConfig,
    scheduler::{Scheduler, TaskDescription},
};

/// Drives one-off tasks from registration to a classified, logged outcome.
///
/// Holds exactly one outstanding handle set at a time; handles are
/// processed sequentially when reporting logs.
pub struct Orchestrator<S, L> {
    scheduler: S,
    reader: LogReader<L>,
    cfg: OrchestratorConfig,
}

impl<S: Scheduler, L: LogSource> Orchestrator<S, L> {
    pub fn new(scheduler: S, reader: LogReader<L>, cfg: OrchestratorConfig) -> Self {
        Self {
            scheduler,
            reader,
            cfg,
        }
    }

    /// Submits the specification, returning the new definition revision.
    ///
    /// Performed exactly once per call; a rejection is fatal and never
    /// retried.
    #[instrument(level = "debug", skip(self, spec), fields(family = %spec.family))]
    pub async fn register_definition(
        &self,
        spec: &TaskSpec,
    ) -> Result<DefinitionHandle, OrchestrateError> {
        let definition = self
            .scheduler
            .register_definition(spec)
            .await
            .map_err(|e| OrchestrateError::Registration {
                family: spec.family.clone(),
                reason: e.to_string(),
            })?;
        info!(revision = definition.revision, "registered task definition");
        Ok(definition)
    }

    /// Launches `launch_count` instances of a definition (`family` or
    /// `family:revision`) under the configured placement.
    ///
    /// Performed exactly once per call; capacity or placement failures are
    /// fatal and never retried.
    pub async fn launch(&self, definition: &str) -> Result<Vec<TaskHandle>, OrchestrateError> {
        let handles = self
            .scheduler
            .run_task(
                &self.cfg.cluster,
                definition,
                &self.cfg.network,
                self.cfg.launch_count,
            )
            .await
            .map_err(|e| OrchestrateError::Launch {
                cluster: self.cfg.cluster.clone(),
                reason: e.to_string(),
            })?;
        info!(count = handles.len(), "launched tasks");
        Ok(handles)
    }

    /// Blocks until every handle's status is STOPPED.
    ///
    /// Samples status per tick with capped backoff between samples, honors
    /// the configured deadline and the cancellation token, and returns
    /// immediately when all handles are already stopped.
    pub async fn await_completion(
        &self,
        handles: &[TaskHandle],
        ctx: &CancellationToken,
    ) -> Result<(), OrchestrateError> {
        let arns: Vec<String> = handles.iter().map(|h| h.task_arn.clone()).collect();
        let deadline = self
            .cfg
            .poll
            .timeout
            .map(|t| tokio::time::Instant::now() + t);
        let mut tick: u32 = 0;
        loop {
            let descriptions = self.describe(&arns).await?;
            if descriptions.iter().all(|d| d.last_status.is_terminal()) {
                debug!(tick, "all tasks stopped");
                return Ok(());
            }
            let delay = self.cfg.poll.backoff.delay(tick);
            if let Some(deadline) = deadline
                && tokio::time::Instant::now() + delay >= deadline
            {
                return Err(OrchestrateError::DeadlineExceeded(
                    self.cfg.poll.timeout.unwrap_or_default(),
                ));
            }
            debug!(tick, ?delay, "tasks still active");
            tokio::select! {
                _ = ctx.cancelled() => return Err(OrchestrateError::Canceled),
                _ = tokio::time::sleep(delay) => {}
            }
            tick = tick.saturating_add(1);
        }
    }

    /// Fetches final descriptions and classifies them.
    ///
    /// Any stop reason carrying the out-of-memory marker is a fatal
    /// resource error, reported before any log retrieval is attempted.
    pub async fn classify(
        &self,
        handles: &[TaskHandle],
    ) -> Result<Vec<StopOutcome>, OrchestrateError> {
        let arns: Vec<String> = handles.iter().map(|h| h.task_arn.clone()).collect();
        let descriptions = self.describe(&arns).await?;
        let outcomes: Vec<StopOutcome> =
            descriptions.iter().map(TaskDescription::outcome).collect();
        if let Some(reason) = outcomes.iter().find_map(StopOutcome::exhaustion_reason) {
            return Err(OrchestrateError::ResourceExhaustion {
                reason: reason.to_string(),
            });
        }
        Ok(outcomes)
    }

    /// Register → launch → await → classify → log report, aborting on the
    /// first fatal error. Success means every task stopped, none was
    /// OOM-killed, and every log stream ended with the completion marker;
    /// the assembled logs are emitted as single buffered blocks.
    #[instrument(level = "info", skip(self, spec, ctx), fields(family = %spec.family, cluster = %self.cfg.cluster))]
    pub async fn execute(
        &self,
        spec: &TaskSpec,
        ctx: &CancellationToken,
    ) -> Result<Vec<TaskHandle>, OrchestrateError> {
        let definition = self.register_definition(spec).await?;
        let handles = self.launch(&definition.reference()).await?;
        self.await_completion(&handles, ctx).await?;
        let outcomes = self.classify(&handles).await?;

        for (handle, outcome) in handles.iter().zip(&outcomes) {
            let target = LogTarget::for_task(
                &spec.log_group,
                &self.cfg.stream_prefix,
                &spec.container_name,
                &handle.task_id,
            );
            match self.reader.report(&target).await {
                Ok(entries) => {
                    info!(task_arn = %handle.task_arn, "task log:\n{}", render(&entries));
                }
                Err(LogError::Incomplete { tail }) => {
                    warn!(task_arn = %handle.task_arn, "task log tail:\n{}", render(&tail));
                    return Err(OrchestrateError::ApplicationFailure {
                        task_arn: handle.task_arn.clone(),
                        tail,
                    });
                }
                Err(e) => return Err(e.into()),
            }
            debug!(
                task_arn = %handle.task_arn,
                stop_code = ?outcome.stop_code,
                stopped_reason = ?outcome.stopped_reason,
                "task outcome"
            );
        }
        Ok(handles)
    }

    async fn describe(&self, arns: &[String]) -> Result<Vec<TaskDescription>, OrchestrateError> {
        let mut attempt = 0;
        loop {
            match self.scheduler.describe_tasks(&self.cfg.cluster, arns).await {
                Err(e) if e.is_transient() && attempt + 1 < self.cfg.retry.attempts => {
                    warn!(attempt, error = %e, "describe failed; retrying");
                    tokio::time::sleep(self.cfg.retry.backoff.delay(attempt)).await;
                    attempt += 1;
                }
                Err(e) => return Err(OrchestrateError::Scheduler(e.to_string())),
                Ok(descriptions) => return Ok(descriptions),
            }
        }
    }
}
