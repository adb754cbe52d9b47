use std::time::Duration;

use caravel_model::{Backoff, NetworkPlacement, RetryPolicy};

const DEFAULT_STREAM_PREFIX: &str = "ecs";

/// Status-poll schedule for `await_completion`.
///
/// Capped-exponential backoff between samples plus an overall deadline.
/// A remote task that never stops must surface as an error instead of
/// blocking the caller forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollConfig {
    pub backoff: Backoff,
    /// Overall deadline for the wait. `None` disables it.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            backoff: Backoff::new(Duration::from_secs(5), Duration::from_secs(60), 2.0),
            timeout: Some(Duration::from_secs(60 * 60)),
        }
    }
}

/// Explicit construction-time configuration for the orchestrator.
///
/// Cluster, placement and poll behavior travel here rather than living in
/// module-level defaults, so environments and test doubles can differ.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    pub cluster: String,
    /// Instances requested per launch.
    pub launch_count: u32,
    /// Log stream prefix used by the container log driver.
    pub stream_prefix: String,
    pub network: NetworkPlacement,
    pub poll: PollConfig,
    /// Retry policy for idempotent reads. Registration and launch are
    /// never retried.
    pub retry: RetryPolicy,
}

impl OrchestratorConfig {
    pub fn new(cluster: impl Into<String>, network: NetworkPlacement) -> Self {
        Self {
            cluster: cluster.into(),
            launch_count: 1,
            stream_prefix: DEFAULT_STREAM_PREFIX.to_string(),
            network,
            poll: PollConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_launch_count(mut self, count: u32) -> Self {
        self.launch_count = count;
        self
    }

    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_stream_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.stream_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> NetworkPlacement {
        NetworkPlacement::new(vec!["subnet-1".into()], vec!["sg-1".into()])
    }

    #[test]
    fn one_instance_by_default() {
        let cfg = OrchestratorConfig::new("data-ml", network());
        assert_eq!(cfg.launch_count, 1);
        assert_eq!(cfg.stream_prefix, "ecs");
    }

    #[test]
    fn default_poll_has_a_deadline() {
        let poll = PollConfig::default();
        assert!(poll.timeout.is_some());
        assert_eq!(poll.backoff.delay(0), Duration::from_secs(5));
        assert_eq!(poll.backoff.max, Duration::from_secs(60));
    }

    #[test]
    fn builder_overrides() {
        let cfg = OrchestratorConfig::new("data-ml", network())
            .with_launch_count(3)
            .with_stream_prefix("batch");
        assert_eq!(cfg.launch_count, 3);
        assert_eq!(cfg.stream_prefix, "batch");
    }
}
