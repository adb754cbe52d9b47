/// Fully qualified location of one task's log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub group: String,
    pub stream: String,
}

impl LogTarget {
    pub fn new(group: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            stream: stream.into(),
        }
    }

    /// Conventional awslogs-driver naming: group `/ecs/{log_group}` and
    /// stream `{prefix}/{container}/{task_id}`.
    pub fn for_task(log_group: &str, prefix: &str, container: &str, task_id: &str) -> Self {
        Self::new(
            format!("/ecs/{log_group}"),
            format!("{prefix}/{container}/{task_id}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_task_naming() {
        let target = LogTarget::for_task("batch", "ecs", "worker", "abc123");
        assert_eq!(target.group, "/ecs/batch");
        assert_eq!(target.stream, "ecs/worker/abc123");
    }
}
