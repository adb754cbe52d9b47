use serde::{Deserialize, Serialize};

const DEFAULT_IMAGE: &str = "docker.io/python:3.9-slim-buster";
const DEFAULT_CPU: u32 = 256;
const DEFAULT_MEMORY_MB: u32 = 512;

/// Declarative description of a runnable container.
///
/// Immutable once submitted for registration; the scheduler persists each
/// submission as a new append-only definition revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Definition family the revision is registered under.
    pub family: String,
    /// Name of the single container in the definition.
    pub container_name: String,
    /// Command executed inside the container.
    pub command: Vec<String>,
    /// Image reference.
    pub image: String,
    /// CPU units reserved for the task.
    pub cpu: u32,
    /// Memory limit in megabytes. Exceeding it gets the container killed
    /// by the platform (see [`crate::OOM_REASON`]).
    pub memory_mb: u32,
    /// IAM-style role identifier the scheduler assumes to run the task.
    pub execution_role: String,
    /// Entrypoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Vec<String>>,
    /// Log group the container's stdout/stderr stream is written to.
    pub log_group: String,
}

impl TaskSpec {
    /// Create a spec with the default image and sizing.
    pub fn new(
        family: impl Into<String>,
        container_name: impl Into<String>,
        command: Vec<String>,
    ) -> Self {
        let family = family.into();
        Self {
            log_group: family.clone(),
            family,
            container_name: container_name.into(),
            command,
            image: DEFAULT_IMAGE.to_string(),
            cpu: DEFAULT_CPU,
            memory_mb: DEFAULT_MEMORY_MB,
            execution_role: String::new(),
            entrypoint: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_cpu(mut self, cpu: u32) -> Self {
        self.cpu = cpu;
        self
    }

    pub fn with_memory_mb(mut self, memory_mb: u32) -> Self {
        self.memory_mb = memory_mb;
        self
    }

    pub fn with_execution_role(mut self, role: impl Into<String>) -> Self {
        self.execution_role = role.into();
        self
    }

    pub fn with_entrypoint(mut self, entrypoint: Vec<String>) -> Self {
        self.entrypoint = Some(entrypoint);
        self
    }

    pub fn with_log_group(mut self, log_group: impl Into<String>) -> Self {
        self.log_group = log_group.into();
        self
    }
}
