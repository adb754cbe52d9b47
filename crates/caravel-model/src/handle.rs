use serde::{Deserialize, Serialize};

/// Versioned reference to a registered task definition.
///
/// Revisions are append-only scheduler-side; registering the same family
/// again yields a new revision and leaves prior ones addressable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionHandle {
    pub family: String,
    pub revision: u32,
    pub arn: String,
}

impl DefinitionHandle {
    /// The `family:revision` reference accepted by the run-task call.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.family, self.revision)
    }
}

/// Reference to a single launched task instance.
///
/// Opaque and scheduler-assigned; one-to-one with a launch, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHandle {
    pub cluster: String,
    pub task_id: String,
    pub task_arn: String,
}

impl TaskHandle {
    /// Build a handle from a task ARN, deriving the task id from the
    /// segment after the last `/`.
    pub fn from_arn(cluster: impl Into<String>, task_arn: impl Into<String>) -> Self {
        let task_arn = task_arn.into();
        let task_id = task_arn
            .rsplit('/')
            .next()
            .unwrap_or(task_arn.as_str())
            .to_string();
        Self {
            cluster: cluster.into(),
            task_id,
            task_arn,
        }
    }
}
