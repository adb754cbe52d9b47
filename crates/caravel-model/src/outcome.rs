use serde::{Deserialize, Serialize};

use crate::OOM_REASON;

/// Read-only view of a task's terminal description, used for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOutcome {
    /// Scheduler stop code, when one was reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_code: Option<String>,
    /// Free-text stop reason for the task as a whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_reason: Option<String>,
    /// Per-container stop reasons, in container order.
    pub container_reasons: Vec<String>,
}

impl StopOutcome {
    /// The first stop reason that indicates an out-of-memory kill.
    ///
    /// An OOM kill is a sizing problem, not a code defect, so it is
    /// classified separately from application failure.
    pub fn exhaustion_reason(&self) -> Option<&str> {
        self.stopped_reason
            .as_deref()
            .into_iter()
            .chain(self.container_reasons.iter().map(String::as_str))
            .find(|reason| reason.contains(OOM_REASON))
    }

    pub fn is_resource_exhausted(&self) -> bool {
        self.exhaustion_reason().is_some()
    }
}
