use serde::{Deserialize, Serialize};

use crate::LogEntry;

const DEFAULT_MARKER: &str = "ECS END";

/// Explicit completion-signal contract between an application and the
/// orchestrator.
///
/// The application writes the marker as the last log line on successful
/// exit; the orchestrator probes the stream tail for it, since the
/// scheduler alone cannot distinguish application success from a crash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSignal {
    marker: String,
}

impl CompletionSignal {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// `true` if the entry's trimmed message exactly equals the marker.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        entry.message.trim() == self.marker
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}
