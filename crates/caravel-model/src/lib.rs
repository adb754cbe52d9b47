mod task_spec;
pub use task_spec::TaskSpec;

mod task_status;
pub use task_status::TaskStatus;

mod handle;
pub use handle::{DefinitionHandle, TaskHandle};

mod outcome;
pub use outcome::StopOutcome;

mod log_entry;
pub use log_entry::LogEntry;

mod signal;
pub use signal::CompletionSignal;

mod network;
pub use network::NetworkPlacement;

mod backoff;
pub use backoff::{Backoff, RetryPolicy};

pub mod page;
pub use page::{Cursor, Page};

/// Fixed substring the platform writes into a container stop reason when it
/// kills the container for exceeding its memory limit.
pub const OOM_REASON: &str = "OutOfMemoryError: Container killed due to memory usage";
