mod config;
pub use config::{OrchestratorConfig, PollConfig};

mod error;
pub use error::OrchestrateError;

mod scheduler;
pub use scheduler::{Scheduler, SchedulerError, TaskDescription};

mod orchestrator;
pub use orchestrator::Orchestrator;
