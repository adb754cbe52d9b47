use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized,

    #[error("logger initialization failed: {0}")]
    InitializationFailed(String),
}
