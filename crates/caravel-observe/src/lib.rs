mod config;
pub use config::LoggerConfig;

mod error;
pub use error::LoggerError;

mod format;
pub use format::LoggerFormat;

mod log;

/// Installs the global tracing subscriber for the selected format.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => log::init_text(cfg),
        LoggerFormat::Json => log::init_json(cfg),
    }
}
