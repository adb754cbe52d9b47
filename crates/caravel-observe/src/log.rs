use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{LoggerConfig, LoggerError};

pub(crate) fn init_text(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = parse_filter(&cfg.level)?;
    let fmt_layer = fmt::layer()
        .with_ansi(cfg.use_color)
        .with_target(cfg.with_targets)
        .with_timer(local_timer());
    install(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

pub(crate) fn init_json(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = parse_filter(&cfg.level)?;
    let fmt_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(local_timer());
    install(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

fn parse_filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|_| LoggerError::InvalidLogLevel(level.to_string()))
}

fn local_timer() -> OffsetTime<Rfc3339> {
    // Falls back to UTC when the local offset is unavailable (e.g. inside
    // multi-threaded runtimes on some platforms).
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn install<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let message = e.to_string();
        if message.contains("SetGlobalDefaultError") {
            LoggerError::AlreadyInitialized
        } else {
            LoggerError::InitializationFailed(message)
        }
    })
}
