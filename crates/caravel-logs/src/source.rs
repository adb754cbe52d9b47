use std::sync::Arc;

use async_trait::async_trait;

use caravel_model::{Cursor, LogEntry, Page};

use crate::{LogError, LogTarget};

/// Log stream backend (consumed interface).
///
/// Matches the shape of a get-log-events API: one timestamped page per call
/// plus a forward continuation token.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch one page of a log stream.
    ///
    /// With `start_from_head` set the read begins at the stream's earliest
    /// entry and `token` continues a previous forward read; otherwise the
    /// most recent page is returned and `token` is ignored.
    async fn get_log_events(
        &self,
        target: &LogTarget,
        start_from_head: bool,
        token: Option<Cursor>,
    ) -> Result<Page<LogEntry>, LogError>;
}

#[async_trait]
impl<S: LogSource + ?Sized> LogSource for &S {
    async fn get_log_events(
        &self,
        target: &LogTarget,
        start_from_head: bool,
        token: Option<Cursor>,
    ) -> Result<Page<LogEntry>, LogError> {
        (**self).get_log_events(target, start_from_head, token).await
    }
}

#[async_trait]
impl<S: LogSource + ?Sized> LogSource for Arc<S> {
    async fn get_log_events(
        &self,
        target: &LogTarget,
        start_from_head: bool,
        token: Option<Cursor>,
    ) -> Result<Page<LogEntry>, LogError> {
        (**self).get_log_events(target, start_from_head, token).await
    }
}
