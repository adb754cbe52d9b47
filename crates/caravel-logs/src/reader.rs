use tracing::{debug, warn};

use caravel_model::{CompletionSignal, Cursor, LogEntry, Page, RetryPolicy, page};

use crate::{LogError, LogSource, LogTarget};

/// Assembles log reports for finished tasks.
///
/// Two read shapes: a single most-recent page for quick error-tail
/// inspection, and a full forward-paginated read used when the run carried
/// the completion marker and a complete audit log is wanted.
pub struct LogReader<S> {
    source: S,
    signal: CompletionSignal,
    retry: RetryPolicy,
}

impl<S: LogSource> LogReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            signal: CompletionSignal::default(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_signal(mut self, signal: CompletionSignal) -> Self {
        self.signal = signal;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Most recent page of the stream, no pagination.
    pub async fn fetch_error_tail(&self, target: &LogTarget) -> Result<Vec<LogEntry>, LogError> {
        Ok(self.fetch_page(target, false, None).await?.items)
    }

    /// Whole stream from its earliest entry, all pages concatenated in order.
    pub async fn fetch_full(&self, target: &LogTarget) -> Result<Vec<LogEntry>, LogError> {
        let entries = page::drain(|token| self.fetch_page(target, true, token)).await?;
        debug!(stream = %target.stream, entries = entries.len(), "drained full log stream");
        Ok(entries)
    }

    /// Probes whether the application signalled successful completion:
    /// the trimmed final tail message must equal the completion marker.
    pub async fn is_application_complete(&self, target: &LogTarget) -> Result<bool, LogError> {
        let tail = self.fetch_error_tail(target).await?;
        Ok(tail.last().is_some_and(|entry| self.signal.matches(entry)))
    }

    /// Assembles the report for one task's stream.
    ///
    /// Marker present: the full forward-paginated log, run not a failure.
    /// Marker absent: only the tail is retrieved and the run surfaces as
    /// [`LogError::Incomplete`], which the caller must propagate.
    pub async fn report(&self, target: &LogTarget) -> Result<Vec<LogEntry>, LogError> {
        if self.is_application_complete(target).await? {
            self.fetch_full(target).await
        } else {
            let tail = self.fetch_error_tail(target).await?;
            Err(LogError::Incomplete { tail })
        }
    }

    async fn fetch_page(
        &self,
        target: &LogTarget,
        start_from_head: bool,
        token: Option<Cursor>,
    ) -> Result<Page<LogEntry>, LogError> {
        let mut attempt = 0;
        loop {
            match self
                .source
                .get_log_events(target, start_from_head, token.clone())
                .await
            {
                Err(e) if e.is_transient() && attempt + 1 < self.retry.attempts => {
                    warn!(stream = %target.stream, attempt, error = %e, "log fetch failed; retrying");
                    tokio::time::sleep(self.retry.backoff.delay(attempt)).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

/// Renders entries as one buffered block, one `[timestamp] message` line
/// per entry. Callers emit the block whole so pagination stays invisible.
pub fn render(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}
