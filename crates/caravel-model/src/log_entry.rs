use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:6]");

/// A single timestamped line from a task's log stream.
///
/// Entries are never mutated, only appended while a report is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Source timestamp, epoch milliseconds.
    pub timestamp: i64,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    fn wall_clock(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.timestamp) * 1_000_000).ok()
    }
}

impl fmt::Display for LogEntry {
    /// Renders `[wall-clock timestamp] message`, falling back to the raw
    /// epoch-millis value if the timestamp is out of range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stamp = self.wall_clock().and_then(|t| t.format(STAMP).ok());
        match stamp {
            Some(stamp) => write!(f, "[{stamp}] {}", self.message),
            None => write!(f, "[{}] {}", self.timestamp, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_wall_clock_time() {
        let entry = LogEntry::new(0, "hello");
        assert_eq!(entry.to_string(), "[1970-01-01 00:00:00,000000] hello");
    }

    #[test]
    fn renders_millisecond_precision() {
        let entry = LogEntry::new(1_500, "tick");
        assert_eq!(entry.to_string(), "[1970-01-01 00:00:01,500000] tick");
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_raw_value() {
        let entry = LogEntry::new(i64::MAX, "weird");
        assert_eq!(entry.to_string(), format!("[{}] weird", i64::MAX));
    }

    #[test]
    fn serde_roundtrip() {
        let entry = LogEntry::new(1_700_000_000_000, "done");
        let json = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
