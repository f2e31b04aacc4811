use std::fmt;

use chrono::{Local, NaiveDateTime};
use schemars::JsonSchema;
use serde::Serialize;

/// Timestamp layout used when rendering entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single timestamped logbook line.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

/// Append-only, unbounded event history owned by a record.
///
/// Only the owning record appends. Reads hand out copies.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Logbook {
    entries: Vec<LogEntry>,
}

impl Logbook {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Local::now().naive_local(),
            message: message.into(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.clone()
    }

    #[must_use]
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..].to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut logbook = Logbook::new();
        logbook.append("uno");
        logbook.append("dos");
        let messages: Vec<_> = logbook.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["uno", "dos"]);
    }

    #[test]
    fn entries_are_a_copy() {
        let mut logbook = Logbook::new();
        logbook.append("uno");
        let mut copy = logbook.entries();
        copy.clear();
        assert_eq!(logbook.len(), 1);
    }

    #[test]
    fn tail_clamps_to_length() {
        let mut logbook = Logbook::new();
        for i in 0..7 {
            logbook.append(format!("evento {i}"));
        }
        let tail = logbook.tail(5);
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].message, "evento 2");
        assert_eq!(logbook.tail(50).len(), 7);
        assert!(Logbook::new().tail(5).is_empty());
    }

    #[test]
    fn display_prefixes_timestamp() {
        let entry = LogEntry {
            timestamp: NaiveDateTime::parse_from_str("2025-03-01 08:15:00", TIMESTAMP_FORMAT)
                .unwrap(),
            message: "Bomba apagada".to_string(),
        };
        assert_eq!(entry.to_string(), "2025-03-01 08:15:00 - Bomba apagada");
    }
}
