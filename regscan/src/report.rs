use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::results::MatchRecord;

/// Receives match records as scan tasks find them.
///
/// Implementations are called concurrently from worker threads and must
/// serialize their own output.
pub trait MatchSink: Sync {
    fn report(&self, record: &MatchRecord<'_>);
}

/// Renders a record as `<path>:<line> Match: <line>`
pub fn format_record(record: &MatchRecord<'_>, color: bool) -> String {
    let prefix = format!("{}:{} Match: ", record.path.display(), record.line_number);
    if color {
        format!("{}{}", prefix, record.display_line().red())
    } else {
        format!("{}{}", prefix, record.display_line())
    }
}

/// Writes records to standard output
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl MatchSink for TerminalSink {
    fn report(&self, record: &MatchRecord<'_>) {
        let line = format_record(record, self.color);
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            debug!("Failed to write match for {}: {}", record.path.display(), e);
        }
    }
}

/// Owned copy of a [`MatchRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedMatch {
    pub path: PathBuf,
    pub line_number: usize,
    pub line: String,
    pub pattern_index: usize,
}

impl From<&MatchRecord<'_>> for ReportedMatch {
    fn from(record: &MatchRecord<'_>) -> Self {
        Self {
            path: record.path.to_path_buf(),
            line_number: record.line_number,
            line: record.line.to_string(),
            pattern_index: record.pattern_index,
        }
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<ReportedMatch>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected records, in arrival order
    pub fn into_records(self) -> Vec<ReportedMatch> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MatchSink for CollectingSink {
    fn report(&self, record: &MatchRecord<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_record_plain() {
        let record = MatchRecord {
            path: Path::new("src/config.py"),
            line_number: 7,
            line: "API_KEY = 'abc'",
            pattern_index: 0,
        };
        assert_eq!(
            format_record(&record, false),
            "src/config.py:7 Match: API_KEY = 'abc'"
        );
    }

    #[test]
    fn test_format_record_truncates() {
        let line = format!("{}{}", "a".repeat(100), "TAIL");
        let record = MatchRecord {
            path: Path::new("f.txt"),
            line_number: 1,
            line: &line,
            pattern_index: 0,
        };
        let formatted = format_record(&record, false);
        assert!(formatted.ends_with(&"a".repeat(100)));
        assert!(!formatted.contains("TAIL"));
    }

    #[test]
    fn test_format_record_colored_keeps_text() {
        let record = MatchRecord {
            path: Path::new("f.txt"),
            line_number: 2,
            line: "secret",
            pattern_index: 0,
        };
        let formatted = format_record(&record, true);
        assert!(formatted.starts_with("f.txt:2 Match: "));
        assert!(formatted.contains("secret"));
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(&MatchRecord {
            path: Path::new("a.txt"),
            line_number: 4,
            line: "token",
            pattern_index: 2,
        });

        assert_eq!(sink.len(), 1);
        let records = sink.into_records();
        assert_eq!(
            records,
            vec![ReportedMatch {
                path: PathBuf::from("a.txt"),
                line_number: 4,
                line: "token".to_string(),
                pattern_index: 2,
            }]
        );
    }
}
