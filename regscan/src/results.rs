/// Result types produced by a scan.
///
/// [`MatchRecord`]s are transient: the engine hands each one to a
/// [`MatchSink`](crate::report::MatchSink) as soon as it is found and keeps
/// only a count. [`FileResult`] is the per-file outcome and [`ScanSummary`]
/// folds those outcomes into run totals.
use std::path::{Path, PathBuf};

use crate::errors::ScanResult;

/// Maximum number of characters of a matched line shown in output
pub const DISPLAY_LINE_CHARS: usize = 100;

/// A single (line, pattern) match event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    /// The file the line came from
    pub path: &'a Path,
    /// 1-based line number
    pub line_number: usize,
    /// Full content of the matching line
    pub line: &'a str,
    /// Index of the matching pattern in the pattern set
    pub pattern_index: usize,
}

impl MatchRecord<'_> {
    /// The line cut down to at most [`DISPLAY_LINE_CHARS`] characters
    pub fn display_line(&self) -> &str {
        match self.line.char_indices().nth(DISPLAY_LINE_CHARS) {
            Some((idx, _)) => &self.line[..idx],
            None => self.line,
        }
    }
}

/// Outcome of scanning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// The path to the file
    pub path: PathBuf,
    /// Number of (line, pattern) match events in the file
    pub match_count: usize,
}

/// Aggregate totals for a scan run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total (line, pattern) match events across all files
    pub total_matches: usize,
    /// Files a scan task was run for, failed ones included
    pub files_scanned: usize,
    /// Files with at least one match
    pub files_with_matches: usize,
    /// Files whose scan returned an error
    pub files_failed: usize,
    /// Number of patterns the run used
    pub pattern_count: usize,
}

impl ScanSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Default::default()
    }

    /// Records the outcome of one scan task
    pub fn add_file_result(&mut self, outcome: &ScanResult<FileResult>) {
        self.files_scanned += 1;
        match outcome {
            Ok(file_result) => {
                if file_result.match_count > 0 {
                    self.total_matches += file_result.match_count;
                    self.files_with_matches += 1;
                }
            }
            Err(_) => self.files_failed += 1,
        }
    }

    /// Merges another partial summary into this one
    pub fn merge(mut self, other: ScanSummary) -> Self {
        self.total_matches += other.total_matches;
        self.files_scanned += other.files_scanned;
        self.files_with_matches += other.files_with_matches;
        self.files_failed += other.files_failed;
        self.pattern_count = self.pattern_count.max(other.pattern_count);
        self
    }
}
