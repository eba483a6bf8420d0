use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, trace};

use super::matcher::PatternMatcher;
use crate::config::EncodingMode;
use crate::errors::{ScanError, ScanResult};
use crate::metrics::ScanMetrics;
use crate::report::MatchSink;
use crate::results::{FileResult, MatchRecord};

/// Helper function to decode bytes into text according to encoding mode
fn decode_bytes<'a>(
    bytes: &'a [u8],
    path: &Path,
    encoding_mode: EncodingMode,
) -> ScanResult<Cow<'a, str>> {
    match encoding_mode {
        EncodingMode::FailFast => match std::str::from_utf8(bytes) {
            Ok(valid) => Ok(Cow::Borrowed(valid)),
            // Only the error path pays for the copy FromUtf8Error needs
            Err(_) => match String::from_utf8(bytes.to_vec()) {
                Ok(text) => Ok(Cow::Owned(text)),
                Err(e) => Err(ScanError::encoding_error(path, e)),
            },
        },
        EncodingMode::Lossy => {
            let text = String::from_utf8_lossy(bytes);
            if let Cow::Owned(_) = text {
                debug!("Invalid UTF-8 replaced in file: {}", path.display());
            }
            Ok(text)
        }
    }
}

/// Scans single files against a compiled pattern set
#[derive(Debug)]
pub struct FileProcessor {
    matcher: PatternMatcher,
    metrics: ScanMetrics,
    encoding_mode: EncodingMode,
}

impl FileProcessor {
    /// Creates a new FileProcessor with the given pattern matcher
    pub fn new(matcher: PatternMatcher, encoding_mode: EncodingMode) -> Self {
        Self {
            matcher,
            metrics: ScanMetrics::new(),
            encoding_mode,
        }
    }

    /// Gets the current scan metrics
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Reads `path` whole and tests every line against every pattern.
    ///
    /// Each (line, pattern) match increments the count once and is reported
    /// to `sink` before the next pattern is tried. Lines are split on `\n`
    /// only, so a trailing newline produces a final empty line and `\r` stays
    /// part of the line. Reaching a pattern that failed to compile aborts the
    /// file with [`ScanError::InvalidPattern`]; records already reported are
    /// not withdrawn.
    pub fn process_file(&self, path: &Path, sink: &dyn MatchSink) -> ScanResult<FileResult> {
        trace!("Processing file: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| ScanError::from_read_error(path, e))?;
        self.metrics.record_file_read(bytes.len() as u64);

        let contents = decode_bytes(&bytes, path, self.encoding_mode)?;

        let mut match_count = 0;
        let mut lines_scanned = 0;
        for (line_index, line) in contents.split('\n').enumerate() {
            lines_scanned += 1;
            for (pattern_index, strategy) in self.matcher.strategies().iter().enumerate() {
                if strategy.is_match(line)? {
                    match_count += 1;
                    sink.report(&MatchRecord {
                        path,
                        line_number: line_index + 1,
                        line,
                        pattern_index,
                    });
                }
            }
        }

        self.metrics
            .record_lines(lines_scanned, match_count as u64);
        trace!("Found {} matches in file {}", match_count, path.display());
        Ok(FileResult {
            path: path.to_path_buf(),
            match_count,
        })
    }
}
