use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::errors::{ScanError, ScanResult};

/// Ordered, immutable list of pattern strings.
///
/// Patterns are kept verbatim; syntax is only checked when a
/// [`PatternMatcher`](crate::search::PatternMatcher) compiles them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Reads one pattern per line from `path`, skipping empty lines.
    ///
    /// Both `\n` and `\r\n` terminate a line.
    pub fn load(path: &Path) -> ScanResult<Self> {
        let file = File::open(path).map_err(|e| ScanError::pattern_file(path, e))?;
        let mut reader = BufReader::new(file);
        let mut patterns = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| ScanError::pattern_file(path, e))?;
            if read == 0 {
                break;
            }
            let pattern = line.strip_suffix('\n').unwrap_or(&line);
            let pattern = pattern.strip_suffix('\r').unwrap_or(pattern);
            if !pattern.is_empty() {
                patterns.push(pattern.to_string());
            }
        }

        debug!("Loaded {} patterns from {}", patterns.len(), path.display());
        Ok(Self { patterns })
    }

    /// Builds a set from in-memory lines using the same empty-line rule as [`PatternSet::load`]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: lines
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }
}
