use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::matcher::PatternMatcher;
use super::processor::FileProcessor;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::patterns::PatternSet;
use crate::report::MatchSink;
use crate::results::ScanSummary;
use crate::walker::walk;

/// Scans every eligible file under `config.root_path` for `patterns`.
///
/// The file list is collected in full before scanning starts. Files are then
/// processed on a pool of `config.thread_count` workers, each file reporting
/// its matches to `sink` as they are found. A file that fails (unreadable,
/// undecodable, or reaching a pattern that does not compile) is logged and
/// counted in [`ScanSummary::files_failed`]; the other files are unaffected.
///
/// Only thread pool construction and strict-mode walk errors are returned.
pub fn scan(
    config: &ScanConfig,
    patterns: &PatternSet,
    sink: &dyn MatchSink,
) -> ScanResult<ScanSummary> {
    info!("Searching in directory: {}", config.root_path.display());

    let matcher = PatternMatcher::new(patterns);
    for (index, pattern, message) in matcher.invalid_patterns() {
        warn!(
            "Pattern {} '{}' does not compile, files reaching it will fail: {}",
            index + 1,
            pattern,
            message
        );
    }
    let processor = FileProcessor::new(matcher, config.encoding_mode);

    let files = walk(&config.root_path, config.walk_mode)?;

    let thread_count = config.thread_count.get();
    debug!("Scanning {} files on {} threads", files.len(), thread_count);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| ScanError::ThreadPool(e.to_string()))?;

    let mut summary = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let outcome = processor.process_file(path, sink);
                if let Err(e) = &outcome {
                    warn!("Error scanning {}: {}", path.display(), e);
                }
                let mut partial = ScanSummary::new();
                partial.add_file_result(&outcome);
                partial
            })
            .reduce(ScanSummary::new, ScanSummary::merge)
    });
    summary.pattern_count = patterns.len();

    processor.metrics().log_stats();

    info!(
        "Scan complete. Found {} matches in {} of {} files ({} failed)",
        summary.total_matches, summary.files_with_matches, summary.files_scanned, summary.files_failed
    );

    Ok(summary)
}
