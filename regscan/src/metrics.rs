use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Tracks work done by scan tasks
#[derive(Debug, Clone, Default)]
pub struct ScanMetrics {
    files_read: Arc<AtomicU64>,
    bytes_read: Arc<AtomicU64>,
    lines_scanned: Arc<AtomicU64>,
    match_events: Arc<AtomicU64>,
}

impl ScanMetrics {
    /// Creates a new ScanMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file whose contents were loaded
    pub fn record_file_read(&self, bytes: u64) {
        self.files_read.fetch_add(1, Ordering::Relaxed);
        let total = self.bytes_read.fetch_add(bytes, Ordering::Relaxed) + bytes;
        debug!("Read {} bytes, total: {} bytes", bytes, total);
    }

    /// Records lines and match events for a finished file
    pub fn record_lines(&self, lines: u64, matches: u64) {
        self.lines_scanned.fetch_add(lines, Ordering::Relaxed);
        self.match_events.fetch_add(matches, Ordering::Relaxed);
    }

    /// Gets a snapshot of the counters
    pub fn get_stats(&self) -> ScanStats {
        ScanStats {
            files_read: self.files_read.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            lines_scanned: self.lines_scanned.load(Ordering::Relaxed),
            match_events: self.match_events.load(Ordering::Relaxed),
        }
    }

    /// Logs the current counters
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        debug!(
            "Scan statistics: {} files read, {} bytes, {} lines scanned, {} match events",
            stats.files_read, stats.bytes_read, stats.lines_scanned, stats.match_events
        );
    }
}

/// Point-in-time copy of [`ScanMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_read: u64,
    pub bytes_read: u64,
    pub lines_scanned: u64,
    pub match_events: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_record_counts() {
        let metrics = ScanMetrics::new();
        metrics.record_file_read(100);
        metrics.record_file_read(50);
        metrics.record_lines(12, 3);

        let stats = metrics.get_stats();
        assert_eq!(stats.files_read, 2);
        assert_eq!(stats.bytes_read, 150);
        assert_eq!(stats.lines_scanned, 12);
        assert_eq!(stats.match_events, 3);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = ScanMetrics::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_file_read(1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.get_stats().files_read, 400);
        assert_eq!(metrics.get_stats().bytes_read, 400);
    }
}
