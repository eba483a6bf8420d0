//! The scan engine.
//!
//! [`PatternMatcher`] compiles a [`PatternSet`](crate::patterns::PatternSet)
//! once, [`FileProcessor`] runs it over one file, and [`scan`] walks the tree
//! and spreads files across a rayon pool, folding per-file outcomes into a
//! [`ScanSummary`](crate::results::ScanSummary).
pub mod engine;
pub mod matcher;
pub mod processor;

pub use engine::scan;
pub use matcher::PatternMatcher;
pub use processor::FileProcessor;
