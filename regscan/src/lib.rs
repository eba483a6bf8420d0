pub mod config;
pub mod errors;
pub mod filters;
pub mod metrics;
pub mod patterns;
pub mod report;
pub mod results;
pub mod search;
pub mod walker;

pub use config::{ConfigOverrides, EncodingMode, ScanConfig, WalkMode};
pub use errors::{ScanError, ScanResult};
pub use patterns::PatternSet;
pub use report::{CollectingSink, MatchSink, TerminalSink};
pub use results::{FileResult, MatchRecord, ScanSummary};
pub use search::scan;
