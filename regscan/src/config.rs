use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{ScanError, ScanResult};

/// Settings for a scan run.
///
/// # Configuration Locations
///
/// Configuration is merged from these locations, later entries winning:
/// 1. Global `$HOME/.config/regscan/config.yaml`
/// 2. Local `.regscan.yaml` in the current directory
/// 3. Custom config file specified via `--config`
///
/// Command-line flags are applied last through [`ScanConfig::merge_with_cli`].
///
/// # Configuration Format
///
/// ```yaml
/// # Root directory to scan
/// root_path: "."
///
/// # Worker threads (default: CPU cores)
/// thread_count: 8
///
/// # How traversal errors are handled (lenient, strict)
/// walk_mode: lenient
///
/// # How invalid UTF-8 is handled (lossy, failfast)
/// encoding_mode: lossy
///
/// # Highlight matched lines
/// color: true
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory to start the walk from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Size of the worker pool scanning files
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// What to do with directory entries that cannot be read
    #[serde(default)]
    pub walk_mode: WalkMode,

    /// What to do with file contents that are not valid UTF-8
    #[serde(default)]
    pub encoding_mode: EncodingMode,

    /// Whether matched lines are highlighted in terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Traversal error policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkMode {
    /// Skip unreadable entries; an unreadable root yields no files
    #[default]
    Lenient,
    /// Abort the scan on the first traversal error
    Strict,
}

/// Decoding policy for file contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Replace invalid sequences with U+FFFD and keep scanning
    #[default]
    Lossy,
    /// Fail the file on the first invalid sequence
    FailFast,
}

impl std::str::FromStr for WalkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown walk mode '{other}'")),
        }
    }
}

impl std::str::FromStr for EncodingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lossy" => Ok(Self::Lossy),
            "failfast" => Ok(Self::FailFast),
            other => Err(format!("unknown encoding mode '{other}'")),
        }
    }
}

/// Values supplied on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_path: Option<PathBuf>,
    pub thread_count: Option<NonZeroUsize>,
    pub walk_mode: Option<WalkMode>,
    pub encoding_mode: Option<EncodingMode>,
    pub no_color: bool,
    pub log_level: Option<String>,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            thread_count: default_thread_count(),
            walk_mode: WalkMode::default(),
            encoding_mode: EncodingMode::default(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Creates a default configuration rooted at `root_path`
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    /// Loads configuration, layering `config_path` over the default locations.
    ///
    /// An explicit path must exist; the default locations are optional.
    pub fn load_from(config_path: Option<&Path>) -> ScanResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("regscan/config.yaml")),
            Some(PathBuf::from(".regscan.yaml")),
        ];

        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ScanError::config_error(e.to_string()))
    }

    /// Applies command-line values over the loaded configuration
    pub fn merge_with_cli(mut self, cli: ConfigOverrides) -> Self {
        if let Some(root_path) = cli.root_path {
            self.root_path = root_path;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(walk_mode) = cli.walk_mode {
            self.walk_mode = walk_mode;
        }
        if let Some(encoding_mode) = cli.encoding_mode {
            self.encoding_mode = encoding_mode;
        }
        if cli.no_color {
            self.color = false;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }
}
