use anyhow::{Context, Result};
use clap::Parser;
use regscan::{
    scan, ConfigOverrides, EncodingMode, PatternSet, ScanConfig, ScanSummary, TerminalSink,
    WalkMode,
};
use std::{ffi::OsString, num::NonZeroUsize, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Report every line under a directory that matches any pattern in a pattern file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to search for files (recursively)
    #[arg(short = 'd', long = "dir")]
    dir: PathBuf,

    /// File containing regular expressions to search for, one per line
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Disable color output
    #[arg(long)]
    no_color: bool,

    /// Number of threads to use
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Abort on unreadable directory entries instead of skipping them
    #[arg(long)]
    strict: bool,

    /// How to handle invalid UTF-8 sequences (lossy|failfast)
    #[arg(long)]
    encoding: Option<EncodingMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Configuration file layered over the default locations
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let config = ScanConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(ConfigOverrides {
            root_path: Some(cli.dir),
            thread_count: cli.threads,
            walk_mode: cli.strict.then_some(WalkMode::Strict),
            encoding_mode: cli.encoding,
            no_color: cli.no_color,
            log_level: cli.log_level,
        });

    init_tracing(&config.log_level);

    let patterns = PatternSet::load(&cli.file)?;
    debug!("Loaded {} patterns from {}", patterns.len(), cli.file.display());
    let sink = TerminalSink::new(config.color);
    let summary = scan(&config, &patterns, &sink)?;

    print_summary(&summary);
    Ok(())
}

/// Accepts the single-dash `-no-color` spelling alongside `--no-color`
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-no-color" {
                OsString::from("--no-color")
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &ScanSummary) {
    println!("Files crawled: {}", summary.files_scanned);
    println!("Number of regexes: {}", summary.pattern_count);
    println!("Total matches: {}", summary.total_matches);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_single_dash_no_color() {
        let cli = parse(&["regscan-cli", "-d", "src", "-f", "patterns.txt", "-no-color"]);
        assert!(cli.no_color);

        let cli = parse(&["regscan-cli", "-d", "src", "-f", "patterns.txt", "--no-color"]);
        assert!(cli.no_color);

        let cli = parse(&["regscan-cli", "-d", "src", "-f", "patterns.txt"]);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_only_exact_flag_is_rewritten() {
        let args = normalize_args(["-d", "-no-colors", "-f", "-no-color"].map(OsString::from));
        assert_eq!(args, ["-d", "-no-colors", "-f", "--no-color"].map(OsString::from));
    }
}
