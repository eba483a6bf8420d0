/// Path filtering for the walker.
///
/// Eligibility is decided from the path string alone. A path is rejected when
/// any [`DENYLIST`] entry occurs anywhere in it, so `logo.png.txt`,
/// `notes.md.bak` and everything under a `.git` directory are all skipped.
/// This is plain substring containment, not extension matching, and it is
/// case sensitive.
use std::path::Path;
use tracing::info;

/// Substrings marking binary, archive, media, document, lockfile and
/// version-control paths
pub const DENYLIST: &[&str] = &[
    ".exe", ".dll", ".png", ".md", ".ico", ".jpeg", ".zip", ".gz", ".7z", ".ttf", ".woff",
    ".woff2", ".eot", ".svg", ".gif", ".jpg", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt",
    ".pptx", ".mp3", ".mp4", ".avi", ".mov", ".wav", ".flac", ".webm", ".webp", "lock.json",
    ".lock", ".pack", ".tar", ".tar.gz", ".tar.xz", ".git",
];

/// Checks if any denylisted substring occurs in the path
pub fn is_denylisted(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    DENYLIST.iter().any(|marker| path_str.contains(marker))
}

/// Determines if an entry should be scanned.
///
/// Directories are rejected silently; denylisted files are logged.
pub fn is_eligible(path: &Path, is_dir: bool) -> bool {
    if is_dir {
        return false;
    }
    if is_denylisted(path) {
        info!("Skipping file: {}", path.display());
        return false;
    }
    true
}
