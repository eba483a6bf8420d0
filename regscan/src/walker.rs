use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::WalkMode;
use crate::errors::{ScanError, ScanResult};
use crate::filters::is_eligible;

/// Collects every eligible file under `root`.
///
/// The whole tree is walked before anything is returned. Hidden files and
/// ignore files get no special treatment; only [`is_eligible`] decides.
/// Symlinks are not followed, but a symlink that is not a directory is
/// returned like a regular file.
///
/// In [`WalkMode::Lenient`] unreadable entries are dropped and an unopenable
/// root produces an empty list. In [`WalkMode::Strict`] both abort the walk.
pub fn walk(root: &Path, mode: WalkMode) -> ScanResult<Vec<PathBuf>> {
    if let Err(e) = fs::metadata(root) {
        return match mode {
            WalkMode::Strict => Err(ScanError::walk_root(root, e)),
            WalkMode::Lenient => {
                warn!("Cannot open scan root {}: {}", root.display(), e);
                Ok(Vec::new())
            }
        };
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    debug!("Walking directory: {}", root.display());
    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => match mode {
                WalkMode::Strict => return Err(ScanError::walk(e.to_string())),
                WalkMode::Lenient => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            },
        };

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_eligible(entry.path(), is_dir) {
            files.push(entry.into_path());
        }
    }

    info!("Found {} files to scan", files.len());
    Ok(files)
}
