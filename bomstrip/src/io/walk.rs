//! Directory traversal yielding candidate files.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::filter::{is_candidate, is_excluded_dir};
use crate::io::config::ScanConfig;

/// Collect regular files under `root` whose names match the allowlist.
///
/// Excluded directories are pruned before descent, so nothing beneath them is
/// ever read. Symlinks are not followed. Entries that cannot be read are
/// logged and skipped. The result is sorted by file name within each
/// directory.
pub fn candidate_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, &config.excluded_dirs));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if is_candidate(&name, &config.extensions) {
            files.push(entry.into_path());
        }
    }
    debug!(root = %root.display(), count = files.len(), "collected candidates");
    files
}

fn is_pruned(entry: &DirEntry, excluded: &[String]) -> bool {
    // The root itself is always scanned, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let pruned = is_excluded_dir(&name, excluded);
    if pruned {
        debug!(path = %entry.path().display(), "pruned directory");
    }
    pruned
}
