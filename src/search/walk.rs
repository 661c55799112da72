//! Directory traversal
//!
//! Uses walkdir for a depth-first walk. Hidden and ignored entries are
//! pruned with `filter_entry`, so none of their descendants are visited.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::VaripError;
use crate::core::model::SearchReport;
use crate::core::paths::normalize_path;
use crate::core::policy::{SkipReason, TraversalPolicy};

/// Walk `root` and collect every file that should be parsed.
///
/// Walk errors are recorded in `report` and never stop the traversal.
pub fn discover(root: &Path, policy: &TraversalPolicy, report: &mut SearchReport) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| keep_entry(root, entry, policy));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(normalize_path)
                    .unwrap_or_else(|| normalize_path(root));
                warn!(path = %path, error = %err, "Error walking directory");
                report.push_error(path.clone(), VaripError::Walk { path, source: err });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if !policy.is_supported(entry.path()) {
            debug!(path = %entry.path().display(), "Unsupported file type");
            continue;
        }

        files.push(entry.into_path());
    }

    files
}

fn keep_entry(root: &Path, entry: &DirEntry, policy: &TraversalPolicy) -> bool {
    // The root was chosen explicitly; only what lies below it is filtered
    if entry.depth() == 0 {
        return true;
    }

    if entry.path_is_symlink() {
        debug!(path = %entry.path().display(), "Skipping symlink");
        return false;
    }

    let traversed = entry
        .path()
        .strip_prefix(root)
        .map(normalize_path)
        .unwrap_or_else(|_| normalize_path(entry.path()));

    match policy.skip_reason(entry.path(), &traversed) {
        Some(SkipReason::Hidden) => {
            debug!(path = %entry.path().display(), "Skipping hidden entry");
            false
        }
        Some(SkipReason::Ignored) => {
            debug!(path = %entry.path().display(), "Skipping ignored entry");
            false
        }
        None => true,
    }
}
