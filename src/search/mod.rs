//! Search module - Traversal, dispatch and aggregation
//!
//! Provides:
//! - walk: directory traversal with hide/ignore pruning
//! - search: parse every discovered file and collect matches
//!
//! Discovery is always a sequential walk. With the `parallel` feature the
//! discovered files are parsed on the rayon pool; results are sorted by
//! path either way.

pub mod walk;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::error::{Result, VaripError};
use crate::core::model::{Match, SearchReport};
use crate::core::paths::normalize_path;
use crate::core::pattern::Pattern;
use crate::core::policy::TraversalPolicy;
use crate::parsers::parse_file;

/// Immutable settings for one search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub root: PathBuf,
    pub pattern: Pattern,
    pub policy: TraversalPolicy,
}

impl SearchConfig {
    pub fn new(root: impl Into<PathBuf>, pattern: Pattern, policy: TraversalPolicy) -> Self {
        Self {
            root: root.into(),
            pattern,
            policy,
        }
    }
}

/// Search every supported file under the root.
///
/// Fails only when the root does not exist. Per-file failures are
/// collected into the report and the walk continues.
pub fn search(config: &SearchConfig) -> Result<SearchReport> {
    if fs::metadata(&config.root).is_err() {
        return Err(VaripError::NotFound {
            path: normalize_path(&config.root),
        });
    }

    let mut report = SearchReport::new();
    let files = walk::discover(&config.root, &config.policy, &mut report);
    report.files_scanned = files.len();

    for (path, outcome) in files.iter().zip(parse_all(&files, &config.pattern)) {
        let path = normalize_path(path);
        match outcome {
            Ok(matches) => report.push_matches(path, matches),
            Err(err) => {
                warn!(path = %path, error = %err, "Error searching in file");
                report.push_error(path, err);
            }
        }
    }

    report.sort();

    debug!(
        files_scanned = report.files_scanned,
        files_matched = report.files.len(),
        matches = report.match_count(),
        errors = report.errors.len(),
        "Search finished"
    );

    Ok(report)
}

#[cfg(feature = "parallel")]
fn parse_all(files: &[PathBuf], pattern: &Pattern) -> Vec<Result<Vec<Match>>> {
    use rayon::prelude::*;

    files
        .par_iter()
        .map(|path| parse_one(path, pattern))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn parse_all(files: &[PathBuf], pattern: &Pattern) -> Vec<Result<Vec<Match>>> {
    files.iter().map(|path| parse_one(path, pattern)).collect()
}

fn parse_one(path: &Path, pattern: &Pattern) -> Result<Vec<Match>> {
    debug!(path = %path.display(), "Parsing file");
    parse_file(path, pattern)
}
