//! Result model
//!
//! Every parser maps what it finds to `Match` records before anything is
//! rendered. Line-oriented files carry a 1-based line number; tree formats
//! report line 0.

use serde::Serialize;

use crate::core::error::VaripError;

/// A single configuration key that satisfied the search pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Absolute path of the file the key was found in
    pub path: String,

    /// 1-based line number, or 0 when the format does not track lines
    #[serde(rename = "line")]
    pub line_num: u32,

    /// Dotted-path key
    pub key: String,

    /// Stringified value
    pub value: String,
}

impl Match {
    pub fn new(
        path: impl Into<String>,
        line_num: u32,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line_num,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a match from a tree format, where lines are not tracked
    pub fn untracked(
        path: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(path, 0, key, value)
    }

    pub fn has_line(&self) -> bool {
        self.line_num > 0
    }
}

/// All matches found in one file
#[derive(Debug, Clone)]
pub struct FileMatches {
    pub path: String,
    pub matches: Vec<Match>,
}

/// A non-fatal error recorded while searching a single file or entry
#[derive(Debug)]
pub struct FileError {
    pub path: String,
    pub error: VaripError,
}

/// Outcome of one search run
#[derive(Debug, Default)]
pub struct SearchReport {
    pub files: Vec<FileMatches>,
    pub errors: Vec<FileError>,
    pub files_scanned: usize,
}

impl SearchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the matches of one file; files without matches are dropped
    pub fn push_matches(&mut self, path: impl Into<String>, matches: Vec<Match>) {
        if matches.is_empty() {
            return;
        }
        self.files.push(FileMatches {
            path: path.into(),
            matches,
        });
    }

    pub fn push_error(&mut self, path: impl Into<String>, error: VaripError) {
        self.errors.push(FileError {
            path: path.into(),
            error,
        });
    }

    /// Sort files and errors by path for stable output
    pub fn sort(&mut self) {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        self.errors.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn match_count(&self) -> usize {
        self.files.iter().map(|f| f.matches.len()).sum()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over every match in file order
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.files.iter().flat_map(|f| f.matches.iter())
    }
}

/// Serializable item for the machine-readable formats
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultItem {
    Match(Match),
    Error {
        path: String,
        code: String,
        message: String,
    },
}

impl ResultItem {
    pub fn error(file_error: &FileError) -> Self {
        ResultItem::Error {
            path: file_error.path.clone(),
            code: file_error.error.code().to_string(),
            message: file_error.error.to_string(),
        }
    }
}
