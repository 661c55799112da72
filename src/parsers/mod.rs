//! Parsers module - One parser per configuration file format
//!
//! Provides:
//! - env: line-oriented `.env*` and `.properties` files
//! - json: JSON documents, flattened into dotted keys
//! - yaml: YAML documents, flattened into dotted keys

pub mod env;
pub mod json;
pub mod yaml;

use std::fs;
use std::path::Path;

use crate::core::error::{Result, VaripError};
use crate::core::model::Match;
use crate::core::paths::{base_name, normalize_path};
use crate::core::pattern::Pattern;

/// Format of a configuration file, chosen by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Env,
    Json,
    Yaml,
}

impl FileKind {
    /// Select a parser by base name prefix or path suffix (case-sensitive)
    pub fn detect(path: &Path) -> Option<Self> {
        let path_str = normalize_path(path);

        if base_name(path).starts_with(".env") || path_str.ends_with(".properties") {
            Some(FileKind::Env)
        } else if path_str.ends_with(".json") {
            Some(FileKind::Json)
        } else if path_str.ends_with(".yml") || path_str.ends_with(".yaml") {
            Some(FileKind::Yaml)
        } else {
            None
        }
    }
}

/// Parse a file with the parser matching its kind and collect matching keys
pub fn parse_file(path: &Path, pattern: &Pattern) -> Result<Vec<Match>> {
    match FileKind::detect(path) {
        Some(FileKind::Env) => env::parse(path, pattern),
        Some(FileKind::Json) => json::parse(path, pattern),
        Some(FileKind::Yaml) => yaml::parse(path, pattern),
        None => Err(VaripError::UnsupportedFileType {
            path: normalize_path(path),
        }),
    }
}

/// Read a whole file into memory; configuration files are small
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| VaripError::Io {
        path: normalize_path(path),
        source,
    })
}
