//! JSON parser

use std::path::Path;

use crate::core::error::{Result, VaripError};
use crate::core::flatten::{flatten, Node};
use crate::core::matcher::match_entries;
use crate::core::model::Match;
use crate::core::paths::normalize_path;
use crate::core::pattern::Pattern;
use crate::parsers::read_file;

/// Decode a JSON file, flatten it and keep the matching keys.
///
/// A malformed document fails as a whole; no partial matches are returned.
pub fn parse(path: &Path, pattern: &Pattern) -> Result<Vec<Match>> {
    let path_str = normalize_path(path);
    let bytes = read_file(path)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| VaripError::JsonDecode {
            path: path_str.clone(),
            source,
        })?;

    let flattened = flatten(&Node::from(value));
    Ok(match_entries(&flattened, pattern, &path_str))
}
