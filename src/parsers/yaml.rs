//! YAML parser
//!
//! Only the first document of a stream is searched. Documents may have a
//! mapping, a sequence or a scalar at their root.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{Result, VaripError};
use crate::core::flatten::{flatten, Node};
use crate::core::matcher::match_entries;
use crate::core::model::Match;
use crate::core::paths::normalize_path;
use crate::core::pattern::Pattern;
use crate::parsers::read_file;

/// Decode a YAML file, flatten it and keep the matching keys
pub fn parse(path: &Path, pattern: &Pattern) -> Result<Vec<Match>> {
    let path_str = normalize_path(path);
    let bytes = read_file(path)?;

    let document = first_document(&bytes).map_err(|source| VaripError::YamlDecode {
        path: path_str.clone(),
        source,
    })?;
    let Some(value) = document else {
        return Ok(Vec::new());
    };

    let flattened = flatten(&Node::from(value));
    Ok(match_entries(&flattened, pattern, &path_str))
}

/// First document of the stream; `None` when it is empty or a bare null
fn first_document(bytes: &[u8]) -> std::result::Result<Option<serde_yaml::Value>, serde_yaml::Error> {
    let Some(document) = serde_yaml::Deserializer::from_slice(bytes).next() else {
        return Ok(None);
    };
    match serde_yaml::Value::deserialize(document)? {
        serde_yaml::Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}
