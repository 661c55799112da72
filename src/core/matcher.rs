//! Filter a flattened mapping down to the keys matching a pattern

use crate::core::flatten::FlatMap;
use crate::core::model::Match;
use crate::core::pattern::Pattern;

/// Keep every entry whose key satisfies `pattern`.
///
/// Tree formats do not track source lines, so every match reports line 0.
/// Results come out sorted by key because `FlatMap` is ordered.
pub fn match_entries(flattened: &FlatMap, pattern: &Pattern, path: &str) -> Vec<Match> {
    flattened
        .iter()
        .filter(|(key, _)| pattern.is_match(key))
        .map(|(key, value)| Match::untracked(path, key.as_str(), value.as_str()))
        .collect()
}
