//! Search pattern
//!
//! User input is always treated as a literal, case-insensitive substring.

use regex::{Captures, Regex};

use crate::core::error::Result;

#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a user-supplied search term, escaping all regex metacharacters
    pub fn new(raw: &str) -> Result<Self> {
        let regex = Regex::new(&format!("(?i){}", regex::escape(raw)))?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// The search term as the user typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Rewrite every occurrence of the pattern in `text` with `paint`
    pub fn highlight<F>(&self, text: &str, paint: F) -> String
    where
        F: Fn(&str) -> String,
    {
        if self.raw.is_empty() {
            return text.to_string();
        }
        self.regex
            .replace_all(text, |caps: &Captures| paint(&caps[0]))
            .into_owned()
    }
}
