//! Traversal policy: which entries are hidden, ignored or searchable

use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use std::path::Path;

use crate::core::paths::{base_name, is_hidden};

/// Directory names typically holding dependencies or build output.
///
/// Matching is substring containment against the traversed path, so a
/// directory such as `mybuild` or `tmpfiles` is pruned as well.
pub const DEFAULT_IGNORED_DIRECTORIES: &[&str] = &[
    "vendor",
    "node_modules",
    "__pycache__",
    "build",
    "dist",
    ".git",
    "tmp",
];

/// File name globs that gate which files are parsed
pub const SUPPORTED_FILE_PATTERNS: &[&str] = &[".env*", "*.json", "*.properties", "*.yml", "*.yaml"];

static SUPPORTED_FILES: Lazy<GlobSet> = Lazy::new(|| {
    let mut builder = GlobSetBuilder::new();
    for pattern in SUPPORTED_FILE_PATTERNS {
        builder.add(Glob::new(pattern).expect("supported file glob is valid"));
    }
    builder.build().expect("supported file globs compile")
});

/// Why an entry was left out of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct TraversalPolicy {
    pub show_hidden: bool,
    pub ignored_directories: Vec<String>,
    supported_files: GlobSet,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self {
            show_hidden: false,
            ignored_directories: DEFAULT_IGNORED_DIRECTORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            supported_files: SUPPORTED_FILES.clone(),
        }
    }
}

impl TraversalPolicy {
    pub fn new(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            ..Self::default()
        }
    }

    /// Replace the ignored directory substrings
    pub fn with_ignored_directories(mut self, names: Vec<String>) -> Self {
        self.ignored_directories = names;
        self
    }

    /// Decide whether an entry is excluded.
    ///
    /// `traversed` is the part of the path below the search root. Hidden
    /// and ignore rules only apply while `show_hidden` is off.
    ///
    /// The ignore list is a substring test on `traversed`, not on the
    /// absolute path, so a root that itself sits under `/tmp` or a `build`
    /// directory is still searched. Below the root, `mybuild` or
    /// `tmpfiles` are pruned just as the absolute-path check would.
    pub fn skip_reason(&self, path: &Path, traversed: &str) -> Option<SkipReason> {
        if self.show_hidden {
            return None;
        }
        if is_hidden(path) {
            return Some(SkipReason::Hidden);
        }
        if self
            .ignored_directories
            .iter()
            .any(|name| !name.is_empty() && traversed.contains(name.as_str()))
        {
            return Some(SkipReason::Ignored);
        }
        None
    }

    /// Whether the file's base name matches one of the supported globs
    pub fn is_supported(&self, path: &Path) -> bool {
        self.supported_files.is_match(base_name(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_files() {
        let policy = TraversalPolicy::default();
        assert!(policy.is_supported(Path::new("/p/.env")));
        assert!(policy.is_supported(Path::new("/p/.env.local")));
        assert!(policy.is_supported(Path::new("/p/app.json")));
        assert!(policy.is_supported(Path::new("/p/application.properties")));
        assert!(policy.is_supported(Path::new("/p/values.yml")));
        assert!(policy.is_supported(Path::new("/p/values.yaml")));
        assert!(!policy.is_supported(Path::new("/p/main.rs")));
        assert!(!policy.is_supported(Path::new("/p/config.toml")));
        assert!(!policy.is_supported(Path::new("/p/prod.env")));
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let policy = TraversalPolicy::default();
        assert_eq!(
            policy.skip_reason(Path::new("/p/.gitignore"), ".gitignore"),
            Some(SkipReason::Hidden)
        );
        assert_eq!(
            policy.skip_reason(Path::new("/p/.env.local"), ".env.local"),
            None
        );
    }

    #[test]
    fn test_ignored_directories_substring() {
        let policy = TraversalPolicy::default();
        assert_eq!(
            policy.skip_reason(Path::new("/p/node_modules"), "node_modules"),
            Some(SkipReason::Ignored)
        );
        assert_eq!(
            policy.skip_reason(Path::new("/p/mybuild"), "mybuild"),
            Some(SkipReason::Ignored)
        );
        assert_eq!(
            policy.skip_reason(Path::new("/p/tmpfiles/a.json"), "tmpfiles/a.json"),
            Some(SkipReason::Ignored)
        );
        assert_eq!(policy.skip_reason(Path::new("/p/config"), "config"), None);
    }

    #[test]
    fn test_show_hidden_disables_all_skips() {
        let policy = TraversalPolicy::new(true);
        assert_eq!(policy.skip_reason(Path::new("/p/.git"), ".git"), None);
        assert_eq!(
            policy.skip_reason(Path::new("/p/node_modules"), "node_modules"),
            None
        );
    }

    #[test]
    fn test_custom_ignored_directories() {
        let policy =
            TraversalPolicy::default().with_ignored_directories(vec!["secrets".to_string()]);
        assert_eq!(
            policy.skip_reason(Path::new("/p/secrets"), "secrets"),
            Some(SkipReason::Ignored)
        );
        assert_eq!(
            policy.skip_reason(Path::new("/p/node_modules"), "node_modules"),
            None
        );
    }

    #[test]
    fn test_ignore_check_ignores_root_location() {
        let policy = TraversalPolicy::default();
        assert_eq!(
            policy.skip_reason(Path::new("/tmp/build/project/app.json"), "app.json"),
            None
        );
        assert_eq!(
            policy.skip_reason(Path::new("/tmp/build/project/dist/app.json"), "dist/app.json"),
            Some(SkipReason::Ignored)
        );
    }

    #[test]
    fn test_every_supported_pattern_compiles() {
        assert_eq!(SUPPORTED_FILES.len(), SUPPORTED_FILE_PATTERNS.len());
    }
}
