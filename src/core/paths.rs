//! Path helpers

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Base name of a path, or an empty string when it has none
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check if a path is hidden (starts with '.')
///
/// Dotenv files are never considered hidden: any name containing `.env`
/// stays visible.
pub fn is_hidden(path: &Path) -> bool {
    let name = base_name(path);
    name.starts_with('.') && !name.contains(".env")
}
