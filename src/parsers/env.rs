//! Line-oriented parser for `.env*` and `.properties` files
//!
//! Each line is split on its first `=`. Keys are already flat, so no
//! flattening happens here, and the 1-based line number is kept.

use std::path::Path;

use crate::core::error::Result;
use crate::core::model::Match;
use crate::core::paths::normalize_path;
use crate::core::pattern::Pattern;
use crate::parsers::read_file;

/// Parse an env-style file and return the assignments whose key matches
pub fn parse(path: &Path, pattern: &Pattern) -> Result<Vec<Match>> {
    let bytes = read_file(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_str(&content, &normalize_path(path), pattern))
}

/// Scan env-style content line by line
pub fn parse_str(content: &str, path: &str, pattern: &Pattern) -> Vec<Match> {
    let mut matches = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_comment(line) {
            continue;
        }
        // Lines without an assignment are not an error
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if pattern.is_match(key) {
            matches.push(Match::new(path, (idx + 1) as u32, key, value));
        }
    }

    matches
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#') || trimmed.starts_with('!')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_dotenv() {
        let pattern = Pattern::new("db").unwrap();
        let matches = parse_str("DB_HOST=localhost\nDB_PORT=5432\n", "/p/.env", &pattern);

        assert_eq!(
            matches,
            vec![
                Match::new("/p/.env", 1, "DB_HOST", "localhost"),
                Match::new("/p/.env", 2, "DB_PORT", "5432"),
            ]
        );
    }

    #[test]
    fn test_line_numbers_skip_blank_and_comments() {
        let content = "# database settings\n\nAPP=web\n  # DB_OLD=1\nDB_URL=postgres://db\n";
        let pattern = Pattern::new("db").unwrap();
        let matches = parse_str(content, "/p/.env", &pattern);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line_num, 5);
        assert_eq!(matches[0].key, "DB_URL");
        assert_eq!(matches[0].value, "postgres://db");
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let pattern = Pattern::new("url").unwrap();
        let matches = parse_str("URL=http://x?a=b&c=d", "/p/.env", &pattern);
        assert_eq!(matches[0].value, "http://x?a=b&c=d");
    }

    #[test]
    fn test_lines_without_equals_are_ignored() {
        let pattern = Pattern::new("key").unwrap();
        let matches = parse_str("just a KEY line\nexport KEY\n", "/p/.env", &pattern);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_no_trailing_newline_and_crlf() {
        let pattern = Pattern::new("b").unwrap();
        let matches = parse_str("A=1\r\nB=2", "/p/.env", &pattern);
        assert_eq!(matches, vec![Match::new("/p/.env", 2, "B", "2")]);
    }

    #[test]
    fn test_properties_keys_are_raw() {
        let content = "! comment\nspring.datasource.url=jdbc:mysql://db/dev\nspring.jpa.show-sql=true\n";
        let pattern = Pattern::new("sprIng").unwrap();
        let matches = parse_str(content, "/p/app.properties", &pattern);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].line_num, 2);
        assert_eq!(matches[0].key, "spring.datasource.url");
        assert_eq!(matches[1].line_num, 3);
    }

    #[test]
    fn test_parse_reads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".env.local");
        fs::write(&path, "SECRET=abc\nOTHER=1\n").unwrap();

        let pattern = Pattern::new("secret").unwrap();
        let matches = parse(&path, &pattern).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, normalize_path(&path));
        assert_eq!(matches[0].line_num, 1);
    }

    #[test]
    fn test_parse_tolerates_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, b"NAME=caf\xe9\nNAME_2=ok\n").unwrap();

        let pattern = Pattern::new("name").unwrap();
        let matches = parse(&path, &pattern).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].value, "ok");
    }
}
