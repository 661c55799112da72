//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use crate::core::pattern::Pattern;
use crate::core::policy::TraversalPolicy;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::search::{search, SearchConfig};

/// varip - search for configuration keys across .env, properties, JSON and YAML files.
#[derive(Parser, Debug)]
#[command(name = "varip")]
#[command(
    author,
    version,
    about,
    long_about = r#"varip searches configuration files for keys containing PATTERN.

Supported files: .env*, *.properties, *.json, *.yml, *.yaml

JSON and YAML documents are flattened into dotted keys before matching,
e.g. `app.deployment.environmentVariables[0].name`. Line numbers are
reported for .env and .properties files only.

PATTERN is matched literally (no regex syntax) and case-insensitively.

Examples:
    varip db
    varip database ./services
    varip --show-hidden --format jsonl redis /srv/app
"#
)]
pub struct Cli {
    /// Search term matched against configuration keys.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory (or single file) to search.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Include hidden entries and ignored directories.
    #[arg(
        long,
        long_help = "Include hidden files and directories and stop skipping ignored\n\
directories (vendor, node_modules, build, ...).\n\n\
By default, entries starting with '.' are skipped unless their name contains '.env'."
    )]
    pub show_hidden: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Print per-file errors (unreadable or malformed files).
    #[arg(
        long,
        long_help = "Report files that could not be read or decoded. Errors never stop the\n\
search; by default they are suppressed."
    )]
    pub show_errors: bool,

    /// Enable verbose debug logging on stderr.
    #[arg(long)]
    pub debug: bool,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        env = "VARIP_FORMAT",
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): matches grouped by file\n\
- jsonl: one JSON object per match\n\
- json: a single JSON array"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Directory name substrings to skip (replaces the defaults).
    #[arg(
        long = "ignore-dir",
        env = "VARIP_IGNORE_DIRS",
        value_name = "NAME",
        value_delimiter = ',',
        long_help = "Skip any path containing NAME. May be repeated or comma-separated.\n\n\
When given, replaces the default list:\n\
vendor, node_modules, __pycache__, build, dist, .git, tmp"
    )]
    pub ignore_dirs: Vec<String>,

    /// Do not skip any directories by name.
    #[arg(long)]
    pub no_ignore: bool,
}

impl Cli {
    /// Fold the flags into a traversal policy
    pub fn policy(&self) -> TraversalPolicy {
        let policy = TraversalPolicy::new(self.show_hidden);
        if self.no_ignore {
            policy.with_ignored_directories(Vec::new())
        } else if !self.ignore_dirs.is_empty() {
            policy.with_ignored_directories(self.ignore_dirs.clone())
        } else {
            policy
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        RenderConfig::new(format)
            .with_pretty(self.pretty)
            .with_color(!self.no_color)
            .with_show_errors(self.show_errors)
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::ERROR
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = cli.render_config();
    let pattern = Pattern::new(&cli.pattern)?;

    // Get absolute root path
    let root = cli.path.canonicalize().unwrap_or_else(|_| cli.path.clone());

    let config = SearchConfig::new(root, pattern, cli.policy());
    let renderer = Renderer::new(render_config, &config.pattern);

    if let Some(banner) = renderer.render_banner(&config.root) {
        println!("{}", banner);
    }

    let report = search(&config)?;

    print!("{}", renderer.render(&report));
    eprint!("{}", renderer.render_errors(&report));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_then_path() {
        let cli = Cli::try_parse_from(["varip", "pattern", "./path/testPath"]).unwrap();
        assert_eq!(cli.pattern, "pattern");
        assert_eq!(cli.path, PathBuf::from("./path/testPath"));
    }

    #[test]
    fn test_path_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["varip", "db"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.show_hidden);
        assert!(!cli.show_errors);
    }

    #[test]
    fn test_pattern_is_required() {
        assert!(Cli::try_parse_from(["varip"]).is_err());
    }

    #[test]
    fn test_render_config_from_flags() {
        let cli = Cli::try_parse_from([
            "varip",
            "--no-color",
            "--show-errors",
            "--format",
            "jsonl",
            "db",
        ])
        .unwrap();
        let config = cli.render_config();
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(!config.color);
        assert!(config.show_errors);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["varip", "--format", "md", "db"]).is_err());
    }

    #[test]
    fn test_policy_defaults() {
        let cli = Cli::try_parse_from(["varip", "db"]).unwrap();
        let policy = cli.policy();
        assert!(!policy.show_hidden);
        assert!(policy.ignored_directories.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_policy_custom_ignore_dirs() {
        let cli = Cli::try_parse_from(["varip", "--ignore-dir", "secrets,cache", "db"]).unwrap();
        assert_eq!(
            cli.policy().ignored_directories,
            vec!["secrets".to_string(), "cache".to_string()]
        );
    }

    #[test]
    fn test_policy_no_ignore() {
        let cli = Cli::try_parse_from(["varip", "--no-ignore", "--show-hidden", "db"]).unwrap();
        let policy = cli.policy();
        assert!(policy.show_hidden);
        assert!(policy.ignored_directories.is_empty());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["varip", "--debug", "db"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
    }
}
