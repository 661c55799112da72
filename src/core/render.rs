//! Renderer module
//!
//! Renders a SearchReport to different output formats: text, jsonl, json

use colored::Colorize;
use std::path::Path;

use crate::core::model::{Match, ResultItem, SearchReport};
use crate::core::paths::normalize_path;
use crate::core::pattern::Pattern;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
    pub show_errors: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: false,
            color: true,
            show_errors: false,
        }
    }
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_show_errors(mut self, show_errors: bool) -> Self {
        self.show_errors = show_errors;
        self
    }
}

/// Renderer for search reports
pub struct Renderer<'a> {
    config: RenderConfig,
    pattern: &'a Pattern,
}

impl<'a> Renderer<'a> {
    pub fn new(config: RenderConfig, pattern: &'a Pattern) -> Self {
        Self { config, pattern }
    }

    /// Header announcing the search; only the text format has one
    pub fn render_banner(&self, root: &Path) -> Option<String> {
        if self.config.format != OutputFormat::Text {
            return None;
        }
        let banner = format!(
            "Searching for pattern '{}' in {}",
            self.pattern.as_str(),
            normalize_path(root)
        );
        Some(if self.config.color {
            banner.yellow().to_string()
        } else {
            banner
        })
    }

    /// Render the matches (and, for machine formats, the errors) for stdout
    pub fn render(&self, report: &SearchReport) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render per-file errors for stderr in the text format
    pub fn render_errors(&self, report: &SearchReport) -> String {
        if !self.config.show_errors || self.config.format != OutputFormat::Text {
            return String::new();
        }

        let mut output = String::new();
        for file_error in &report.errors {
            let line = format!("Error: {}", file_error.error);
            if self.config.color {
                output.push_str(&line.red().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
        output
    }

    fn items(&self, report: &SearchReport) -> Vec<ResultItem> {
        let mut items: Vec<ResultItem> = report.matches().cloned().map(ResultItem::Match).collect();
        if self.config.show_errors {
            items.extend(report.errors.iter().map(ResultItem::error));
        }
        items
    }

    /// Render as text grouped by file: the path, then one line per match
    fn render_text(&self, report: &SearchReport) -> String {
        let mut output = String::new();

        for file in &report.files {
            if self.config.color {
                output.push_str(&file.path.blue().to_string());
            } else {
                output.push_str(&file.path);
            }
            output.push('\n');

            for m in &file.matches {
                output.push_str(&self.render_match_line(m));
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }

    fn render_match_line(&self, m: &Match) -> String {
        if !self.config.color {
            return if m.has_line() {
                format!("{}: {} => {}", m.line_num, m.key, m.value)
            } else {
                format!("{} => {}", m.key, m.value)
            };
        }

        let key = self
            .pattern
            .highlight(&m.key, |s| s.bright_red().to_string());
        let value = m.value.dimmed();
        if m.has_line() {
            format!("{}: {} => {}", m.line_num.to_string().dimmed(), key, value)
        } else {
            format!("{} => {}", key, value)
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &SearchReport) -> String {
        let lines: Vec<String> = self
            .items(report)
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect();

        if lines.is_empty() {
            return String::new();
        }
        let mut output = lines.join(if self.config.pretty { "\n\n" } else { "\n" });
        output.push('\n');
        output
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &SearchReport) -> String {
        let items = self.items(report);
        let mut output = if self.config.pretty {
            serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
        };
        output.push('\n');
        output
    }
}
