//! varip - Search configuration keys across a directory tree
//!
//! varip provides:
//! - A directory walk that skips hidden entries and dependency/build directories
//! - Parsers for .env/.properties, JSON and YAML files
//! - Flattening of nested documents into dotted keys
//! - Text, JSONL and JSON output

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod parsers;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(cli.debug)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
