//! unidoc CLI - Render markdown as plain Unicode text.
//!
//! Reads markdown from a file or stdin and prints a markup-free rendition
//! that uses Unicode glyphs for headings, emphasis, lists, quotes and code.

mod commands;
mod error;
mod output;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, style_help};
use output::Output;

/// unidoc - Render markdown as plain Unicode text.
#[derive(Parser, Debug)]
#[command(name = "unidoc", version, about)]
struct Cli {
    #[command(flatten)]
    args: RenderArgs,
}

fn main() {
    let matches = Cli::command().after_help(style_help()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
