// regexlab/src/cli.rs
//! This file defines the command-line interface (CLI) for the regexlab
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regexlab",
    version = env!("CARGO_PKG_VERSION"),
    about = "Test regular expressions from the terminal",
    long_about = "Regexlab is a command-line regular-expression tester. It evaluates a pattern against sample text and reports every match with its capture groups, a replacement preview, and an escaped highlight rendering, and it can pack the whole editor state into a URL-safe share token.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `regexlab` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluates a pattern against sample text and reports all matches.
    #[command(about = "Evaluates a pattern against sample text and reports all matches.")]
    Test(TestCommand),

    /// Encodes or decodes shareable editor-state tokens.
    #[command(subcommand, about = "Encodes or decodes shareable editor-state tokens.")]
    Share(ShareCommand),

    /// Inspects and exchanges the preset catalog.
    #[command(subcommand, about = "Inspects and exchanges the preset catalog.")]
    Presets(PresetsCommand),
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestCommand {
    /// The regular expression pattern to evaluate.
    #[arg(long, short = 'p', value_name = "PATTERN", help = "The regular expression pattern to evaluate.")]
    pub pattern: String,

    /// Flag characters; unsupported characters are silently dropped.
    #[arg(long, short = 'f', value_name = "FLAGS", default_value = "", help = "Flag characters (g, i, m, s, u, y, d); unsupported characters are dropped.")]
    pub flags: String,

    /// Sample text given inline.
    #[arg(long, short = 't', value_name = "TEXT", help = "Sample text (reads stdin when neither this nor --input-file is given).")]
    pub text: Option<String>,

    /// Read sample text from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read sample text from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Replacement template applied to every match.
    #[arg(long, short = 'r', value_name = "TEMPLATE", help = "Replacement template applied to every match ($0, $1, $name).")]
    pub replace: Option<String>,

    /// Print the escaped highlight markup of the sample text.
    #[arg(long, help = "Print the escaped highlight markup of the sample text.")]
    pub html: bool,

    /// Emit the full evaluation output as JSON.
    #[arg(long, help = "Emit the full evaluation output as JSON.")]
    pub json: bool,
}

/// Subcommands for `share`.
#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// Encodes pattern, flags, text and replacement into a share token.
    #[command(about = "Encodes pattern, flags, text and replacement into a share token.")]
    Encode(ShareEncodeCommand),

    /// Decodes a share token back into its editor fields.
    #[command(about = "Decodes a share token back into its editor fields.")]
    Decode(ShareDecodeCommand),
}

/// Arguments for `share encode`.
#[derive(Parser, Debug)]
pub struct ShareEncodeCommand {
    #[arg(long, short = 'p', value_name = "PATTERN", help = "The pattern to embed in the token.")]
    pub pattern: String,

    #[arg(long, short = 'f', value_name = "FLAGS", default_value = "", help = "The flag string to embed in the token.")]
    pub flags: String,

    #[arg(long, short = 't', value_name = "TEXT", default_value = "", help = "The sample text to embed in the token.")]
    pub text: String,

    /// Omitting this omits the `r` key entirely.
    #[arg(long, short = 'r', value_name = "TEMPLATE", help = "The replacement template to embed in the token.")]
    pub replace: Option<String>,
}

/// Arguments for `share decode`.
#[derive(Parser, Debug)]
pub struct ShareDecodeCommand {
    /// The token to decode (reads stdin when absent).
    #[arg(value_name = "TOKEN", help = "The share token to decode (reads stdin when absent).")]
    pub token: Option<String>,

    /// Emit the decoded fields as JSON.
    #[arg(long, help = "Emit the decoded fields as JSON.")]
    pub json: bool,
}

/// Subcommands for `presets`.
#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    /// Lists the built-in presets.
    #[command(about = "Lists the built-in presets.")]
    List,

    /// Shows a single preset in full.
    #[command(about = "Shows a single preset in full.")]
    Show {
        /// The preset id (e.g. "email").
        #[arg(value_name = "ID", help = "The preset id (e.g. \"email\").")]
        id: String,
    },

    /// Exports the preset catalog as JSON.
    #[command(about = "Exports the preset catalog as JSON.")]
    Export {
        /// Write to this file instead of stdout.
        #[arg(long, short = 'o', value_name = "FILE", help = "Write the catalog to a file instead of stdout.")]
        output: Option<PathBuf>,
    },

    /// Imports a JSON preset collection and validates the merged catalog.
    #[command(about = "Imports a JSON preset collection and validates the merged catalog.")]
    Import {
        /// Path to a JSON array of presets.
        #[arg(value_name = "FILE", help = "Path to a JSON array of presets.")]
        file: PathBuf,
    },
}
