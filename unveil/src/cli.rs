// unveil/src/cli.rs
//! Command-line interface definition for the `unveil` binary: global flags,
//! subcommands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unveil_core::EncodingScheme;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "unveil",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find, strip and decode hidden Unicode payloads in text",
    long_about = "Unveil inspects text for invisible, non-printing and lookalike Unicode characters, the kind used to smuggle instructions past a human reader. It reports where they are, removes them, and tries to recover messages hidden in them with several known steganographic schemes.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a decoder configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a custom decoder configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Never colour output, even on a terminal.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable coloured output.")]
    pub no_color: bool,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", global = true, help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `unveil` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports every suspicious character in the input.
    #[command(about = "Report every suspicious character in the input.")]
    Scan(ScanCommand),

    /// Prints the input with every suspicious character removed.
    #[command(about = "Print the input with every suspicious character removed.")]
    Clean(CleanCommand),

    /// Prints only the suspicious characters of the input.
    #[command(about = "Print only the suspicious characters of the input.")]
    Extract(ExtractCommand),

    /// Runs the decoder strategies over the hidden payload.
    #[command(about = "Try to decode a message hidden in the input.")]
    Decode(DecodeCommand),

    /// Hides a message with one of the supported schemes.
    #[command(about = "Hide a message using one of the supported schemes.")]
    Encode(EncodeCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Print the report as JSON.
    #[arg(long, help = "Print the analysis report as JSON.")]
    pub json: bool,

    /// Exit with status 2 if more suspicious characters than this were found.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with status 2 if more than N suspicious characters are found.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Write cleaned output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the characters removed.
    #[arg(long, short = 'D', help = "Show a unified diff with removed characters as <U+XXXX> markers.")]
    pub diff: bool,
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Print the payload as-is instead of `U+XXXX` labels.
    #[arg(long, help = "Print the raw payload instead of U+XXXX labels.")]
    pub raw: bool,
}

/// Arguments for the `decode` command.
#[derive(Parser, Debug)]
pub struct DecodeCommand {
    /// Explicitly enable these strategies (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Enable these strategies (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these strategies (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these strategies (comma-separated).")]
    pub disable: Vec<String>,

    /// Drop candidates below this confidence.
    #[arg(long = "min-confidence", value_name = "SCORE", help = "Drop candidates whose confidence is below SCORE (0.0 to 1.0).")]
    pub min_confidence: Option<f64>,

    /// Do not truncate long candidates.
    #[arg(long, help = "Print every candidate in full instead of a preview.")]
    pub full: bool,

    /// Print the decoding result as JSON.
    #[arg(long, help = "Print the decoding result as JSON.")]
    pub json: bool,
}

/// Arguments for the `encode` command.
#[derive(Parser, Debug)]
pub struct EncodeCommand {
    /// Encoding scheme: binary, pua, whitespace or homoglyph.
    #[arg(value_name = "SCHEME", help = "Encoding scheme: binary, pua, whitespace or homoglyph.")]
    pub scheme: EncodingScheme,

    /// The message to hide.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Cover text for the homoglyph scheme.
    #[arg(long, value_name = "TEXT", conflicts_with = "cover_file", help = "Cover text to hide the message in (homoglyph scheme).")]
    pub cover: Option<String>,

    /// Read the cover text from a file.
    #[arg(long = "cover-file", value_name = "FILE", help = "Read the cover text from a file (homoglyph scheme).")]
    pub cover_file: Option<PathBuf>,

    /// Splice the payload into this visible text, after its first character.
    #[arg(long, value_name = "TEXT", help = "Insert the payload after the first character of TEXT.")]
    pub wrap: Option<String>,
}
