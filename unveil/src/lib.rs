// unveil/src/lib.rs
//! # Unveil CLI Application
//!
//! The terminal front end for `unveil-core`: scan, clean, extract, decode and
//! encode hidden Unicode payloads from files or stdin.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{Outcome, RunContext};
use crate::ui::theme::build_theme_map;

/// Dispatches a parsed command line. Logging must already be initialized.
pub fn run(cli: Cli) -> Result<Outcome> {
    let theme_map = build_theme_map(cli.theme.as_ref())?;
    let ctx = RunContext {
        input_file: cli.input_file,
        config: cli.config,
        quiet: cli.quiet,
        no_color: cli.no_color,
        theme_map,
    };

    match &cli.command {
        Commands::Scan(opts) => commands::scan::run_scan(opts, &ctx),
        Commands::Clean(opts) => commands::clean::run_clean(opts, &ctx),
        Commands::Extract(opts) => commands::extract::run_extract(opts, &ctx),
        Commands::Decode(opts) => commands::decode::run_decode(opts, &ctx),
        Commands::Encode(opts) => commands::encode::run_encode(opts, &ctx),
    }
}
