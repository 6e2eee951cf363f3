// unveil/src/main.rs
//! Unveil entry point.

use anyhow::Result;
use clap::Parser;
use unveil::cli::Cli;
use unveil::commands::Outcome;
use unveil::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.debug, cli.quiet));

    match unveil::run(cli)? {
        Outcome::Success => Ok(()),
        outcome => std::process::exit(outcome.exit_code()),
    }
}
