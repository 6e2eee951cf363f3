// unveil/src/commands/extract.rs
//! `unveil extract`: print only the suspicious characters.

use std::io::{self, Write};

use anyhow::Result;
use log::info;
use unveil_core::extract_hidden;
use unveil_core::strategies::raw_code_points;

use crate::cli::ExtractCommand;
use crate::commands::{Outcome, RunContext};

pub fn run_extract(opts: &ExtractCommand, ctx: &RunContext) -> Result<Outcome> {
    info!("Starting unveil extract.");
    let input = ctx.read_input()?;
    let extracted = extract_hidden(&input);

    if extracted.is_empty() {
        ctx.success("No suspicious characters found.");
        return Ok(Outcome::Success);
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.raw {
        writer.write_all(extracted.as_bytes())?;
    } else {
        writeln!(writer, "{}", raw_code_points(&extracted).unwrap_or_default())?;
    }
    writer.flush()?;
    Ok(Outcome::Success)
}
