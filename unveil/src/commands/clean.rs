// unveil/src/commands/clean.rs
//! `unveil clean`: strip suspicious characters from the input.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use unveil_core::{clean, extract_hidden};

use crate::cli::CleanCommand;
use crate::commands::{Outcome, RunContext};
use crate::ui::diff_viewer;

pub fn run_clean(opts: &CleanCommand, ctx: &RunContext) -> Result<Outcome> {
    info!("Starting unveil clean.");
    let input = ctx.read_input()?;
    let cleaned = clean(&input);
    let removed = extract_hidden(&input).chars().count();
    debug!(
        "Cleaned input. Original length: {}, cleaned length: {}",
        input.len(),
        cleaned.len()
    );

    if let Some(path) = &opts.output {
        ctx.info(format!("Writing cleaned content to file: {}", path.display()));
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.diff {
            diff_viewer::print_diff(&input, &cleaned, &mut file, &ctx.theme_map, false)?;
        } else {
            file.write_all(cleaned.as_bytes())?;
        }
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        if opts.diff {
            diff_viewer::print_diff(&input, &cleaned, &mut writer, &ctx.theme_map, ctx.stdout_colors())?;
        } else {
            writer.write_all(cleaned.as_bytes())?;
        }
        writer.flush()?;
    }

    if removed == 0 {
        ctx.success("No suspicious characters found.");
    } else {
        ctx.info(format!("Removed {} suspicious characters.", removed));
    }
    Ok(Outcome::Success)
}
