// unveil/src/commands/decode.rs
//! `unveil decode`: run the decoder strategies over the input.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;
use unveil_core::{decode_hidden_with_config, UnveilError};

use crate::cli::DecodeCommand;
use crate::commands::{load_decoder_config, Outcome, RunContext};
use crate::ui::decode_report;

pub fn run_decode(opts: &DecodeCommand, ctx: &RunContext) -> Result<Outcome> {
    info!("Starting unveil decode.");
    let mut config = load_decoder_config(ctx.config.as_deref())?;
    config.set_active_strategies(&opts.enable, &opts.disable);
    if let Some(floor) = opts.min_confidence {
        if !(0.0..=1.0).contains(&floor) {
            return Err(UnveilError::InvalidConfidence(floor).into());
        }
        config.min_confidence = Some(floor);
    }

    let input = ctx.read_input()?;
    let result = decode_hidden_with_config(&input, &config);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize decoding result")?;
        writeln!(writer, "{}", json)?;
    } else {
        decode_report::print_report(&result, &mut writer, &ctx.theme_map, ctx.stdout_colors(), opts.full)?;
    }
    writer.flush()?;
    Ok(Outcome::Success)
}
