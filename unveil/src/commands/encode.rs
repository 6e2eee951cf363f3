// unveil/src/commands/encode.rs
//! `unveil encode`: hide a message with one of the supported schemes.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use unveil_core::{homoglyph_capacity, message_bit_len, splice_payload};

use crate::cli::EncodeCommand;
use crate::commands::{Outcome, RunContext};

pub fn run_encode(opts: &EncodeCommand, ctx: &RunContext) -> Result<Outcome> {
    info!("Encoding message with the {} scheme.", opts.scheme);
    let cover = match (&opts.cover, &opts.cover_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read cover file {}", path.display()))?,
        ),
        (None, None) => None,
    };

    if let Some(cover) = cover.as_deref().filter(|_| opts.scheme.needs_cover()) {
        let capacity = homoglyph_capacity(cover);
        let needed = message_bit_len(&opts.message);
        debug!("Cover capacity {} bits, message needs {} bits.", capacity, needed);
        if capacity < needed {
            ctx.warn(format!(
                "The cover text can carry {} bits but the message needs {}; it will be truncated.",
                capacity, needed
            ));
        }
    }

    let payload = opts.scheme.encode(&opts.message, cover.as_deref())?;
    let output = match &opts.wrap {
        Some(carrier) => splice_payload(carrier, &payload),
        None => payload,
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", output)?;
    writer.flush()?;
    Ok(Outcome::Success)
}
