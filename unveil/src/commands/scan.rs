// unveil/src/commands/scan.rs
//! `unveil scan`: report every suspicious character in the input.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};
use unveil_core::{analyze, AnalysisRecord};

use crate::cli::ScanCommand;
use crate::commands::{Outcome, RunContext};
use crate::ui::scan_summary;

/// The `--json` report.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub source: String,
    pub sha256: String,
    pub generated_at: String,
    pub analysis: AnalysisRecord,
}

impl ScanReport {
    pub fn new(source: String, input: &str, analysis: AnalysisRecord) -> Self {
        Self {
            source,
            sha256: hex::encode(Sha256::digest(input.as_bytes())),
            generated_at: Utc::now().to_rfc3339(),
            analysis,
        }
    }
}

pub fn run_scan(opts: &ScanCommand, ctx: &RunContext) -> Result<Outcome> {
    info!("Starting unveil scan.");
    let input = ctx.read_input()?;
    let record = analyze(&input);
    let found = record.suspicious_count();

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opts.json {
        let report = ScanReport::new(ctx.source_name(), &input, record);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        writeln!(writer, "{}", json)?;
    } else {
        scan_summary::print_summary(&record, &mut writer, &ctx.theme_map, ctx.stdout_colors())?;
    }
    writer.flush()?;

    if let Some(threshold) = opts.fail_over_threshold {
        debug!("Checking {} suspicious characters against threshold {}.", found, threshold);
        if found > threshold {
            ctx.error(format!(
                "Found {} suspicious characters, over the threshold of {}.",
                found, threshold
            ));
            return Ok(Outcome::ThresholdExceeded);
        }
    }
    Ok(Outcome::Success)
}
