// unveil/src/commands/mod.rs
//! Subcommand implementations and the plumbing they share: reading input,
//! locating the decoder configuration and printing status messages.

pub mod clean;
pub mod decode;
pub mod encode;
pub mod extract;
pub mod scan;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use unveil_core::{merge_config, DecoderConfig};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Settings every subcommand receives from the global flags.
pub struct RunContext {
    pub input_file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub quiet: bool,
    pub no_color: bool,
    pub theme_map: ThemeMap,
}

impl RunContext {
    pub fn stdout_colors(&self) -> bool {
        !self.no_color && io::stdout().is_terminal()
    }

    pub fn stderr_colors(&self) -> bool {
        !self.no_color && io::stderr().is_terminal()
    }

    /// A label for the input: the file path, or `stdin`.
    pub fn source_name(&self) -> String {
        self.input_file
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |path| path.display().to_string())
    }

    /// Reads the whole input from `--input-file` or stdin.
    pub fn read_input(&self) -> Result<String> {
        match &self.input_file {
            Some(path) => {
                debug!("Reading input from file: {}", path.display());
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file {}", path.display()))
            }
            None => {
                debug!("Reading input from stdin.");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), &self.theme_map, self.stderr_colors());
        }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), &self.theme_map, self.stderr_colors());
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), &self.theme_map, self.stderr_colors());
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), &self.theme_map, self.stderr_colors());
    }
}

/// How a subcommand finished. Anything but `Success` maps to a non-zero exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ThresholdExceeded,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::ThresholdExceeded => 2,
        }
    }
}

/// Candidate locations for a user configuration, in lookup order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".unveil").join("config.yaml"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("unveil").join("config.yaml"));
    }
    paths
}

/// The default configuration merged with the explicit file, or else the first
/// user configuration found on disk.
pub fn load_decoder_config(explicit: Option<&Path>) -> Result<DecoderConfig> {
    let defaults = DecoderConfig::load_default()?;
    let user_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_paths().into_iter().find(|path| path.is_file()),
    };

    let user_config = match user_path {
        Some(path) => Some(DecoderConfig::load_from_file(&path)?),
        None => {
            debug!("No user decoder configuration found; using defaults.");
            None
        }
    };
    Ok(merge_config(defaults, user_config))
}
