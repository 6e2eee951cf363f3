// unveil-core/src/config.rs
//! Decoder configuration for `unveil-core`.
//!
//! A `DecoderConfig` selects which strategies run and sets a confidence floor
//! for the candidates they produce. It is stored as YAML; the built-in default
//! is embedded in the binary and user files are merged over it by strategy
//! name.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::UnveilError;
use crate::strategy::StrategyId;

/// One strategy entry in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StrategySetting {
    /// Strategy identifier, e.g. `binary` or `direct_unicode`.
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Top-level decoder configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub strategies: Vec<StrategySetting>,
    /// Candidates below this confidence are dropped. Unset means 0.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
}

impl DecoderConfig {
    /// Loads the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default decoder configuration from embedded string...");
        let default_yaml = include_str!("../config/default_strategies.yaml");
        let config: DecoderConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default decoder configuration")?;

        debug!("Loaded {} default strategy settings.", config.strategies.len());
        Ok(config)
    }

    /// Loads and validates a user configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading decoder configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DecoderConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded {} strategy settings from file {}.",
            config.strategies.len(),
            path.display()
        );
        Ok(config)
    }

    /// Checks strategy names, duplicates and the confidence floor, reporting
    /// every problem at once.
    pub fn validate(&self) -> Result<(), UnveilError> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for setting in &self.strategies {
            match setting.name.parse::<StrategyId>() {
                Ok(id) => {
                    if !seen.insert(id) {
                        errors.push(format!("Duplicate strategy entry: '{}'.", setting.name));
                    }
                }
                Err(e) => errors.push(e.to_string()),
            }
        }

        if let Some(floor) = self.min_confidence {
            if !(0.0..=1.0).contains(&floor) {
                errors.push(UnveilError::InvalidConfidence(floor).to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(UnveilError::ConfigValidation(errors.join("\n")))
        }
    }

    /// Whether strategy `id` should run. Strategies without an entry run.
    pub fn is_enabled(&self, id: StrategyId) -> bool {
        self.setting(id).map_or(true, |s| s.enabled)
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(0.0)
    }

    fn setting(&self, id: StrategyId) -> Option<&StrategySetting> {
        self.strategies
            .iter()
            .find(|s| s.name.parse::<StrategyId>().ok() == Some(id))
    }

    /// Applies command-line enable/disable lists. Disabling wins over
    /// enabling. Unknown names are warned about and ignored.
    pub fn set_active_strategies(&mut self, enable: &[String], disable: &[String]) {
        let enable_ids = parse_names(enable, "enable");
        let disable_ids = parse_names(disable, "disable");

        for id in enable_ids {
            self.set_enabled(id, true);
        }
        for id in disable_ids {
            self.set_enabled(id, false);
        }

        debug!(
            "Active strategies after filtering: {:?}",
            StrategyId::ALL
                .iter()
                .filter(|id| self.is_enabled(**id))
                .map(StrategyId::as_str)
                .collect::<Vec<_>>()
        );
    }

    fn set_enabled(&mut self, id: StrategyId, enabled: bool) {
        match self
            .strategies
            .iter_mut()
            .find(|s| s.name.parse::<StrategyId>().ok() == Some(id))
        {
            Some(setting) => setting.enabled = enabled,
            None => self.strategies.push(StrategySetting {
                name: id.as_str().to_string(),
                enabled,
                description: None,
            }),
        }
    }
}

fn parse_names(names: &[String], list: &str) -> Vec<StrategyId> {
    names
        .iter()
        .filter_map(|name| match name.parse::<StrategyId>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Strategy '{}' in the `{}` list does not exist.", name, list);
                None
            }
        })
        .collect()
}

/// Merges a user configuration over the defaults. User entries replace default
/// entries of the same strategy; a user `min_confidence` replaces the default.
pub fn merge_config(default_config: DecoderConfig, user_config: Option<DecoderConfig>) -> DecoderConfig {
    let mut merged = default_config;
    debug!("merge_config called. Default strategy settings: {}", merged.strategies.len());

    if let Some(user_cfg) = user_config {
        debug!("Merging {} user strategy settings.", user_cfg.strategies.len());
        for user_setting in user_cfg.strategies {
            let id = user_setting.name.parse::<StrategyId>().ok();
            match merged
                .strategies
                .iter_mut()
                .find(|s| id.is_some() && s.name.parse::<StrategyId>().ok() == id)
            {
                Some(existing) => *existing = user_setting,
                None => merged.strategies.push(user_setting),
            }
        }

        if let Some(user_floor) = user_cfg.min_confidence {
            debug!("Overriding min_confidence with user value: {}", user_floor);
            merged.min_confidence = Some(user_floor);
        }
    }

    merged
}
