//! Configuration module for rankeval
//!
//! This module provides configuration structures and loading mechanisms for metric
//! evaluation. Configuration can be loaded from TOML files and/or environment
//! variables.

mod defaults;
mod loading;


use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{Display, EnumString};

use defaults::*;

/// How a batch evaluation treats a record whose relevant set is empty
///
/// The denominator of AP@k is `min(k, |relevant|)`, which is zero for such a record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EmptyRelevantPolicy {
    /// Abort the batch with an undefined metric error
    #[default]
    Fail,
    /// Score the record as 0.0 and keep going
    Zero,
}

/// Main configuration structure for rankeval
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metric evaluation configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Configuration for metric evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Rank cutoff used for precision@k, AP@k and MAP@k
    #[serde(default = "default_k")]
    pub k: usize,

    /// Handling of records with an empty relevant set
    #[serde(default)]
    pub empty_relevant: EmptyRelevantPolicy,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            empty_relevant: EmptyRelevantPolicy::default(),
        }
    }
}

impl Config {
    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

impl MetricsConfig {
    /// Validates the metrics configuration
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 || self.k > MAX_K {
            return Err(Error::config(format!(
                "Invalid k {}. Must be between 1 and {MAX_K}",
                self.k
            )));
        }

        Ok(())
    }
}
