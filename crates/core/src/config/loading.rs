//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;
use tracing::debug;

use super::defaults::*;
use super::{Config, EmptyRelevantPolicy};

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// A missing file is not an error; defaults and environment still apply.
    /// Environment variables are prefixed with `RANKEVAL_` and use double underscores
    /// for nested values. For example:
    /// - `RANKEVAL_METRICS__K=5`
    /// - `RANKEVAL_METRICS__EMPTY_RELEVANT=zero`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        // config crate doesn't apply serde defaults for missing sections
        let builder = set_config_default(builder, "metrics.k", default_k() as i64)?;
        let mut builder = set_config_default(
            builder,
            "metrics.empty_relevant",
            EmptyRelevantPolicy::default().to_string(),
        )?;

        if path.exists() {
            debug!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path));
        } else {
            debug!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("RANKEVAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }
}
