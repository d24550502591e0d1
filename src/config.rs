//! Configuration System
//!
//! Layered configuration: defaults, then an optional `datascope.toml`,
//! then `DATASCOPE_*` environment variables.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::logging::LoggingConfig;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatascopeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DatascopeConfig {
    /// Load configuration from `datascope.toml` in the working directory
    /// (when present) and the environment.
    pub fn load() -> Result<Self, SetupError> {
        Self::load_layered(None)
    }

    /// Load configuration from an explicit file plus the environment.
    pub fn load_from(path: &Path) -> Result<Self, SetupError> {
        Self::load_layered(Some(path))
    }

    fn load_layered(path: Option<&Path>) -> Result<Self, SetupError> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("datascope").required(false)),
        };
        let settings = builder.add_source(env_source()).build()?;
        let parsed = settings.try_deserialize()?;
        Ok(parsed)
    }
}

/// Environment layer: `DATASCOPE_LOGGING__LEVEL=debug` sets
/// `logging.level`. The prefix is split off by a single underscore; `__`
/// separates nested keys only.
fn env_source() -> Environment {
    Environment::with_prefix("DATASCOPE")
        .prefix_separator("_")
        .separator("__")
}
