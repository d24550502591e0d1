//! Logging System
//!
//! Structured logging via the `tracing` crate. Level and destination come
//! from [`LoggingConfig`] with `DATASCOPE_LOG*` environment overrides.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::SetupError;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, stdout, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Colored output (text format, terminal destinations only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("datascope.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Priority order (highest to lowest): `DATASCOPE_LOG*` environment
/// variables, then `config`, then defaults. Fails if a subscriber is
/// already installed.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), SetupError> {
    let filter = build_env_filter(config)?;
    let format = resolve(
        "DATASCOPE_LOG_FORMAT",
        config.map(|c| c.format.as_str()),
        "text",
    );
    let output = resolve(
        "DATASCOPE_LOG_OUTPUT",
        config.map(|c| c.output.as_str()),
        "stderr",
    );
    let use_color = config.map(|c| c.color).unwrap_or(true);

    if !matches!(format.as_str(), "json" | "text") {
        return Err(SetupError::ConfigError(format!(
            "Invalid log format: {format} (must be 'json' or 'text')"
        )));
    }
    if !matches!(output.as_str(), "stdout" | "stderr" | "file") {
        return Err(SetupError::ConfigError(format!(
            "Invalid log output: {output} (must be 'stdout', 'stderr', or 'file')"
        )));
    }

    let base = Registry::default().with(filter);
    if format == "json" {
        match output.as_str() {
            "file" => {
                let writer = open_log_file(config)?;
                base.with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(writer),
                )
                .init();
            }
            "stdout" => {
                base.with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
            }
            _ => {
                base.with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
            }
        }
    } else {
        match output.as_str() {
            "file" => {
                let writer = open_log_file(config)?;
                base.with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            }
            "stdout" => {
                base.with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(use_color)
                        .with_writer(std::io::stdout),
                )
                .init();
            }
            _ => {
                base.with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(use_color)
                        .with_writer(std::io::stderr),
                )
                .init();
            }
        }
    }
    Ok(())
}

fn open_log_file(config: Option<&LoggingConfig>) -> Result<std::fs::File, SetupError> {
    let path = config
        .map(|c| c.file.clone())
        .unwrap_or_else(default_log_file);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SetupError::ConfigError(format!("Failed to create log directory: {e}"))
            })?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| SetupError::ConfigError(format!("Failed to open log file {path:?}: {e}")))
}

fn resolve(env_var: &str, configured: Option<&str>, fallback: &str) -> String {
    std::env::var(env_var)
        .ok()
        .unwrap_or_else(|| configured.unwrap_or(fallback).to_string())
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, SetupError> {
    if let Ok(filter) = EnvFilter::try_from_env("DATASCOPE_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    let mut filter = EnvFilter::new(level);
    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{module}={module_level}");
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| SetupError::ConfigError(format!("Invalid log directive: {e}")))?,
            );
        }
    }
    Ok(filter)
}
