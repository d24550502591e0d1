//! Error types for the datascope state layer.
//!
//! Store and scope operations are total and have no error type; errors
//! exist only at the edges (process setup and the deploy pipeline).

use thiserror::Error;

/// Setup-time errors: configuration loading and logging initialization.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for SetupError {
    fn from(err: config::ConfigError) -> Self {
        SetupError::ConfigError(err.to_string())
    }
}

/// Deploy pipeline errors. The policy is first-failure-stops-all: the
/// sequence aborts on the first failing step with no retry or rollback.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Invalid deploy plan: {0}")]
    InvalidPlan(String),

    #[error("Step '{step}' could not be started: {source}")]
    Spawn {
        step: String,
        source: std::io::Error,
    },

    #[error("Step '{step}' failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    #[error("Step '{step}' was terminated by a signal")]
    Terminated { step: String },
}

impl DeployError {
    /// Exit code to surface to the invoker, preserving the failing step's
    /// own code where one exists.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
