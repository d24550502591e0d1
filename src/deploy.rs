//! Deploy Pipeline
//!
//! Sequential runner for the documentation build-and-deploy flow: an
//! ordered list of named commands executed one after another. The first
//! step that fails to start or exits nonzero aborts the whole sequence,
//! and its exit code is surfaced to the invoker. No retry, no rollback.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::DeployError;

/// One command in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployStep {
    /// Display name, used in logs and errors.
    pub name: String,

    /// Program to invoke.
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory; defaults to the invoker's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

/// Ordered deploy plan, typically loaded from a TOML file:
///
/// ```toml
/// [[steps]]
/// name = "build docs"
/// program = "./scripts/build_docs.sh"
///
/// [[steps]]
/// name = "deploy"
/// program = "firebase"
/// args = ["deploy"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployPlan {
    pub steps: Vec<DeployStep>,
}

impl DeployPlan {
    pub fn from_toml_str(raw: &str) -> Result<Self, DeployError> {
        let plan: DeployPlan =
            toml::from_str(raw).map_err(|e| DeployError::InvalidPlan(e.to_string()))?;
        if plan.steps.is_empty() {
            return Err(DeployError::InvalidPlan("plan has no steps".to_string()));
        }
        Ok(plan)
    }

    pub fn from_path(path: &Path) -> Result<Self, DeployError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DeployError::InvalidPlan(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(&self) -> Result<(), DeployError> {
        for step in &self.steps {
            run_step(step)?;
        }
        info!(steps = self.steps.len(), "deploy plan completed");
        Ok(())
    }
}

fn run_step(step: &DeployStep) -> Result<(), DeployError> {
    info!(step = %step.name, program = %step.program, "running deploy step");

    let mut command = Command::new(&step.program);
    command.args(&step.args);
    if let Some(cwd) = &step.cwd {
        command.current_dir(cwd);
    }

    let status = command.status().map_err(|source| DeployError::Spawn {
        step: step.name.clone(),
        source,
    })?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => {
            error!(step = %step.name, code, "deploy step failed");
            Err(DeployError::StepFailed {
                step: step.name.clone(),
                code,
            })
        }
        None => {
            error!(step = %step.name, "deploy step terminated by signal");
            Err(DeployError::Terminated {
                step: step.name.clone(),
            })
        }
    }
}
