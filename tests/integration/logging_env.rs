//! Integration tests for the `DATASCOPE_LOG*` environment overrides.
//!
//! Verifies that the variables steer the spawned binary's log format and
//! destination without any configuration file.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn passing_plan(dir: &TempDir) -> std::path::PathBuf {
    let plan_path = dir.path().join("deploy.toml");
    fs::write(
        &plan_path,
        r#"
        [[steps]]
        name = "build docs"
        program = "true"
        "#,
    )
    .unwrap();
    plan_path
}

#[test]
fn test_env_overrides_route_json_logs_to_file() {
    let dir = TempDir::new().unwrap();
    let plan_path = passing_plan(&dir);

    let bin = env!("CARGO_BIN_EXE_datascope");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("DATASCOPE_LOG", "info")
        .env("DATASCOPE_LOG_FORMAT", "json")
        .env("DATASCOPE_LOG_OUTPUT", "file")
        .arg("deploy")
        .arg("--plan")
        .arg(&plan_path)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "deploy should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Default file path, relative to the working directory.
    let log_path = dir.path().join("datascope.log");
    assert!(
        log_path.exists(),
        "log file should exist at {}",
        log_path.display()
    );
    let content = fs::read_to_string(&log_path).unwrap();
    let first = content.lines().next().unwrap_or("");
    assert!(
        first.starts_with('{') && first.contains("\"level\":\"INFO\""),
        "log lines should be JSON records; got: {first}"
    );
    assert!(
        content.contains("deploy"),
        "log should record the deploy steps; got: {content}"
    );

    // With output=file, nothing is logged to stderr.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.trim().is_empty(),
        "stderr should carry no log lines: {stderr}"
    );
}

#[test]
fn test_env_filter_silences_logging() {
    let dir = TempDir::new().unwrap();
    let plan_path = passing_plan(&dir);

    let bin = env!("CARGO_BIN_EXE_datascope");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("DATASCOPE_LOG", "off")
        .env("DATASCOPE_LOG_OUTPUT", "stderr")
        .arg("deploy")
        .arg("--plan")
        .arg(&plan_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.trim().is_empty(),
        "DATASCOPE_LOG=off should silence all log output: {stderr}"
    );
}
