//! Deploy pipeline end to end, including the CLI binary's exit code
//! contract: the failing step's own exit code is surfaced to the invoker.

use std::fs;
use std::process::Command;

use datascope::deploy::DeployPlan;
use tempfile::TempDir;

#[test]
fn test_plan_from_file_runs_in_order() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("order.txt");
    let plan_path = dir.path().join("deploy.toml");
    fs::write(
        &plan_path,
        format!(
            r#"
            [[steps]]
            name = "build docs"
            program = "sh"
            args = ["-c", "echo build >> {log}"]

            [[steps]]
            name = "deploy"
            program = "sh"
            args = ["-c", "echo deploy >> {log}"]
            "#,
            log = log.display()
        ),
    )
    .unwrap();

    let plan = DeployPlan::from_path(&plan_path).unwrap();
    plan.run().unwrap();
    assert_eq!(fs::read_to_string(&log).unwrap(), "build\ndeploy\n");
}

#[test]
fn test_cli_surfaces_failing_step_exit_code() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("deployed.txt");
    let plan_path = dir.path().join("deploy.toml");
    fs::write(
        &plan_path,
        format!(
            r#"
            [[steps]]
            name = "build docs"
            program = "sh"
            args = ["-c", "exit 7"]

            [[steps]]
            name = "deploy"
            program = "sh"
            args = ["-c", "touch {marker}"]
            "#,
            marker = marker.display()
        ),
    )
    .unwrap();

    let bin = env!("CARGO_BIN_EXE_datascope");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .arg("deploy")
        .arg("--plan")
        .arg(&plan_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert!(
        !marker.exists(),
        "steps after the failure must not run: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("build docs"), "stderr: {stderr}");
}

#[test]
fn test_cli_succeeds_on_passing_plan() {
    let dir = TempDir::new().unwrap();
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

    let bin = env!("CARGO_BIN_EXE_datascope");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .arg("deploy")
        .arg("--plan")
        .arg(&plan_path)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}
