use assert_cmd::prelude::*;
use serde_json::Value;
use std::path::Path;
use std::process::Command;

fn workorder_chain(config: &Path) -> Command {
    let bin = assert_cmd::cargo::cargo_bin!("workorder-chain");
    let mut cmd = Command::new(bin);
    cmd.env_remove("WORKORDER_CHAIN_STAGES")
        .env_remove("WORKORDER_CHAIN_REQUESTS")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 output")
}

#[test]
fn demo_prints_sample_results_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = stdout_of(workorder_chain(&dir.path().join("none.yaml")).arg("demo"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Validation succeeded",
            "Availability check succeeded",
            "Deadline check succeeded",
            "Deadline check failed",
        ]
    );
}

#[test]
fn handle_reports_routes_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = stdout_of(
        workorder_chain(&dir.path().join("none.yaml"))
            .args(["--output", "json", "handle", "Available request", "Broken request"]),
    );

    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    let routes = value.as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["result"], "Availability check succeeded");
    assert_eq!(routes[0]["visited"].as_array().unwrap().len(), 2);
    assert_eq!(routes[1]["result"], "Deadline check failed");
    assert!(routes[1]["resolved_by"].is_null());
}

#[test]
fn config_file_reorders_stages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workorder.yaml");
    std::fs::write(&path, "stages: [deadline, availability]\n").unwrap();

    let stdout = stdout_of(workorder_chain(&path).args(["handle", "Valid request"]));
    assert_eq!(stdout.trim(), "Availability check failed");

    let stdout = stdout_of(workorder_chain(&path).arg("stages"));
    let names: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["deadline", "availability"]);
}

#[test]
fn env_override_applies_to_demo() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = stdout_of(
        workorder_chain(&dir.path().join("none.yaml"))
            .env("WORKORDER_CHAIN_STAGES", "validator")
            .env("WORKORDER_CHAIN_REQUESTS", "Valid request|On time request")
            .arg("demo"),
    );
    assert_eq!(stdout, "Validation succeeded\nValidation failed\n");
}

#[test]
fn unknown_stage_fails() {
    let dir = tempfile::tempdir().unwrap();
    workorder_chain(&dir.path().join("none.yaml"))
        .env("WORKORDER_CHAIN_STAGES", "validator,payroll")
        .arg("demo")
        .assert()
        .failure();
}

#[test]
fn handle_requires_a_request() {
    let dir = tempfile::tempdir().unwrap();
    workorder_chain(&dir.path().join("none.yaml"))
        .arg("handle")
        .assert()
        .failure();
}
