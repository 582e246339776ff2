//! Integration tests for Medley CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("counter workbench"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("medley"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// The counter must land on exactly workers x increments, every run
#[test]
fn test_counter_is_deterministic() {
    for _ in 0..3 {
        let mut cmd = Command::cargo_bin("medley").unwrap();
        cmd.args(["counter", "--workers", "5", "--increments", "1000"])
            .assert()
            .success()
            .stdout(predicate::str::contains("5000"));
    }
}

/// JSON output carries the full summary
#[test]
fn test_counter_json_output() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    let assert = cmd
        .args([
            "counter",
            "--workers",
            "4",
            "--increments",
            "250",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["workers"], 4);
    assert_eq!(summary["increments_per_worker"], 250);
    assert_eq!(summary["expected"], 1000);
    assert_eq!(summary["value"], 1000);
    assert_eq!(summary["exact"], true);
}

/// A zero-increment run leaves the counter at zero
#[test]
fn test_counter_zero_increments() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    let assert = cmd
        .args([
            "counter", "--workers", "1", "--increments", "0", "--format", "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["value"], 0);
    assert_eq!(summary["exact"], true);
}

/// Seeded matrix runs produce identical output
#[test]
fn test_matrix_seeded_runs_match() {
    let run = || {
        let mut cmd = Command::cargo_bin("medley").unwrap();
        let assert = cmd
            .args(["matrix", "--rows", "6", "--cols", "6", "--seed", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Final sum after matrix processing:"));
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    };

    assert_eq!(run(), run());
}

/// Classification output matches the divisibility scheme
#[test]
fn test_classify_output() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.args(["classify", "--limit", "20"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Number 3 processed as: Fizz")
                .and(predicate::str::contains("Number 5 processed as: Buzz"))
                .and(predicate::str::contains("Number 0 processed as: FizzBuzz"))
                .and(predicate::str::contains("Number 7 processed as: 7"))
                .and(predicate::str::contains("Today is Wednesday"))
                .and(predicate::str::contains("Midweek days.")),
        );
}

/// The math tour reports results and the caught division error
#[test]
fn test_math_output() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.arg("math")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3628800")
                .and(predicate::str::contains("6765"))
                .and(predicate::str::contains("Caught an arithmetic error: divide by zero")),
        );
}

/// String helpers run on the default input
#[test]
fn test_strings_output() {
    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.arg("strings")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("step on no pets")
                .and(predicate::str::contains("step no on pets").not())
                .and(predicate::str::contains("yes")),
        );
}

/// Configuration file overrides the counter defaults
#[test]
fn test_config_file_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("medley.toml");
    fs::write(
        &config_path,
        r#"
[counter]
workers = 2
increments_per_worker = 10
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("medley").unwrap();
    let assert = cmd
        .args(["--config", config_path.to_str().unwrap()])
        .args(["counter", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["workers"], 2);
    assert_eq!(summary["value"], 20);
}

/// A malformed configuration file is a load error
#[test]
fn test_malformed_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("medley.toml");
    fs::write(&config_path, "counter = { not valid").unwrap();

    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.args(["--config", config_path.to_str().unwrap()])
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

/// The full walkthrough completes, with demo delays shortened via config
#[test]
fn test_full_walkthrough() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("medley.toml"),
        r#"
[demo]
task_delay_ms = 1

[matrix]
seed = 42
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("medley").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Counter value after multi-threading: 5000")
                .and(predicate::str::contains("Factorial of 10 is: 3628800"))
                .and(predicate::str::contains("Fibonacci(20): 6765"))
                .and(predicate::str::contains("Person1 is an adult, age: 21"))
                .and(predicate::str::contains("LinkedList first: NewPersonFirst"))
                .and(predicate::str::contains("LinkedList last: NewPersonLast"))
                .and(predicate::str::contains("Walkthrough finished")),
        );
}
