//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with a scrubbed environment so host `GUARDIAN_*` variables can't leak in.
fn guardian(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gladius-guardian"));
    cmd.env_clear()
        .env("GLADIUSBASE", "/srv/gladius")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gladius-guardian"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("gladius-guardian"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gladius-guardian"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Runtime configuration resolution"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn test_show_defaults_without_config_file() {
    let dir = TempDir::new().expect("temp config dir");
    let output = guardian(&dir).arg("show").output().expect("run show");
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(settings["NetworkdExecutable"], "gladius-networkd");
    assert_eq!(settings["ControldExecutable"], "gladius-controld");
    assert_eq!(settings["Ports"]["Guardian"], 7791);
    assert_eq!(settings["Ports"]["EdgeD"], 7946);
    assert_eq!(settings["Ports"]["NetworkGateway"], 3001);
    assert_eq!(settings["MaxLogLines"], 1000);
    assert_eq!(settings["DefaultEnvironment"][0], "GLADIUSBASE=/srv/gladius");
    assert_eq!(settings["LogLevel"], "info");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error reading config file"), "stderr: {stderr}");
    assert!(stderr.contains("using defaults"), "stderr: {stderr}");
}

#[test]
fn test_default_command_is_show() {
    let dir = TempDir::new().expect("temp config dir");
    guardian(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"MaxLogLines\": 1000"));
}

#[test]
fn test_env_override_beats_default() {
    let dir = TempDir::new().expect("temp config dir");
    guardian(&dir)
        .env("GUARDIAN_PORTS_GUARDIAN", "1234")
        .args(["get", "Ports.Guardian"])
        .assert()
        .success()
        .stdout("1234\n");
}

#[test]
fn test_env_override_beats_config_file() {
    let dir = TempDir::new().expect("temp config dir");
    fs::write(
        dir.path().join("gladius-guardian.yaml"),
        "LogLevel: debug\nPorts:\n  EdgeD: 8000\n  NetworkGateway: 4000\n",
    )
    .expect("write config");

    guardian(&dir)
        .env("GUARDIAN_PORTS_EDGED", "9000")
        .args(["get", "ports.edged"])
        .assert()
        .success()
        .stdout("9000\n");

    guardian(&dir)
        .args(["get", "Ports.NetworkGateway"])
        .assert()
        .success()
        .stdout("4000\n");
}

#[test]
fn test_log_level_env_wins_over_file() {
    let dir = TempDir::new().expect("temp config dir");
    fs::write(dir.path().join("gladius-guardian.toml"), "LogLevel = 'debug'\n")
        .expect("write config");

    let output = guardian(&dir)
        .env("GUARDIAN_LOGLEVEL", "error")
        .arg("show")
        .output()
        .expect("run show");
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(settings["LogLevel"], "error");
}

#[test]
fn test_debug_level_enables_debug_logs() {
    let dir = TempDir::new().expect("temp config dir");
    guardian(&dir)
        .env("GUARDIAN_LOGLEVEL", "debug")
        .args(["get", "MaxLogLines"])
        .assert()
        .success()
        .stdout("1000\n")
        .stderr(predicate::str::contains("resolved from Default"));
}

#[test]
fn test_get_string_prints_bare_value() {
    let dir = TempDir::new().expect("temp config dir");
    fs::write(
        dir.path().join("gladius-guardian.json"),
        r#"{"ControldExecutable": "/opt/bin/controld"}"#,
    )
    .expect("write config");

    guardian(&dir)
        .args(["get", "controldexecutable"])
        .assert()
        .success()
        .stdout("/opt/bin/controld\n");
}

#[test]
fn test_get_unset_key_fails() {
    let dir = TempDir::new().expect("temp config dir");
    guardian(&dir)
        .args(["get", "Does.Not.Exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not set: Does.Not.Exist"))
        .stderr(predicate::str::contains("GUARDIAN_DOES_NOT_EXIST"));
}

#[test]
fn test_show_all_lists_file_keys() {
    let dir = TempDir::new().expect("temp config dir");
    fs::write(dir.path().join("gladius-guardian.toml"), "[Extra]\nFlag = true\n")
        .expect("write config");

    let output = guardian(&dir).args(["show", "--all"]).output().expect("run show --all");
    assert!(output.status.success());

    let all: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(all["extra.flag"], true);
    assert_eq!(all["ports.guardian"], 7791);
    assert_eq!(all["networkdexecutable"], "gladius-networkd");
}
