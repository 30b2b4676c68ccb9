//! Integration tests for `hostkeys config`.
//!
//! All tests set `HOSTKEYS_CONFIG` to a temp path (via `helpers::hostkeys`)
//! so they never read or write `~/.hostkeys/config.yaml`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{home, hostkeys};

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn test_config_show_without_file_shows_defaults() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_config_set_host_then_show() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "set", "host", "bastion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set host = bastion"));
    hostkeys(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bastion"));
}

#[test]
fn test_config_set_writes_yaml_file() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "set", "host", "bastion"])
        .assert()
        .success();
    let yaml = std::fs::read_to_string(dir.path().join("config.yaml")).expect("config written");
    assert!(yaml.contains("host: bastion"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "set", "security.level", "strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting: security.level"));
    assert!(!dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_set_invalid_host_fails() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "set", "host", "two words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for host"));
}

#[test]
fn test_config_show_json() {
    let dir = home();
    hostkeys(&dir)
        .args(["config", "set", "host", "bastion"])
        .assert()
        .success();
    let out = hostkeys(&dir)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["host"], "bastion");
    assert!(v["known_hosts"].is_null());
}

#[test]
fn test_config_malformed_file_reports_path() {
    let dir = home();
    std::fs::write(dir.path().join("config.yaml"), "host: [unclosed\n").expect("seed");
    hostkeys(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.yaml"));
}
