//! Integration tests for `hostkeys extract`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{EXAMPLE1_KEYS, fixture, fixture_text, home, hostkeys};

#[test]
fn test_extract_prints_normalized_keys_in_order() {
    let dir = home();
    let expected = format!("{}\n", EXAMPLE1_KEYS.join("\n"));
    hostkeys(&dir)
        .arg("extract")
        .arg(fixture("example1"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_extract_accepts_any_no_color_value() {
    let expected = format!("{}\n", EXAMPLE1_KEYS.join("\n"));
    for value in ["1", "yes", ""] {
        let dir = home();
        hostkeys(&dir)
            .env("NO_COLOR", value)
            .arg("extract")
            .arg(fixture("example1"))
            .assert()
            .success()
            .stdout(expected.clone());
    }
}

#[test]
fn test_extract_no_color_flag_still_works() {
    let dir = home();
    hostkeys(&dir)
        .env_remove("NO_COLOR")
        .args(["--no-color", "extract"])
        .arg(fixture("example1"))
        .assert()
        .success()
        .stdout(predicate::str::contains(EXAMPLE1_KEYS[0]));
}

#[test]
fn test_extract_reads_stdin_when_no_input() {
    let dir = home();
    hostkeys(&dir)
        .arg("extract")
        .write_stdin(fixture_text("example1"))
        .assert()
        .success()
        .stdout(predicate::str::contains(EXAMPLE1_KEYS[1]));
}

#[test]
fn test_extract_reads_stdin_for_dash() {
    let dir = home();
    hostkeys(&dir)
        .args(["extract", "-"])
        .write_stdin(fixture_text("example2"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIIbhB2/ObNlRtBoPoncWIQRgOS05NLvTqCThnDk/509a\n"));
}

#[test]
fn test_extract_strips_comments() {
    let dir = home();
    hostkeys(&dir)
        .arg("extract")
        .arg(fixture("example1"))
        .assert()
        .success()
        .stdout(predicate::str::contains("root@").not());
}

#[test]
fn test_extract_with_host_prints_known_hosts_lines() {
    let dir = home();
    hostkeys(&dir)
        .args(["extract", "--host", "web-01"])
        .arg(fixture("example1"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("web-01 {}\n", EXAMPLE1_KEYS[0])));
}

#[test]
fn test_extract_rejects_host_with_whitespace() {
    let dir = home();
    hostkeys(&dir)
        .args(["extract", "--host", "web 01"])
        .arg(fixture("example1"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid host alias"));
}

#[test]
fn test_extract_multiple_blocks_in_order() {
    let dir = home();
    let out = hostkeys(&dir)
        .arg("extract")
        .arg(fixture("example5"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).expect("utf8");
    let algorithms: Vec<&str> = out
        .lines()
        .map(|l| l.split(' ').next().expect("algorithm"))
        .collect();
    assert_eq!(
        algorithms,
        ["ecdsa-sha2-nistp256", "ssh-ed25519", "ssh-ed25519", "ssh-rsa"]
    );
}

#[test]
fn test_extract_without_block_fails() {
    let dir = home();
    hostkeys(&dir)
        .arg("extract")
        .arg(fixture("example3"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No BEGIN SSH HOST KEY KEYS block found in CloudInit output",
        ));
}

#[test]
fn test_extract_invalid_line_fails_without_partial_output() {
    let dir = home();
    hostkeys(&dir)
        .arg("extract")
        .arg(fixture("example4"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "invalid host key format: ecdsa-sha2-nistp256",
        ));
}

#[test]
fn test_extract_missing_file_names_path() {
    let dir = home();
    let missing = dir.path().join("nope.log");
    hostkeys(&dir)
        .arg("extract")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.log"));
}

#[test]
fn test_extract_empty_block_warns_and_succeeds() {
    let dir = home();
    hostkeys(&dir)
        .arg("extract")
        .write_stdin("-----BEGIN SSH HOST KEY KEYS-----\r\n\r\n-----END SSH HOST KEY KEYS-----\r\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no keys"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn test_extract_json_lists_keys() {
    let dir = home();
    let out = hostkeys(&dir)
        .args(["--json", "extract"])
        .arg(fixture("example1"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert!(v["host"].is_null());
    let keys = v["keys"].as_array().expect("keys array");
    assert_eq!(keys.len(), 3);
    assert_eq!(keys[1]["algorithm"], "ssh-ed25519");
    assert_eq!(keys[1]["key"], EXAMPLE1_KEYS[1]);
}

#[test]
fn test_extract_json_error_has_code() {
    let dir = home();
    let out = hostkeys(&dir)
        .args(["--json", "extract"])
        .arg(fixture("example3"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "NO_HOST_KEY_BLOCK");
}

#[test]
fn test_extract_json_invalid_format_code() {
    let dir = home();
    let out = hostkeys(&dir)
        .args(["--json", "extract"])
        .arg(fixture("example4"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["code"], "INVALID_HOST_KEY_FORMAT");
    assert_eq!(v["message"], "invalid host key format: ecdsa-sha2-nistp256");
}
