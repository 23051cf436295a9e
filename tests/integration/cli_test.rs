//! End-to-end tests for the `packed-perms` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

/// Helper: build a Command with logging and config overrides cleared.
fn packed_perms_cmd() -> assert_cmd::Command {
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("packed-perms");
    cmd.env_remove("RUST_LOG")
        .env_remove("PACKED_PERMS__OUTPUT__FORMAT")
        .env_remove("PACKED_PERMS__LOGGING__LEVEL")
        .env_remove("PACKED_PERMS__LOGGING__FORMAT");
    cmd
}

#[test]
fn pack_prints_packed_string() {
    packed_perms_cmd()
        .args(["--format", "text", "pack", "17", "4", "85"])
        .assert()
        .success()
        .stdout(contains("CABAAAAAAAAAAAQ").and(contains("symbols:")));
}

#[test]
fn pack_json_output_is_parseable() {
    let output = packed_perms_cmd()
        .args(["--format", "json", "pack", "17", "4", "85"])
        .output()
        .expect("run packed-perms");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["packed"], "CABAAAAAAAAAAAQ");
    assert_eq!(report["symbols"], 15);
}

#[test]
fn any_reports_not_granted() {
    let output = packed_perms_cmd()
        .args(["--format", "json", "any", "CABAAAAAAAAAAAQ", "0", "1", "2"])
        .output()
        .expect("run packed-perms");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["granted"], false);
}

#[test]
fn unpack_lists_ids() {
    packed_perms_cmd()
        .args(["--format", "text", "unpack", "CABAAAAAAAAAAAQ"])
        .assert()
        .success()
        .stdout(contains("4, 17, 85"));
}

#[test]
fn negative_id_exits_with_error() {
    packed_perms_cmd()
        .args(["check", "A", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: INVALID_ARGUMENT"));
}

#[test]
fn invalid_symbol_exits_with_error() {
    packed_perms_cmd()
        .args(["binary", "CABAAAAAAAAAAAQ@"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: INVALID_ARGUMENT: Incorrect symbol: @ (64)"))
        .stdout(contains("bits").not());
}

#[test]
fn unknown_output_format_in_config_exits_with_error() {
    packed_perms_cmd()
        .env("PACKED_PERMS__OUTPUT__FORMAT", "yaml")
        .args(["pack", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: CONFIGURATION"));
}
