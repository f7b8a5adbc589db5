//! Integration tests for the `wirelens` CLI binary.
//!
//! Every test runs against the checked-in discovery fixture with config
//! directories pointed away from the user's real configuration.
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `wirelens` binary with env isolation.
fn wirelens_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wirelens");
    cmd.env("HOME", "/tmp/wirelens-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/wirelens-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("WIRELENS_SNAPSHOT")
        .env_remove("WIRELENS_OUTPUT")
        .env_remove("WIRELENS_DYNVARS__BRAND")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/snapshot.json")
}

/// `wirelens_cmd()` with `--snapshot` pointing at the fixture.
fn with_fixture() -> assert_cmd::Command {
    let mut cmd = wirelens_cmd();
    cmd.arg("--snapshot").arg(fixture());
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = wirelens_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    wirelens_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("interfaces")
            .and(predicate::str::contains("brand"))
            .and(predicate::str::contains("watch")),
    );
}

#[test]
fn test_version_flag() {
    wirelens_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wirelens"));
}

#[test]
fn test_completions_zsh() {
    wirelens_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wirelens"));
}

// ── Snapshot source errors ──────────────────────────────────────────

#[test]
fn test_no_snapshot_is_usage_error() {
    let output = wirelens_cmd().args(["interfaces", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("No discovery snapshot"), "{text}");
}

#[test]
fn test_missing_snapshot_file_is_source_error() {
    let output = wirelens_cmd()
        .args(["--snapshot", "/tmp/wirelens-cli-test-nonexistent/snap.json"])
        .args(["interfaces", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_malformed_snapshot_is_general_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snap.json");
    std::fs::write(&path, "{ not json").unwrap();

    let output = wirelens_cmd()
        .arg("--snapshot")
        .arg(&path)
        .args(["interfaces", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("malformed"));
}

// ── Interfaces ──────────────────────────────────────────────────────

#[test]
fn test_list_plain_keeps_discovery_order() {
    with_fixture()
        .args(["interfaces", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout("eth0\nvf0\nvxlan0\ntap0\nveth9\n");
}

#[test]
fn test_list_table_shows_icons() {
    with_fixture()
        .args(["interfaces", "list", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Icon")
                .and(predicate::str::contains("vf"))
                .and(predicate::str::contains("pf"))
                .and(predicate::str::contains("pids 3,7,19")),
        );
}

#[test]
fn test_list_kind_filter() {
    with_fixture()
        .args(["if", "ls", "--kind", "tap", "-o", "plain"])
        .assert()
        .success()
        .stdout("tap0\n");
}

#[test]
fn test_list_json_has_icon_variants() {
    let output = with_fixture()
        .args(["interfaces", "list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let views: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let icons: Vec<&str> = views
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["icon"].as_str().unwrap())
        .collect();
    assert_eq!(icons, ["pf", "vf", "none", "none", "none"]);
}

#[test]
fn test_get_vxlan_lines() {
    with_fixture()
        .args(["interfaces", "get", "vxlan0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("VXLAN ID: 42")
                .and(predicate::str::contains("VXLAN arp proxy: disabled")),
        );
}

#[test]
fn test_get_tuntap_processes_sorted() {
    let output = with_fixture()
        .args(["interfaces", "get", "tap0", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let processes = view["tuntap"]["processes"].as_array().unwrap();
    let pids: Vec<u64> = processes.iter().map(|p| p["pid"].as_u64().unwrap()).collect();
    assert_eq!(pids, [3, 7, 19]);
    assert_eq!(processes[0]["key"], "tap0-3");
    assert!(processes[0]["containee"].is_null());
    assert_eq!(processes[1]["containee"]["name"], "vm-a");
    assert_eq!(processes[1]["cmdline"], "qemu-system-x86_64 -nographic");
}

#[test]
fn test_get_unknown_interface_is_not_found() {
    let output = with_fixture()
        .args(["interfaces", "get", "eth9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("interfaces list"));
}

// ── Brand ───────────────────────────────────────────────────────────

#[test]
fn test_brand_text_from_snapshot() {
    with_fixture()
        .args(["brand", "text"])
        .assert()
        .success()
        .stdout("Acme Netlab\n");
}

#[test]
fn test_brand_text_default_without_snapshot() {
    wirelens_cmd()
        .args(["brand", "text"])
        .assert()
        .success()
        .stdout("Wirelens\n");
}

#[test]
fn test_brand_icon_rewrites_ids() {
    with_fixture()
        .args(["brand", "icon", "--fill", "#336699"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#"id="brandicon-"#)
                .and(predicate::str::contains("url(#brandicon-"))
                .and(predicate::str::contains(r##"fill="#336699""##))
                .and(predicate::str::contains(r#"id="g""#).not()),
        );
}

// ── Watch ───────────────────────────────────────────────────────────

#[test]
fn test_watch_single_render() {
    with_fixture()
        .args(["watch", "--count", "1", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Acme Netlab | 5 interfaces")
                .and(predicate::str::contains("vxlan0")),
        );
}

#[test]
fn test_watch_enter_triggers_refresh() {
    let output = with_fixture()
        .args(["watch", "--count", "2", "-o", "plain"])
        .write_stdin("\n")
        .timeout(std::time::Duration::from_secs(10))
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("vxlan0").count(), 2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init", "--snapshot"])
        .arg(fixture())
        .assert()
        .success();

    wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot.json"));

    // The recorded snapshot path now serves snapshot-bound commands.
    wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["brand", "text"])
        .assert()
        .success()
        .stdout("Acme Netlab\n");

    let output = wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "init must not overwrite");
}

#[test]
fn test_config_brand_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("wirelens");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[dynvars]\nbrand = \"From Config\"\n",
    )
    .unwrap();

    wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["brand", "text"])
        .assert()
        .success()
        .stdout("From Config\n");
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("wirelens");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[defaults]\noutput = \"xml\"\n[dynvars]\nbrand = \"From Config\"\n",
    )
    .unwrap();

    wirelens_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["brand", "text"])
        .assert()
        .success()
        .stdout("Wirelens\n")
        .stderr(
            predicate::str::contains("ignoring unusable config file")
                .and(predicate::str::contains("defaults.output")),
        );
}

#[test]
fn test_config_path() {
    wirelens_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
