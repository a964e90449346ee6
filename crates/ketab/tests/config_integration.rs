//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .env_remove("KETAB_STRICT")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["outline_sections"], 8);
    assert_eq!(json["config"]["min_chapter_words"], 1500);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "outline_sections = 5\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["outline_sections"], 5);
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with(".ketab.toml")
    );
}

#[test]
fn discovers_config_in_parent_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ketab.yaml"), "min_chapter_words: 900\n").unwrap();
    let child = tmp.path().join("drafts");
    fs::create_dir(&child).unwrap();

    let json = info_json(&child);
    assert_eq!(json["config"]["min_chapter_words"], 900);
}

#[test]
fn json_config_is_supported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.json"), r#"{"strict": true}"#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["strict"], true);
}

#[test]
fn disable_input_limit_drops_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "disable_input_limit = true\n").unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["input_limit"].is_null());
}

#[test]
fn explicit_config_flag_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "outline_sections = 5\n").unwrap();
    let explicit = tmp.path().join("custom.toml");
    fs::write(&explicit, "outline_sections = 12\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["--config", explicit.to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["outline_sections"], 12);
}

#[test]
fn env_var_overrides_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "strict = false\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("KETAB_STRICT", "true")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["strict"], true);
}

#[test]
fn config_outline_sections_flow_into_init() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "outline_sections = 2\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["init", "book", "Book", "Me", "Essay", "Calm", "6000"])
        .assert()
        .success();

    let outline = fs::read_to_string(tmp.path().join("book/outline.md")).unwrap();
    assert_eq!(outline.matches("### Chapter").count(), 2);
    assert!(outline.contains("- Word target: 3000"));
}

#[test]
fn malformed_config_reports_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".ketab.toml"), "outline_sections = \"many\"\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration"));
}
