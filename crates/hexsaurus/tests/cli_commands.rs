#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn hexsaurus(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexsaurus"))
        .env_remove("HEXSAURUS_SEPARATOR")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("hexsaurus should run")
}

fn hexsaurus_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hexsaurus"))
        .env_remove("HEXSAURUS_SEPARATOR")
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("hexsaurus should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("stdin should be writable");

    child.wait_with_output().expect("hexsaurus should finish")
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect()
}

#[test]
fn encode_emits_json_records() {
    let output = hexsaurus(&["--format", "json", "encode", "0a1b2c3d4f"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["direction"], "encode");
    assert_eq!(records[0]["input"], "0a1b2c3d4f");
    assert_eq!(records[0]["output"], "bocoad-taiwayz");
    assert!(records[0]["schema_id"]
        .as_str()
        .is_some_and(|id| id.ends_with("conversion.schema.json")));
}

#[test]
fn decode_raw_prints_hex_only() {
    let output = hexsaurus(&["--format", "raw", "decode", "bocoad-taiwayz", "something invalid"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0a1b2c3d4f\nba75c48882\n"
    );
}

#[test]
fn decode_lossy_flag() {
    let output = hexsaurus(&["--format", "raw", "decode", "--lossy", "bocoad-taiwayz"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0a1b2c3d0ef\n");
}

#[test]
fn encode_reads_stdin_lines() {
    let output = hexsaurus_with_stdin(&["--format", "raw", "encode"], "0a1b2c3d4f\n\nFF\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bocoad-taiwayz\nzu\n");
}

#[test]
fn stdin_round_trip() {
    let encoded = hexsaurus_with_stdin(&["--format", "raw", "encode", "-s", " "], "5f3c9a01e2b7\n");
    assert!(encoded.status.success());
    let words = String::from_utf8_lossy(&encoded.stdout).to_string();
    assert_eq!(words, "jufoip racoyd see\n");

    let decoded = hexsaurus_with_stdin(&["--format", "raw", "decode"], &words);
    assert!(decoded.status.success());
    assert_eq!(String::from_utf8_lossy(&decoded.stdout), "5f3c9a01e2b7\n");
}

#[test]
fn separator_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_hexsaurus"))
        .env("HEXSAURUS_SEPARATOR", ".")
        .args(["--format", "raw", "encode", "0a1b2c3d4f"])
        .output()
        .expect("hexsaurus should run");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bocoad.taiwayz\n");
}

#[test]
fn colliding_separator_falls_back_and_warns() {
    let output = hexsaurus(&["--format", "raw", "encode", "--separator", "b", "0a1b2c3d4f"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bocoad-taiwayz\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("separator is a table sound"));
}

#[test]
fn invalid_hex_prints_empty_line_by_default() {
    let output = hexsaurus(&["--format", "json", "encode", "not a hex string"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    assert_eq!(records[0]["output"], "");
    assert_eq!(records[0]["valid"], false);
}

#[test]
fn strict_encode_returns_60_on_invalid_hex() {
    let output = hexsaurus(&["encode", "--strict", "0a1b2g"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid hex digit 'g' at position 5"));
}

#[test]
fn table_lists_sixteen_digits() {
    let output = hexsaurus(&["--format", "json", "table"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    let entries = records[0]["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[10]["digit"], "a");
    assert_eq!(entries[10]["consonant"], "r");
    assert_eq!(entries[10]["vowel"], "o");
}

#[test]
fn table_by_sound_lists_thirty_two_sounds() {
    let output = hexsaurus(&["--format", "json", "table", "--by-sound"]);

    assert!(output.status.success());
    let records = json_lines(&output);
    let sounds = records[0]["sounds"].as_array().expect("sounds array");
    assert_eq!(sounds.len(), 32);
}

#[test]
fn version_reports_package_version() {
    let output = hexsaurus(&["version"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("hexsaurus {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn envinfo_reports_version() {
    let output = hexsaurus(&["--format", "json", "envinfo"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("envinfo.schema.json"));
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("envinfo should emit json");
    assert_eq!(
        payload.get("version").and_then(|v| v.as_str()),
        Some(env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn envinfo_reports_table_and_separator_resolution() {
    let output = hexsaurus(&["--format", "json", "envinfo", "--separator", "ay"]);

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("envinfo should emit json");
    assert_eq!(payload["table_version"], 1);
    assert_eq!(payload["table_fingerprint"].as_str().map(str::len), Some(16));
    assert_eq!(payload["separator"]["requested"], "ay");
    assert_eq!(payload["separator"]["effective"], "-");
    assert_eq!(payload["separator"]["fell_back"], true);
    assert_eq!(payload["self_check"]["ok"], true);
    assert!(payload.get("dependencies").is_none());
}

#[test]
fn extended_version_lists_only_known_build_values() {
    let output = hexsaurus(&["version", "--extended"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("table_version: 1"));
    assert!(stdout.contains("rustc: "));
    assert!(!stdout.contains("git_hash"));
}
