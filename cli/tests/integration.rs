use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::tempdir;

fn fontopt() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fontopt"))
}

#[test]
fn build_json_outputs_single_element_array() {
    let output = fontopt()
        .args([
            "build", "--name", "Inter", "--point-height", "12", "--variation", "wght=600", "--json",
        ])
        .output()
        .expect("run fontopt");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json");
    let items = parsed.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Inter");
    assert_eq!(items[0]["point_height"], 12.0);
    assert!(items[0]["height"].is_null());
    assert_eq!(items[0]["variations"][0]["tag"], "wght");
}

#[test]
fn build_reads_base_from_stdin() {
    let mut child = fontopt()
        .args(["build", "--base", "-", "--ndjson", "--underline"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn fontopt");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"{"name": "Roboto", "fallbacks": ["Noto Sans"]}"#)
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout:\n{}", stdout);

    let parsed: Value = serde_json::from_str(lines[0]).expect("ndjson line");
    assert_eq!(parsed["name"], "Roboto");
    assert_eq!(parsed["underline"], true);
    assert_eq!(parsed["fallbacks"][0], "Noto Sans");
}

#[test]
fn compare_reports_ordering() {
    let tmp = tempdir().expect("tempdir");
    let small = tmp.path().join("small.json");
    let large = tmp.path().join("large.json");
    fs::write(&small, r#"{"height": 10}"#).expect("write small");
    fs::write(&large, r#"{"height": 20}"#).expect("write large");

    let output = fontopt()
        .arg("compare")
        .arg(&small)
        .arg(&large)
        .output()
        .expect("run fontopt");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "less");

    let output = fontopt()
        .arg("compare")
        .arg(&small)
        .arg(&small)
        .output()
        .expect("run fontopt");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "equal");
}

#[test]
fn conflicting_heights_in_config_fail_with_message() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{"height": 10, "point_height": 8}"#).expect("write");

    let output = fontopt()
        .arg("build")
        .arg("--base")
        .arg(&path)
        .output()
        .expect("run fontopt");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr: {stderr}");
    assert!(stderr.contains("mutually exclusive"), "stderr: {stderr}");
}

#[test]
fn tag_rejects_long_input() {
    let output = fontopt()
        .args(["tag", "wght", "toolong"])
        .output()
        .expect("run fontopt");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("\"wght\""));
}
