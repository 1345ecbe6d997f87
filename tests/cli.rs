use std::fs;
use std::process::Command;
use tempfile::tempdir;
#[test]
fn cli_writes_digest_and_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let output = dir.path().join("out/codebase.md");
    let run = Command::new(env!("CARGO_BIN_EXE_aidigest"))
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--show-output-files")
        .output()
        .unwrap();
    assert!(run.status.success());
    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Files included in output: 1"));
    assert!(stdout.contains("1. main.rs"));
    assert!(fs::read_to_string(output).unwrap().contains("# main.rs"));
}
#[test]
fn cli_json_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let run = Command::new(env!("CARGO_BIN_EXE_aidigest"))
        .arg("-i")
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path().join("codebase.md"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(run.status.success());
    let report: serde_json::Value = serde_json::from_slice(&run.stdout).unwrap();
    assert_eq!(report["included_count"], 1);
    assert!(report.get("document_text").is_none());
}
#[test]
fn cli_fails_on_missing_input() {
    let dir = tempdir().unwrap();
    let run = Command::new(env!("CARGO_BIN_EXE_aidigest"))
        .arg("-i")
        .arg(dir.path().join("missing"))
        .arg("-o")
        .arg(dir.path().join("codebase.md"))
        .output()
        .unwrap();
    assert!(!run.status.success());
}
