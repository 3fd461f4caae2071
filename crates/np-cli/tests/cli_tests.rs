//! Integration tests for the `np` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the compiled np binary
fn np_bin() -> String {
    env!("CARGO_BIN_EXE_np").to_string()
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../np-pipeline/tests/fixtures/sample_project")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

fn scratch_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    copy_dir(&fixture(), temp.path());
    fs::create_dir_all(temp.path().join("profiles")).unwrap();
    temp
}

/// Run `np -p <root> <args>` and return (stdout, stderr, success).
fn run_np(root: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(np_bin())
        .arg("-p")
        .arg(root)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute np with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_collect_json() {
    let temp = scratch_project();
    let (stdout, stderr, ok) = run_np(temp.path(), &["collect", "-o", "json"]);
    assert!(ok, "stderr: {stderr}");

    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Lower Hellgate");
    assert_eq!(records[1]["name"], "Rattlesnake");
    assert_eq!(records[1]["parks"], serde_json::json!(["Greenough Park"]));
    assert_eq!(records[1]["schools"], serde_json::json!([]));
    assert_eq!(records[1]["pop10"], 200);
    assert!(records[1]["pop_current"].is_null());

    // collect never writes profiles
    assert_eq!(fs::read_dir(temp.path().join("profiles")).unwrap().count(), 0);
}

#[test]
fn test_collect_table_subset() {
    let temp = scratch_project();
    let (stdout, stderr, ok) = run_np(temp.path(), &["collect", "--nhoods", "Rattlesnake"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.starts_with("== Rattlesnake ==\n"));
    assert!(!stdout.contains("Lower Hellgate"));
}

#[cfg(unix)]
#[test]
fn test_build_writes_html_and_pdf() {
    let temp = scratch_project();
    let (stdout, stderr, ok) = run_np(temp.path(), &["build"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Complete. 2 profiles"));

    for file in [
        "Lower_Hellgate.html",
        "Lower_Hellgate.pdf",
        "Rattlesnake.html",
        "Rattlesnake.pdf",
    ] {
        assert!(temp.path().join("profiles").join(file).exists(), "{file}");
    }
}

#[test]
fn test_build_refuses_existing_pdf() {
    let temp = scratch_project();
    fs::write(temp.path().join("profiles/Rattlesnake.pdf"), "old").unwrap();

    let (_, stderr, ok) = run_np(temp.path(), &["build"]);
    assert!(!ok);
    assert!(stderr.contains("[E005]"), "stderr: {stderr}");
    assert!(!temp.path().join("profiles/Rattlesnake.html").exists());
}

#[test]
fn test_missing_config() {
    let temp = TempDir::new().unwrap();
    let (_, stderr, ok) = run_np(temp.path(), &["collect"]);
    assert!(!ok);
    assert!(stderr.contains("[E001]"), "stderr: {stderr}");
}

#[test]
fn test_shorten_requires_share_dir() {
    let temp = scratch_project();
    let (_, stderr, ok) = run_np(temp.path(), &["shorten"]);
    assert!(!ok);
    assert!(stderr.contains("--share-dir"), "stderr: {stderr}");
}
