//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn process_missing_input_writes_empty_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("out");

    Command::cargo_bin("audex")
        .unwrap()
        .arg("process")
        .arg(tmp.path().join("missing.pdf"))
        .args(["--report", "trial-balance", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success();

    let out_file = out_dir.join("missing_Trial_Balance.txt");
    assert_eq!(std::fs::read_to_string(out_file).unwrap(), "");
}

#[test]
fn process_json_on_missing_input_is_empty_list() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("audex")
        .unwrap()
        .arg("process")
        .arg(tmp.path().join("missing.pdf"))
        .args(["--report", "tax-exempt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn config_path_runs_without_config_file() {
    Command::cargo_bin("audex")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn batch_with_no_matches_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let pattern = tmp.path().join("*.pdf");

    Command::cargo_bin("audex")
        .unwrap()
        .arg("batch")
        .arg(pattern)
        .args(["--report", "manager-flash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}
