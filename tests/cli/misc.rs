use crate::support::pathfind;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathfind"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("knapsack"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pathfind "));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pathfind --help"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let dir = tempdir().unwrap();
    let graph = crate::support::fixture(&dir);
    pathfind(dir.path())
        .arg("--verbose")
        .arg("path")
        .arg(&graph)
        .args(["0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 -> 1 -> 4 -> 2 -> 3 -> 5"))
        .stderr(predicate::str::contains("shortest_path"));
}
