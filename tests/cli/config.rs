use crate::support::{fixture, pathfind};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_defaults_apply() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);
    fs::write(
        dir.path().join("config.toml"),
        "format = \"records\"\nrepresentation = \"matrix\"\n",
    )
    .unwrap();

    pathfind(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("representation=matrix"))
        .stdout(predicate::str::contains("P from=0 to=5"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);
    fs::write(
        dir.path().join("config.toml"),
        "format = \"records\"\nrepresentation = \"matrix\"\n",
    )
    .unwrap();

    pathfind(dir.path())
        .args(["--format", "human", "info", "-r", "map"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("Vertices: 6\nEdges: 7\nRepresentation: map\n");
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    pathfind(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("info")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vertices\": 6"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("info")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);
    fs::write(dir.path().join("config.toml"), "format = \"xml\"\n").unwrap();

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
