use crate::support::{fixture, pathfind};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_tree_human_output() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .arg("tree")
        .arg(&graph)
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest paths from 0 (6 reached):"))
        .stdout(predicate::str::contains("  3  distance=7  0 -> 1 -> 4 -> 2 -> 3"))
        .stdout(predicate::str::contains("  5  distance=8  0 -> 1 -> 4 -> 2 -> 3 -> 5"));
}

#[test]
fn test_tree_json_distances() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    let output = pathfind(dir.path())
        .args(["--format", "json", "tree"])
        .arg(&graph)
        .args(["0", "--representation", "matrix"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let distances: Vec<u64> = json["reached"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["distance"].as_u64().unwrap())
        .collect();
    assert_eq!(distances, vec![0, 2, 6, 7, 5, 8]);
}

#[test]
fn test_tree_records_output() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .args(["--format", "records", "tree"])
        .arg(&graph)
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=tree representation=map from=4 reached=6"))
        .stdout(predicate::str::contains("T vertex=4 distance=0 path=4"))
        .stdout(predicate::str::contains("T vertex=0 distance=5 path=4,1,0"));
}
