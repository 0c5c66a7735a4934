use crate::support::{fixture, pathfind, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_info_human_output() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .success()
        .stdout("Vertices: 6\nEdges: 7\nRepresentation: map\n");
}

#[test]
fn test_info_json_for_matrix_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "square.json",
        r#"{"matrix": [[0, 1, -1, -1], [1, 0, 1, -1], [-1, 1, 0, -1], [-1, -1, -1, 0]]}"#,
    );

    let output = pathfind(dir.path())
        .args(["--format", "json", "info"])
        .arg(&graph)
        .args(["-r", "matrix"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], 4);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["representation"], "matrix");
}

#[test]
fn test_info_records_output() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .args(["--format", "records", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("I vertices=6 edges=7 representation=map"));
}
