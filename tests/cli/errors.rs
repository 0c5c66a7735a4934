use crate::support::{fixture, pathfind, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_duplicate_edge_is_a_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "dup.json",
        r#"{"edges": [{"from": 0, "to": 1, "weight": 1}, {"from": 1, "to": 0, "weight": 5}]}"#,
    );

    let output = pathfind(dir.path())
        .args(["--format", "json", "path"])
        .arg(&graph)
        .args(["0", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "already_exists");
    assert_eq!(json["error"]["message"], "edge already exists: (0, 1)");
}

#[test]
fn test_negative_weight_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "neg.toml",
        "[[edges]]\nfrom = 0\nto = 1\nweight = -3\n",
    );

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr("error: invalid edge weight: -3\n");
}

#[test]
fn test_missing_file_is_a_failure() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere.json");

    pathfind(dir.path())
        .args(["--format", "json", "info"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"failed_operation\""));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "graph.csv", "0,1,2\n");

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension: csv"));
}

#[test]
fn test_malformed_document_is_a_failure() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "broken.json", "{\"edges\": [");

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: JSON error:"));
}

#[test]
fn test_asymmetric_matrix_as_map_is_invalid() {
    let dir = tempdir().unwrap();
    let graph = write_graph(&dir, "directed.json", r#"{"matrix": [[0, 1], [-1, 0]]}"#);

    pathfind(dir.path())
        .arg("info")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("asymmetric entry at (0, 1)"));

    pathfind(dir.path())
        .args(["info", "-r", "matrix"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges: 1"));
}

#[test]
fn test_quiet_suppresses_human_errors() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["--quiet", "info"])
        .arg(dir.path().join("nowhere.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_clap_errors_use_json_envelope_when_requested() {
    let dir = tempdir().unwrap();
    let graph = fixture(&dir);

    pathfind(dir.path())
        .args(["--format", "json", "path"])
        .arg(&graph)
        .args(["zero", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_capacity_too_large_for_a_table_is_a_usage_error() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "9223372036854775807", "--item", "1:1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error: invalid capacity: 9223372036854775807",
        ));
}

#[test]
fn test_sparse_vertex_ids_are_too_large_for_a_matrix() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        &dir,
        "sparse.json",
        r#"{"edges": [{"from": 0, "to": 18446744073709551615, "weight": 1}]}"#,
    );

    pathfind(dir.path())
        .args(["info", "--representation", "matrix"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid vertex"));

    pathfind(dir.path())
        .args(["info", "--representation", "map"])
        .arg(&graph)
        .assert()
        .success();
}
