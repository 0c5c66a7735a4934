use crate::support::pathfind;
use predicates::prelude::*;
use tempfile::tempdir;

const CLASSIC: [&str; 8] = [
    "--item", "5:10", "--item", "4:40", "--item", "6:30", "--item", "3:50",
];

#[test]
fn test_knapsack_value() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "10"])
        .args(CLASSIC)
        .assert()
        .success()
        .stdout("Best value: 90\n");
}

#[test]
fn test_knapsack_selection_human() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "10", "--select"])
        .args(CLASSIC)
        .assert()
        .success()
        .stdout("Best value: 90\nSelected items: 1, 3\nTotal weight: 7 of 10\n");
}

#[test]
fn test_knapsack_json() {
    let dir = tempdir().unwrap();
    let output = pathfind(dir.path())
        .args(["--format", "json", "knapsack", "-c", "4", "--select"])
        .args(["-i", "3:4", "-i", "2:3", "-i", "2:3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], 6);
    assert_eq!(json["selected"], serde_json::json!([1, 2]));
    assert_eq!(json["items"][0]["weight"], 3);
}

#[test]
fn test_knapsack_records() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["--format", "records", "knapsack", "--capacity", "10", "--select"])
        .args(CLASSIC)
        .assert()
        .success()
        .stdout(predicate::str::contains("K capacity=10 items=4 value=90 selected=1,3"));
}

#[test]
fn test_knapsack_without_items() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "10"])
        .assert()
        .success()
        .stdout("Best value: 0\n");
}

#[test]
fn test_knapsack_negative_capacity() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["--format", "json", "knapsack", "--capacity", "-1", "--item", "1:1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""))
        .stderr(predicate::str::contains("invalid capacity: -1"));
}

#[test]
fn test_knapsack_negative_item_weight() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "5", "--item=-2:4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: invalid item weight: -2"));
}

#[test]
fn test_knapsack_malformed_item() {
    let dir = tempdir().unwrap();
    pathfind(dir.path())
        .args(["knapsack", "--capacity", "5", "--item", "heavy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid item: heavy"));
}
