use crate::support::{sprig, write_graph, DIAMOND, TWO_PAIRS};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_info_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", DIAMOND);

    sprig()
        .args(["info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 4"))
        .stdout(predicate::str::contains("edges: 4"))
        .stdout(predicate::str::contains("total weight: 16"))
        .stdout(predicate::str::contains("components: 1"));
}

#[test]
fn test_info_disconnected_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", TWO_PAIRS);

    sprig()
        .args(["info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("components: 2"))
        .stdout(predicate::str::contains("component sizes: 2, 2"));
}

#[test]
fn test_info_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", TWO_PAIRS);

    let output = sprig()
        .args(["--format", "json", "info"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["total_weight"], 2);
    assert_eq!(json["component_count"], 2);

    let sizes: Vec<u64> = json["component_sizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(sizes, vec![2, 2]);
}

#[test]
fn test_info_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", "0\n");

    sprig()
        .args(["info"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 0"))
        .stdout(predicate::str::contains("components: 0"));
}
