use crate::support::{sprig, write_graph, DIAMOND, TWO_PAIRS};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_mst_human_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", DIAMOND);

    sprig()
        .args(["mst"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("0 -- 1  (weight 1)\n1 -- 2  (weight 2)\n2 -- 3  (weight 3)\ntotal weight: 6\ntrees: 1\n");
}

#[test]
fn test_mst_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", DIAMOND);

    let output = sprig()
        .args(["--format", "json", "mst"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 3);
    assert_eq!(json["total_weight"], 6);
    assert_eq!(json["tree_count"], 1);

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0]["u"], 0);
    assert_eq!(edges[0]["v"], 1);
    assert_eq!(edges[2]["weight"], 3);
}

#[test]
fn test_mst_disconnected_graph_yields_forest() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", TWO_PAIRS);

    let output = sprig()
        .args(["--format", "json", "mst"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["total_weight"], 2);
    assert_eq!(json["tree_count"], 2);
}

#[test]
fn test_mst_edgeless_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", "3\n");

    sprig()
        .args(["mst"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("No spanning edges"))
        .stdout(predicate::str::contains("trees: 3"));
}

#[test]
fn test_mst_missing_file() {
    let dir = tempdir().unwrap();

    sprig()
        .args(["mst"])
        .arg(dir.path().join("absent.graph"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_mst_malformed_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", "3\n0 1\n");

    sprig()
        .args(["mst"])
        .arg(&graph)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}
