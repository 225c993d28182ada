use crate::support::{sprig, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    sprig()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sprig"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("mst"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("bfs"));
}

#[test]
fn test_version_flag() {
    sprig()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sprig"));
}

#[test]
fn test_no_command_prints_hint() {
    sprig()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `sprig --help`"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    sprig()
        .args(["--format", "records", "info", "g.graph"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    sprig()
        .args(["--format", "json", "bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"code\":2"))
        .stderr(predicate::str::contains("usage_error"));
}

#[test]
fn test_data_error_json_envelope() {
    let dir = tempdir().unwrap();

    sprig()
        .args(["--format", "json", "mst"])
        .arg(dir.path().join("absent.graph"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"code\":3"))
        .stderr(predicate::str::contains("graph_not_found"));
}

#[test]
fn test_quiet_suppresses_human_error() {
    let dir = tempdir().unwrap();

    sprig()
        .args(["--quiet", "mst"])
        .arg(dir.path().join("absent.graph"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.graph", "2\n0 1 1\n");

    sprig()
        .args(["--verbose", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("load_graph"));
}
