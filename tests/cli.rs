//! End-to-end tests for the `sssp-path` binary: `solve` text and `--json`
//! output, engine flags against `SSSP_*` variables, and the `bench` report.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const SAMPLE: &str = "3 3\n0 1 4\n0 2 1\n2 1 1\n0 1\n";
const ISOLATED: &str = "4 3\n0 1 4\n0 2 1\n2 1 1\n0 3\n";
// 0 -> 1 -> 2 -> 3, queried 0 -> 1: early exit settles 2 nodes, a full run 4.
const CHAIN: &str = "4 3\n0 1 1\n1 2 1\n2 3 1\n0 1\n";

fn sssp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sssp-path").expect("sssp-path binary must exist");
    cmd.env("SSSP_LOG", "error");
    cmd.env_remove("SSSP_LOG_FORMAT");
    cmd.env_remove("SSSP_EARLY_EXIT");
    cmd.env_remove("SSSP_HEAP_CAPACITY");
    cmd
}

/// `solve` with engine debug events emitted as JSON lines on stderr.
fn solve_with_engine_log(stdin: &str, args: &[&str], early_exit: Option<&str>) -> String {
    let mut cmd = sssp_cmd();
    cmd.env("SSSP_LOG", "sssp_path=debug").env("SSSP_LOG_FORMAT", "json");
    if let Some(v) = early_exit {
        cmd.env("SSSP_EARLY_EXIT", v);
    }
    let output =
        cmd.arg("solve").args(args).write_stdin(stdin).output().expect("solve should not crash");
    assert!(output.status.success(), "solve failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "distance 1\npath 0 -> 1\n");
    String::from_utf8(output.stderr).expect("stderr is utf-8")
}

#[test]
fn solve_prints_distance_and_path() {
    sssp_cmd()
        .arg("solve")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("distance 2\npath 0 -> 2 -> 1\n");
}

#[test]
fn solve_reports_unreachable_target() {
    sssp_cmd()
        .arg("solve")
        .write_stdin(ISOLATED)
        .assert()
        .success()
        .stdout("no path from 0 to 3\n");
}

#[test]
fn solve_reads_input_file() {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("problem.txt");
    std::fs::write(&file, SAMPLE).expect("write problem");
    sssp_cmd()
        .args(["solve", "--input"])
        .arg(&file)
        .assert()
        .success()
        .stdout("distance 2\npath 0 -> 2 -> 1\n");
}

#[test]
fn solve_missing_input_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    sssp_cmd()
        .args(["solve", "--input"])
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}

#[test]
fn solve_rejects_truncated_input() {
    sssp_cmd()
        .arg("solve")
        .write_stdin("2 1\n0 1 3\n0")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unexpected end of input"))
        .stderr(predicate::str::contains("query target"));
}

#[test]
fn solve_rejects_out_of_range_edge() {
    sssp_cmd()
        .arg("solve")
        .write_stdin("2 1\n0 5 3\n0 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("node 5 is out of range"));
}

#[test]
fn solve_json_marks_path_edges() {
    let output = sssp_cmd()
        .args(["solve", "--json"])
        .write_stdin(SAMPLE)
        .output()
        .expect("solve should not crash");
    assert!(output.status.success(), "solve failed: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).expect("--json should produce valid JSON");

    assert_eq!(json["distance"], 2);
    assert_eq!(json["reachable"], true);
    assert_eq!(json["path"], serde_json::json!([0, 2, 1]));
    let marked: Vec<bool> = json["edges"]
        .as_array()
        .expect("edges array")
        .iter()
        .map(|e| e["on_path"].as_bool().expect("on_path flag"))
        .collect();
    // edges in order: 0->1, 0->2, 2->1
    assert_eq!(marked, vec![false, true, true]);
}

#[test]
fn solve_json_unreachable_has_null_distance() {
    let output = sssp_cmd()
        .args(["solve", "--json"])
        .write_stdin(ISOLATED)
        .output()
        .expect("solve should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("--json should produce valid JSON");
    assert!(json["distance"].is_null());
    assert_eq!(json["reachable"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    let edges = json["edges"].as_array().expect("edges array");
    assert!(edges.iter().all(|e| e["on_path"].as_bool() == Some(false)));
}

#[test]
fn early_exit_by_default() {
    let log = solve_with_engine_log(CHAIN, &[], None);
    assert!(log.contains("query finished"), "{log}");
    assert!(log.contains("\"settled\":2"), "{log}");
}

#[test]
fn full_run_flag_settles_every_node() {
    let log = solve_with_engine_log(CHAIN, &["--full-run"], None);
    assert!(log.contains("\"settled\":4"), "{log}");
}

#[test]
fn early_exit_env_is_honored() {
    let log = solve_with_engine_log(CHAIN, &[], Some("off"));
    assert!(log.contains("\"settled\":4"), "{log}");
}

#[test]
fn full_run_flag_overrides_env() {
    let log = solve_with_engine_log(CHAIN, &["--full-run"], Some("1"));
    assert!(log.contains("\"settled\":4"), "{log}");
}

#[test]
fn bench_prints_report() {
    let output = sssp_cmd()
        .args(["bench", "--sizes", "50", "--queries", "2"])
        .output()
        .expect("bench should not crash");
    assert!(output.status.success(), "bench failed: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).expect("bench should produce valid JSON");
    let rows = json.as_array().expect("report is an array");
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().expect("row is an object");
    for key in [
        "n",
        "m",
        "avg_degree",
        "queries",
        "total_ms",
        "mean_ms",
        "reachable",
        "relaxations",
        "heap_pushes",
    ] {
        assert!(row.contains_key(key), "missing {key} in {row:?}");
    }
    assert_eq!(row["n"], 50);
    assert_eq!(row["queries"], 2);
}

#[test]
fn bench_writes_report_file() {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("reports").join("bench.json");
    sssp_cmd()
        .args(["bench", "--sizes", "20,40", "--queries", "1", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    let text = std::fs::read_to_string(&out).expect("report written");
    let json: Value = serde_json::from_str(&text).expect("report is JSON");
    let sizes: Vec<u64> = json
        .as_array()
        .expect("report is an array")
        .iter()
        .map(|row| row["n"].as_u64().expect("n"))
        .collect();
    assert_eq!(sizes, vec![20, 40]);
}
