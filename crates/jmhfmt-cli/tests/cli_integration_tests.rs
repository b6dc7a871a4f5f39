// jmhfmt - JMH Benchmark Report Formatter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn jmhfmt_cmd() -> Command {
    Command::cargo_bin("jmhfmt").expect("Failed to find jmhfmt binary")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    jmhfmt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("jmhfmt - JMH benchmark report formatter"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_version_output() {
    jmhfmt_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jmhfmt"));
}

#[test]
fn test_no_subcommand_fails() {
    jmhfmt_cmd().assert().failure().code(1);
}

#[test]
fn test_unknown_flag_exits_with_one() {
    jmhfmt_cmd()
        .args(["report", "--no-such-flag"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--no-such-flag"));
}

// ===== Report Command Tests =====

#[test]
fn test_report_markdown() {
    jmhfmt_cmd()
        .arg("report")
        .arg(fixture("results.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("BenchmarkDotNet-style JMH Results"))
        .stdout(predicate::str::contains("## Memory Strategy Benchmarks"))
        .stdout(predicate::str::contains("## Receive Mode Benchmarks"))
        .stdout(predicate::str::contains("| ArrayPool_SendRecv "))
        .stdout(predicate::str::contains("|    2.000 ms |"))
        .stdout(predicate::str::contains("| Poller_RouterToRouter "))
        .stdout(predicate::str::contains("LatencyBenchmark").not());
}

#[test]
fn test_report_memory_before_receive() {
    let output = jmhfmt_cmd()
        .arg("report")
        .arg(fixture("results.json"))
        .output()
        .expect("Failed to run jmhfmt");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let memory = stdout.find("## Memory Strategy Benchmarks").unwrap();
    let receive = stdout.find("## Receive Mode Benchmarks").unwrap();
    assert!(memory < receive);

    let byte_array = stdout.find("| ByteArray_SendRecv ").unwrap();
    let array_pool = stdout.find("| ArrayPool_SendRecv ").unwrap();
    assert!(byte_array < array_pool);
}

#[test]
fn test_report_single_category() {
    jmhfmt_cmd()
        .args(["report", "--category", "receive"])
        .arg(fixture("results.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## Receive Mode Benchmarks"))
        .stdout(predicate::str::contains("## Memory Strategy Benchmarks").not());
}

#[test]
fn test_report_custom_title() {
    jmhfmt_cmd()
        .args(["report", "--title", "Nightly run"])
        .arg(fixture("results.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\nNightly run\n"));
}

#[test]
fn test_report_json_format() {
    let output = jmhfmt_cmd()
        .args(["report", "--format", "json"])
        .arg(fixture("results.json"))
        .output()
        .expect("Failed to run jmhfmt");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = value["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["category"], "memory_strategy");

    let pool = &categories[0]["rows"][1];
    assert_eq!(pool["variant_label"], "ArrayPool_SendRecv");
    assert_eq!(pool["mean_time_ms"], 2.0);
    assert_eq!(pool["ratio"]["time_ratio"], 2.0);
    assert_eq!(pool["ratio"]["alloc_ratio"], 0.5);

    let poller = &categories[1]["rows"][1];
    assert_eq!(poller["display_name"], "Poller_RouterToRouter");
    assert_eq!(poller["error_ms"], 0.0);
}

#[test]
fn test_report_to_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("RESULTS.md");

    jmhfmt_cmd()
        .arg("report")
        .arg(fixture("results.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("## Memory Strategy Benchmarks"));
}

#[test]
fn test_report_missing_baseline_warns() {
    let file = create_temp_file(
        r#"[{"benchmark": "x.ReceiveModeBenchmark.run",
             "params": {"messageSize": "64", "messageCount": "100", "mode": "POLLER"},
             "primaryMetric": {"score": 10.0, "scoreError": 1.0, "rawData": [[10.0]]}}]"#,
    );

    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Poller_RouterToRouter "))
        .stderr(predicate::str::contains("no baseline for message size"));
}

// ===== Failure Tests =====

#[test]
fn test_report_missing_file() {
    jmhfmt_cmd()
        .args(["report", "does/not/exist/results.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("./gradlew jmh"));
}

#[test]
fn test_report_empty_array() {
    let file = create_temp_file("[]");
    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No benchmark results found"))
        .stderr(predicate::str::contains("./gradlew jmh"));
}

#[test]
fn test_report_blank_file_gives_hint() {
    let file = create_temp_file("");
    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No benchmark results found"))
        .stderr(predicate::str::contains("./gradlew jmh"));
}

#[test]
fn test_report_ignores_nan_samples_of_other_benchmarks() {
    let file = create_temp_file(
        r#"[{"benchmark": "x.ReceiveModeBenchmark.run",
             "params": {"messageSize": "64", "messageCount": "100", "mode": "BLOCKING"},
             "primaryMetric": {"score": 10.0, "scoreError": 1.0, "rawData": [[10.0]]}},
            {"benchmark": "x.LatencyBenchmark.pingPong",
             "primaryMetric": {"score": 3.0, "scoreError": "NaN", "rawData": [["NaN"]]}}]"#,
    );
    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| Blocking_RouterToRouter "));
}

#[test]
fn test_report_invalid_json() {
    let file = create_temp_file("{ not json");
    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JMH results JSON"));
}

#[test]
fn test_report_malformed_record() {
    let file = create_temp_file(
        r#"[{"benchmark": "x.MemoryStrategyBenchmark.Message_SendRecv",
             "params": {"messageSize": "64", "messageCount": "100"},
             "primaryMetric": {"score": 10.0, "scoreError": 1.0}}]"#,
    );
    jmhfmt_cmd()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed record #0"))
        .stderr(predicate::str::contains("primaryMetric.rawData"));
}

#[test]
fn test_report_file_too_large() {
    jmhfmt_cmd()
        .arg("report")
        .arg(fixture("results.json"))
        .env("JMHFMT_MAX_FILE_SIZE", "16")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"));
}

#[test]
fn test_report_unknown_format() {
    jmhfmt_cmd()
        .args(["report", "--format", "html"])
        .arg(fixture("results.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown output format"));
}

// ===== Completion Tests =====

#[test]
fn test_completion_bash() {
    jmhfmt_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jmhfmt"));
}

#[test]
fn test_completion_install_instructions() {
    jmhfmt_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jmhfmt completion zsh"));
}

#[test]
fn test_completion_unsupported_shell() {
    jmhfmt_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
