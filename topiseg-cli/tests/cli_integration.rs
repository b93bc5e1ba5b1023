//! Integration tests for the topiseg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn topiseg() -> Command {
    Command::cargo_bin("topiseg").unwrap()
}

#[test]
fn test_segment_text_output() {
    let assert = topiseg()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.iter().filter(|l| **l == "==========").count(), 3);
    assert_eq!(lines[0], "==========");
    assert!(lines[1].starts_with("The striker"));
    assert_eq!(lines[6], "==========");
    assert!(lines[7].starts_with("Knead the dough"));
}

#[test]
fn test_json_output_with_fixed_count() {
    let assert = topiseg()
        .args(["segment", "-f", "json", "-k", "2", "--unit", "line"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value[0]["boundaries"], serde_json::json!([5]));
    assert_eq!(value[0]["segments"].as_array().map(Vec::len), Some(2));
    assert!(value[0].get("metadata").is_none());
}

#[test]
fn test_json_metadata_and_trace() {
    topiseg()
        .args(["segment", "-f", "json", "--metadata", "--trace"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unit_count\": 10"))
        .stdout(predicate::str::contains("\"gains\""));
}

#[test]
fn test_markdown_output() {
    topiseg()
        .args(["segment", "-f", "markdown"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## Segment 1 (units 0-4)"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total segments: 2*"));
}

#[test]
fn test_texttiling_runs() {
    topiseg()
        .args(["segment", "-a", "texttiling", "--window", "6", "--step", "3"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=========="))
        .stdout(predicate::str::contains("The striker scored a late goal"));
}

#[test]
fn test_short_input_is_single_segment() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("short.txt");
    fs::write(&input, "Just one sentence.").unwrap();

    topiseg()
        .args(["segment", "-f", "json"])
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"boundaries\": []"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    topiseg()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Knead the dough and let the dough rise."));
}

#[test]
fn test_glob_pattern() {
    topiseg()
        .args(["segment", "-q", "-f", "json"])
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("rivers-and-orchestras.txt"))
        .stdout(predicate::str::contains("sports-and-cooking.txt"));
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("topiseg.toml");
    fs::write(
        &config,
        "[segmentation]\nunit = \"line\"\n\n[output]\nformat = \"markdown\"\n",
    )
    .unwrap();

    topiseg()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("rivers-and-orchestras.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("*Total segments:"));

    topiseg()
        .args(["segment", "-f", "json", "--unit", "sentence", "-k", "2", "--mask-size", "3"])
        .arg("-i")
        .arg(fixture_path("rivers-and-orchestras.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"boundaries\": [\n      3\n    ]"));
}

#[test]
fn test_invalid_file() {
    topiseg()
        .args(["segment", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_invalid_mask_size() {
    topiseg()
        .args(["segment", "--mask-size", "4"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("mask_size"));
}

#[test]
fn test_segment_count_too_large() {
    topiseg()
        .args(["segment", "-k", "50"])
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Segmentation error"));
}

#[test]
fn test_help_command() {
    topiseg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic segmentation"));
}

#[test]
fn test_list_algorithms() {
    topiseg()
        .args(["list", "algorithms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c99"))
        .stdout(predicate::str::contains("texttiling"));
}

#[test]
fn test_list_formats() {
    topiseg()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("generated.toml");

    topiseg()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success();

    topiseg()
        .arg("segment")
        .arg("-i")
        .arg(fixture_path("sports-and-cooking.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("=========="));
}

#[test]
fn test_generate_config_stdout() {
    topiseg()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[segmentation]"))
        .stdout(predicate::str::contains("mask_size = 11"));
}
