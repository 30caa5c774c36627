mod common;

use common::GlossaryCmd;

#[test]
fn emit_builtin_registry() {
    let output = GlossaryCmd::run(&["emit"]);
    assert!(
        output.status.success(),
        "emit should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".. |MPI_Comm_split| replace:: ``MPI_Comm_split``"));
    assert!(stdout.contains(".. |term-MPI_Comm_split| raw:: html"));
    assert!(stdout.contains(".. |MPI_Isend-implementors_docs| raw:: html"));
    // non-blocking functions carry standard-document links
    assert!(stdout.contains("node63.htm#Node63.html"));
    // plain functions do not
    let get_fragment = stdout
        .split(".. |MPI_Get-implementors_docs|")
        .nth(1)
        .and_then(|rest| rest.split(".. |").next())
        .unwrap();
    assert!(!get_fragment.contains("MPI standard 3.1"));
}

#[test]
fn emit_yaml_registry() {
    let registry = GlossaryCmd::fixture_path("simple_registry.yaml");
    let output = GlossaryCmd::run(&["emit", "--registry", registry.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "emit should succeed for valid registry: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("node270.htm#Node270.html"));
    assert!(stdout.contains("https://www.mpich.org/static/docs/latest/www3/MPI_Put.html"));
}

#[test]
fn emit_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("epilog.rst");
    let output = GlossaryCmd::run(&["emit", "--output", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "emit --output should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "markup should go to the file");

    let written = std::fs::read_to_string(&out).expect("output file");
    assert!(written.contains(".. |MPI_Comm_split| replace::"));
}

#[test]
fn emit_strict_rejects_duplicates() {
    let registry = GlossaryCmd::fixture_path("duplicate_names.yaml");
    let output = GlossaryCmd::run(&["emit", "--strict", "--registry", registry.to_str().unwrap()]);
    assert!(!output.status.success(), "strict emit should fail");
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MPI_Allgatherv"), "stderr: {stderr}");
}

#[test]
fn emit_non_strict_tolerates_duplicates() {
    let registry = GlossaryCmd::fixture_path("duplicate_names.yaml");
    let output = GlossaryCmd::run(&["emit", "--registry", registry.to_str().unwrap()]);
    assert!(output.status.success());

    // both definitions are emitted, in order, without deduplication
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.matches(".. |MPI_Allgatherv| replace::").count(),
        2,
        "expected independent fragments: {stdout}"
    );
}

#[test]
fn validate_valid_registry() {
    let registry = GlossaryCmd::fixture_path("simple_registry.yaml");
    let output = GlossaryCmd::run(&["validate", registry.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "validate should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation passed"), "stderr: {stderr}");
}

#[test]
fn validate_reports_duplicates_as_warnings() {
    let registry = GlossaryCmd::fixture_path("duplicate_names.yaml");
    let output = GlossaryCmd::run(&["validate", registry.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "non-strict validate should exit 0"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARNING"), "stderr: {stderr}");
    assert!(stderr.contains("MPI_Allgatherv"));
}

#[test]
fn validate_strict_fails_on_duplicates() {
    let registry = GlossaryCmd::fixture_path("duplicate_names.yaml");
    let output = GlossaryCmd::run(&["validate", "--strict", registry.to_str().unwrap()]);
    assert!(!output.status.success(), "strict validate should fail");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_json_output() {
    let registry = GlossaryCmd::fixture_path("duplicate_names.yaml");
    let output = GlossaryCmd::run(&[
        "validate",
        "--format",
        "json",
        registry.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(parsed["summary"]["files"], 1);
    assert_eq!(
        parsed["files"][0]["findings"]["duplicate_names"][0]["name"],
        "MPI_Allgatherv"
    );
}

#[test]
fn validate_broken_registry() {
    let registry = GlossaryCmd::fixture_path("broken.yaml");
    let output = GlossaryCmd::run(&["validate", registry.to_str().unwrap()]);
    assert!(!output.status.success(), "broken YAML should fail");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_missing_file() {
    let output = GlossaryCmd::run(&["validate", "/tmp/nonexistent_mpi_glossary_registry.yaml"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn list_human_format() {
    let output = GlossaryCmd::run(&["list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("communicators  MPI_Comm_split"));
    assert!(stdout.contains("non-blocking  MPI_Wait (node 64)"));
}

#[test]
fn list_json_format() {
    let output = GlossaryCmd::run(&["list", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let items = parsed.as_array().expect("JSON list output is an array");
    assert!(!items.is_empty());
    assert!(items.iter().any(|i| i["name"] == "MPI_Isend" && i["node"] == 63));
}

#[test]
fn list_lesson_filter() {
    let output = GlossaryCmd::run(&["list", "--lesson", "collectives"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MPI_Allgatherv"));
    assert!(!stdout.contains("MPI_Comm_split"));
}

#[test]
fn list_unknown_lesson_is_empty() {
    let output = GlossaryCmd::run(&["list", "--lesson", "no-such-lesson"]);
    assert!(output.status.success(), "unknown lesson should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No functions registered"));
}

#[test]
fn version_json_output() {
    let output = GlossaryCmd::run(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("version JSON should parse");
    assert_eq!(parsed["name"], "mpi-glossary");
}

#[test]
fn completions_bash() {
    let output = GlossaryCmd::run(&["completions", "bash"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mpi-glossary"));
}
