//! Integration tests for the GSP CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated test directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the gsp binary (built by cargo)
fn gsp_binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_gsp"));
    command.env_remove("RUST_LOG");
    command
}

/// Run gsp command with the given args in the specified directory
fn run_gsp(dir: &Path, args: &[&str]) -> Output {
    gsp_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute gsp command")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Run a command that must succeed and parse its JSON output
fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = run_gsp(dir, args);
    assert!(
        output.status.success(),
        "gsp {:?} failed: {}",
        args,
        stderr(&output)
    );
    serde_json::from_str(&stdout(&output)).expect("stdout is not valid JSON")
}

fn as_f64_vec(value: &serde_json::Value) -> Vec<f64> {
    value
        .as_array()
        .expect("expected array")
        .iter()
        .map(|v| v.as_f64().expect("expected number"))
        .collect()
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["demo", "generate", "spectrum", "filter", "export"] {
        assert!(out.contains(command), "help is missing {}", command);
    }
}

#[test]
fn test_version_verbose() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["--version-verbose"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("gsp-core"));
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn test_demo_table() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["demo", "--seed", "42"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Laplacian matrix"));
    assert!(out.contains("Eigenvalues"));
    assert!(out.contains("low-pass"));
}

#[test]
fn test_demo_json() {
    let dir = TempDir::new().unwrap();
    let report = run_json(dir.path(), &["demo", "--seed", "42", "--format", "json"]);

    assert_eq!(report["size"], 7);
    assert_eq!(report["seed"], 42);
    assert_eq!(report["connected"], true);
    assert_eq!(report["edges"].as_array().unwrap().len(), 12);
    assert_eq!(report["filters"].as_array().unwrap().len(), 4);

    let signal = as_f64_vec(&report["signal"]);
    assert_eq!(signal, vec![3.0, 4.0, 5.0, 7.0, 11.0, 13.0, 17.0]);

    let reconstructed = as_f64_vec(&report["reconstructed"]);
    for (a, b) in signal.iter().zip(&reconstructed) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }
}

#[test]
fn test_demo_csv() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["demo", "--seed", "1", "--format", "csv"]);

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines[0],
        "node,signal,gft,inverse,laplacian,high-pass,low-pass,fourier"
    );
    assert_eq!(lines.len(), 8);
}

// ============================================================================
// Generate / Spectrum
// ============================================================================

#[test]
fn test_generate_is_deterministic_for_seed() {
    let dir = TempDir::new().unwrap();
    let args = ["generate", "-n", "12", "--seed", "5", "--format", "json"];

    let first = run_json(dir.path(), &args);
    let second = run_json(dir.path(), &args);
    assert_eq!(first, second);
    assert_eq!(first["edge_count"], 22);
    assert_eq!(first["symmetric"], true);
}

#[test]
fn test_generate_extra_edges() {
    let dir = TempDir::new().unwrap();
    let report = run_json(
        dir.path(),
        &["generate", "-n", "8", "-s", "2", "-e", "3", "--format", "json"],
    );
    assert_eq!(report["edge_count"], 2 * (7 + 3));
}

#[test]
fn test_generate_laplacian_csv() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(
        dir.path(),
        &["generate", "-n", "4", "--seed", "3", "--matrix", "laplacian", "--format", "csv"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "node,0,1,2,3");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_spectrum_starts_at_zero() {
    let dir = TempDir::new().unwrap();
    let report = run_json(
        dir.path(),
        &["spectrum", "-n", "6", "--seed", "8", "--format", "json"],
    );

    let eigenvalues = as_f64_vec(&report["eigenvalues"]);
    assert_eq!(eigenvalues.len(), 6);
    assert!(eigenvalues[0].abs() < 1e-9);
    assert!(eigenvalues.windows(2).all(|w| w[0] <= w[1]));
    assert!(report.get("coefficients").is_none());
}

#[test]
fn test_spectrum_with_signal() {
    let dir = TempDir::new().unwrap();
    let report = run_json(
        dir.path(),
        &["spectrum", "-n", "3", "--seed", "8", "--signal", "1,2,3", "--format", "json"],
    );
    assert_eq!(as_f64_vec(&report["coefficients"]).len(), 3);
    assert_eq!(as_f64_vec(&report["fft_magnitude"]).len(), 3);
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn test_filter_laplacian_constant_signal() {
    let dir = TempDir::new().unwrap();
    let report = run_json(
        dir.path(),
        &[
            "filter", "laplacian", "-n", "4", "--seed", "11", "--signal", "2,2,2,2", "--format",
            "json",
        ],
    );

    assert_eq!(report["filter"], "laplacian");
    assert_eq!(as_f64_vec(&report["output"]), vec![0.0; 4]);
}

#[test]
fn test_filter_rejects_oversized_signal() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(
        dir.path(),
        &["filter", "high-pass", "-n", "3", "--signal", "1,2,3,4"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Cannot place 4 values on a 3-node graph"));
}

#[test]
fn test_filter_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["filter", "band-pass"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown filter"));
}

#[test]
fn test_filter_normalize_constant_signal_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(
        dir.path(),
        &["filter", "low-pass", "-n", "3", "--signal", "5,5,5", "--normalize"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Cannot normalize signal"));
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_dot_file() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(
        dir.path(),
        &["export", "-n", "5", "--seed", "4", "-o", "graph.dot", "--name", "demo"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported"));

    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert!(dot.starts_with("digraph \"demo\" {"));
    assert_eq!(dot.matches("->").count(), 8);
}

#[test]
fn test_export_summary_honors_output_flags() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(
        dir.path(),
        &[
            "export", "-n", "4", "--seed", "2", "-o", "graph.dot", "--format", "json",
            "--compact",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(out.trim_end().lines().count(), 1, "expected minified JSON: {}", out);

    let summary: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(summary["path"], "graph.dot");
    assert_eq!(summary["nodes"], 4);
    assert_eq!(summary["edges"], 6);
}

#[test]
fn test_export_signal_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = run_gsp(dir.path(), &["export", "-n", "3", "--signal", "1,2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "node,value\n0,1\n1,2\n2,0");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".gsprc.toml"),
        "[generator]\nsize = 4\nseed = 9\n\n[signal]\nvalues = [1.0, 2.0]\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let report = run_json(dir.path(), &["filter", "high-pass"]);
    assert_eq!(report["seed"], 9);
    assert_eq!(as_f64_vec(&report["input"]), vec![1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_cli_flags_override_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".gsprc.toml"),
        "[generator]\nsize = 4\nseed = 9\n",
    )
    .unwrap();

    let report = run_json(dir.path(), &["generate", "-n", "6", "--format", "json"]);
    assert_eq!(report["size"], 6);
    assert_eq!(report["seed"], 9);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gsprc.toml"), "[generator\nsize = ").unwrap();

    let output = run_gsp(dir.path(), &["generate", "--seed", "1", "--format", "json"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Failed to parse .gsprc.toml"));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["size"], 7);
}
