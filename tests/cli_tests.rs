//! Integration tests for the transit CLI
//!
//! These tests run the transit binary end to end against the built-in
//! reference network and against a custom TOML network file.

use std::io::Write;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Get a Command for transit
fn transit() -> Command {
    cargo_bin_cmd!("transit")
}

fn custom_network() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[lines]]
name = "red"
stations = ["Alpha", "Beta", "Gamma"]

[[lines]]
name = "blue"
stations = ["Delta", "Epsilon"]
"#
    )
    .unwrap();
    file
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    transit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: transit"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_version_flag() {
    transit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("transit"));
}

#[test]
fn test_subcommand_help() {
    transit()
        .args(["path", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find a route"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    transit()
        .args(["--format", "records", "analyze"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    transit()
        .args(["--format", "json", "analyze", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_no_command_exit_code_2() {
    transit().assert().code(2);
}

#[test]
fn test_unknown_station_exit_code_3() {
    transit()
        .args(["path", "Nowhere", "Академмістечко"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown station"));
}

#[test]
fn test_unknown_station_json_envelope() {
    transit()
        .args(["--format", "json", "path", "Академмістечко", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_station\""));
}

#[test]
fn test_missing_network_file_exit_code_3() {
    transit()
        .args(["--network", "/nonexistent/net.toml", "analyze"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("network file not found"));
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_human() {
    transit()
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stations:    52"))
        .stdout(predicate::str::contains("Connections: 52"))
        .stdout(predicate::str::contains("Золоті Ворота: 4"));
}

#[test]
fn test_analyze_quiet_skips_degrees() {
    transit()
        .args(["--quiet", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stations:    52"))
        .stdout(predicate::str::contains("Station degrees").not());
}

#[test]
fn test_analyze_json() {
    transit()
        .args(["--format", "json", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"station_count\":52"))
        .stdout(predicate::str::contains("\"connection_count\":52"));
}

// ============================================================================
// Path
// ============================================================================

#[test]
fn test_path_same_line_weight() {
    transit()
        .args(["--format", "json", "path", "Академмістечко", "Театральна"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":true"))
        .stdout(predicate::str::contains("\"hops\":9"))
        .stdout(predicate::str::contains("\"total_weight\":27.0"));
}

#[test]
fn test_path_human_output() {
    transit()
        .args(["path", "Театральна", "Палац Спорту"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Театральна -> Золоті Ворота -> Палац Спорту",
        ))
        .stdout(predicate::str::contains("total weight 8"));
}

#[test]
fn test_path_dfs_algo() {
    transit()
        .args(["--format", "json", "path", "Сирець", "Кловська", "--algo", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\":\"dfs\""))
        .stdout(predicate::str::contains("\"found\":true"));
}

#[test]
fn test_path_unknown_algo_exit_code_2() {
    transit()
        .args(["path", "Сирець", "Кловська", "--algo", "a-star"])
        .assert()
        .code(2);
}

#[test]
fn test_path_no_path_is_success() {
    let file = custom_network();
    transit()
        .arg("--network")
        .arg(file.path())
        .args(["path", "Alpha", "Delta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path between Alpha and Delta"));
}

#[test]
fn test_path_no_path_json() {
    let file = custom_network();
    transit()
        .arg("--network")
        .arg(file.path())
        .args(["--format", "json", "path", "Alpha", "Delta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":false"));
}

#[test]
fn test_path_same_station() {
    transit()
        .args(["--format", "json", "path", "Оболонь", "Оболонь"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hops\":0"))
        .stdout(predicate::str::contains("\"total_weight\":0.0"));
}

// ============================================================================
// Compare and stations
// ============================================================================

#[test]
fn test_compare_runs_all_three() {
    transit()
        .args(["compare", "Академмістечко", "Палац Спорту"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dfs]"))
        .stdout(predicate::str::contains("[bfs]"))
        .stdout(predicate::str::contains("[shortest]"));
}

#[test]
fn test_compare_json() {
    transit()
        .args(["--format", "json", "compare", "Оболонь", "Позняки"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dfs\""))
        .stdout(predicate::str::contains("\"bfs\""))
        .stdout(predicate::str::contains("\"shortest\""));
}

#[test]
fn test_stations_lists_lines() {
    transit()
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Святошинсько-Броварська"))
        .stdout(predicate::str::contains("Академмістечко"));
}

#[test]
fn test_custom_network_analyze() {
    let file = custom_network();
    transit()
        .arg("--network")
        .arg(file.path())
        .args(["--format", "json", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"station_count\":5"))
        .stdout(predicate::str::contains("\"connection_count\":3"));
}
