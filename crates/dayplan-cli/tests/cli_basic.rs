//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They stick
//! to read-only surfaces so a developer's own planner state is never
//! touched.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dayplan-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_subcommands() {
    let (stdout, _stderr, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "help failed");
    for subcommand in ["plan", "habit", "project", "todo", "blocked", "config", "data"] {
        assert!(
            stdout.contains(subcommand),
            "help output missing '{subcommand}'"
        );
    }
}

#[test]
fn test_plan_help() {
    let (stdout, _stderr, code) = run_cli(&["plan", "--help"]);
    assert_eq!(code, 0, "plan help failed");
    assert!(stdout.contains("show"));
    assert!(stdout.contains("done"));
}

#[test]
fn test_habit_help() {
    let (stdout, _stderr, code) = run_cli(&["habit", "--help"]);
    assert_eq!(code, 0, "habit help failed");
    assert!(stdout.contains("add"));
    assert!(stdout.contains("reset-week"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_stdout, _stderr, code) = run_cli(&["frobnicate"]);
    assert_ne!(code, 0, "unknown subcommand unexpectedly succeeded");
}

#[test]
fn test_clear_without_confirmation_is_refused() {
    let (stdout, _stderr, code) = run_cli(&["data", "clear"]);
    assert_eq!(code, 0, "clear refusal should still exit zero");
    assert!(stdout.contains("Refusing"));
}
