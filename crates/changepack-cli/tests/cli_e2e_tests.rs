//! CLI end-to-end tests that invoke the compiled `changepack` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_changepack")` to locate the binary
//! and `std::process::Command` to run it against temporary trees. Stdin is
//! piped or null, so every prompt takes the line-based path.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use changepack_test_utils::{archive, tree::TestTree};

/// Returns the path to the compiled `changepack` binary.
fn changepack_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_changepack"))
}

fn command() -> Command {
    let mut cmd = Command::new(changepack_bin());
    cmd.env_remove("CHANGEPACK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run with the given args and null stdin.
fn run(args: &[&str]) -> Output {
    command()
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute changepack binary")
}

/// Run with the given args, feeding `input` on stdin.
fn run_with_input(args: &[&str], input: &str) -> Output {
    let mut child = command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn changepack binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn scenario() -> TestTree {
    let tree = TestTree::new();
    tree.source_file("a.txt", "alpha");
    tree.identical_file("b.txt", "beta");
    tree.destination_file("c.txt", "gamma");
    tree
}

fn roots<'a>(tree: &'a TestTree, extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["-s", tree.source_str(), "-d", tree.destination_str()];
    args.extend_from_slice(extra);
    args
}

// ============================================================================
// Help & version
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let out = run(&["--help"]);
    assert!(out.status.success(), "changepack --help should exit 0");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("--source") && stdout.contains("--destination"),
        "help output should mention both folders, got:\n{}",
        stdout
    );
}

#[test]
fn test_version_flag() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("changepack"));
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn test_reference_scenario() {
    let tree = scenario();

    let out = run(&roots(&tree, &["--no-pause"]));

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Zip file created at:"), "stdout: {stdout}");

    let zip = tree.source().join("ChangedFiles.zip");
    assert_eq!(archive::entry_names(&zip), vec!["OrphanedFiles.txt", "c.txt"]);
    assert_eq!(
        archive::entry_bytes(&zip, "OrphanedFiles.txt"),
        fs::read(tree.source().join("OrphanedFiles.txt")).unwrap()
    );
}

#[test]
fn test_folders_read_from_stdin() {
    let tree = scenario();
    let input = format!("{}\n{}\n", tree.source_str(), tree.destination_str());

    let out = run_with_input(&["--no-pause"], &input);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Enter path of the source folder"));
    assert!(stdout.contains("Enter path of the destination folder"));
    tree.assert_source_file_exists("ChangedFiles.zip");
}

#[test]
fn test_json_report() {
    let tree = scenario();

    let out = run(&roots(&tree, &["--no-pause", "--json"]));

    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["orphans"], serde_json::json!(["a.txt"]));
    assert_eq!(report["changed"][0]["relative"], "c.txt");
    assert_eq!(report["package"]["overwritten"], false);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Zip file created at: "), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Zip file created at"));
}

#[test]
fn test_pause_prints_exit_hint() {
    let tree = scenario();

    let out = run(&roots(&tree, &[]));

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Press any key to exit."));
}

#[test]
fn test_settings_file_renames_archive() {
    let tree = scenario();
    let settings = tree.root().join("changepack.toml");
    fs::write(&settings, "archive_file_name = \"delta.zip\"\n").unwrap();

    let out = run(&roots(&tree, &["--no-pause", "-c", settings.to_str().unwrap()]));

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    tree.assert_source_file_exists("delta.zip");
    tree.assert_source_file_not_exists("ChangedFiles.zip");
}

// ============================================================================
// Existing archive
// ============================================================================

#[test]
fn test_existing_archive_cancelled_without_answer() {
    let tree = scenario();
    let existing = tree.source_file("ChangedFiles.zip", "original");

    let out = run(&roots(&tree, &["--no-pause"]));

    assert_eq!(out.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&out.stdout).contains("already exists"));
    assert_eq!(fs::read(existing).unwrap(), b"original");
}

#[test]
fn test_existing_archive_escape_cancels() {
    let tree = scenario();
    let existing = tree.source_file("ChangedFiles.zip", "original");

    let out = run_with_input(&roots(&tree, &["--no-pause"]), "\u{1b}\n");

    assert_eq!(out.status.code(), Some(6));
    assert_eq!(fs::read(existing).unwrap(), b"original");
}

#[test]
fn test_existing_archive_overwritten_on_o() {
    let tree = scenario();
    tree.source_file("ChangedFiles.zip", "original");

    let out = run_with_input(&roots(&tree, &["--no-pause"]), "O\n");

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let names = archive::entry_names(&tree.source().join("ChangedFiles.zip"));
    assert!(names.contains(&"c.txt".to_string()));
}

#[test]
fn test_overwrite_flag_skips_prompt() {
    let tree = scenario();
    tree.source_file("ChangedFiles.zip", "original");

    let out = run(&roots(&tree, &["--no-pause", "--overwrite"]));

    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains("already exists"));
}

// ============================================================================
// Early exits
// ============================================================================

#[test]
fn test_identical_roots_exit_code() {
    let tree = scenario();

    let out = run(&["-s", tree.source_str(), "-d", tree.source_str(), "--no-pause"]);

    assert_eq!(out.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&out.stderr)
            .contains("Source and destination folder cannot point to the same location.")
    );
    tree.assert_source_file_not_exists("OrphanedFiles.txt");
}

#[test]
fn test_empty_source_exit_code() {
    let tree = TestTree::new();
    tree.destination_file("c.txt", "c");

    let out = run(&roots(&tree, &["--no-pause"]));

    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No files found in the source folder."));
}

#[test]
fn test_empty_destination_exit_code() {
    let tree = TestTree::new();
    tree.source_file("a.txt", "a");

    let out = run(&roots(&tree, &["--no-pause"]));

    assert_eq!(out.status.code(), Some(4));
    assert!(
        String::from_utf8_lossy(&out.stderr).contains("No files found in the destination folder.")
    );
}

#[test]
fn test_missing_settings_file() {
    let tree = scenario();
    let missing = tree.root().join("nope.toml");

    let out = run(&roots(&tree, &["--no-pause", "--config", missing.to_str().unwrap()]));

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Settings file not found"));
}
