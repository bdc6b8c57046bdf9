//! Tests for CLI argument parsing.

use std::process::Command;
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bookshelf"))
}

#[test]
fn test_help_lists_options() {
    let output = bookshelf_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--open"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_flag() {
    let output = bookshelf_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_route_is_rejected() {
    let output = bookshelf_cmd()
        .arg("--open")
        .arg("/library")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown route"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = bookshelf_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--base-url")
        .arg("ftp://books")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("http://"));
}

#[test]
fn test_unreadable_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let output = bookshelf_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
