//! Integration tests for the tasklist CLI
//!
//! These tests run the real binary against the reference server on an
//! ephemeral port, with a throwaway config file per test.

#![cfg(feature = "server")]

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tasklist::config::API_URL_ENV;
use tasklist::models::Task;
use tasklist::output::EMPTY_TEXT;
use tasklist::server::{ServerHandle, TaskBoard, TaskServer};
use tempfile::TempDir;

use common::stub::StubServer;

/// Helper function to create a tasklist command with an isolated config
fn tasklist(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("tasklist"));
    cmd.env_remove(API_URL_ENV).arg("--config").arg(config_file(config_dir));
    cmd
}

fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

fn start_server(tasks: Vec<Task>) -> ServerHandle {
    TaskServer::bind("127.0.0.1:0", TaskBoard::with_tasks(tasks)).unwrap().spawn()
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    tasklist(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("tasklist v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    tasklist(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("serve"));
}

// =============================================================================
// TASK WORKFLOW
// =============================================================================

#[test]
fn test_e2e_add_toggle_delete() {
    let temp = TempDir::new().unwrap();
    let server = start_server(Vec::new());
    let url = server.base_url();

    tasklist(temp.path())
        .args(["--api-url", url.as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_TEXT));

    tasklist(temp.path())
        .args(["--api-url", url.as_str(), "add", "  Buy groceries "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Buy groceries (1)"));
    assert_eq!(server.tasks(), vec![Task::new("1", "Buy groceries", false)]);

    tasklist(temp.path())
        .args(["--api-url", url.as_str(), "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked \"Buy groceries\" as complete"))
        .stdout(predicate::str::contains("[x] 1  Buy groceries"));

    tasklist(temp.path())
        .args(["--api-url", url.as_str(), "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Buy groceries\""))
        .stdout(predicate::str::contains(EMPTY_TEXT));
    assert!(server.tasks().is_empty());
}

#[test]
fn test_short_title_rejected_without_request() {
    let temp = TempDir::new().unwrap();
    let stub = StubServer::start(200, "[]");

    tasklist(temp.path())
        .args(["--api-url", stub.base_url(), "add", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must be at least 3 characters"));

    assert!(stub.requests().is_empty());
}

#[test]
fn test_toggle_unknown_id() {
    let temp = TempDir::new().unwrap();
    let server = start_server(vec![Task::new("1", "Walk dog", false)]);

    tasklist(temp.path())
        .arg("--api-url")
        .arg(server.base_url())
        .args(["toggle", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task not found: 99"));
}

#[test]
fn test_load_failure_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let stub = StubServer::start(500, "");

    tasklist(temp.path())
        .args(["--api-url", stub.base_url(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load tasks"));
}

#[test]
fn test_delete_rejected_by_server() {
    let temp = TempDir::new().unwrap();
    let server = start_server(vec![Task::new("1", "Walk dog", false)]);

    tasklist(temp.path())
        .arg("--api-url")
        .arg(server.base_url())
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to delete task"));

    assert_eq!(server.tasks().len(), 1);
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let server = start_server(vec![
        Task::new("1", "Walk dog", false),
        Task::new("2", "Pay rent", true),
    ]);

    let output = tasklist(temp.path())
        .arg("--json")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["completed"], 1);
    assert_eq!(value["tasks"][1]["title"], "Pay rent");
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_config_url_is_used_without_flag() {
    let temp = TempDir::new().unwrap();
    let server = start_server(vec![Task::new("1", "Walk dog", false)]);

    tasklist(temp.path())
        .args(["config", "set-url"])
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Task service set to"));
    assert!(config_file(temp.path()).exists());

    tasklist(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Walk dog"));
}

#[test]
fn test_config_show_reports_override() {
    let temp = TempDir::new().unwrap();

    tasklist(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:3000/api"));

    tasklist(temp.path())
        .args(["--api-url", "http://flag.test/api", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://flag.test/api"));
}

#[test]
fn test_env_url_applies() {
    let temp = TempDir::new().unwrap();

    tasklist(temp.path())
        .env(API_URL_ENV, "http://env.test/api")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://env.test/api"));
}

#[test]
fn test_set_url_rejects_blank() {
    let temp = TempDir::new().unwrap();

    tasklist(temp.path()).args(["config", "set-url", "  "]).assert().failure();
    assert!(!config_file(temp.path()).exists());
}
