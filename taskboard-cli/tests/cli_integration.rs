//! End-to-end tests for the taskboard binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an isolated home and working directory
fn taskboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("TASKBOARD_ACTOR")
        .env_remove("TASKBOARD_START")
        .env_remove("TASKBOARD_CONFIRM_DELETES")
        .env_remove("TASKBOARD_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_renders_sample_board() {
    let dir = TempDir::new().unwrap();
    taskboard(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("To Do (1)"))
        .stdout(predicate::str::contains("Design new homepage"));
}

#[test]
fn test_colors_json() {
    let dir = TempDir::new().unwrap();
    taskboard(&dir)
        .args(["--json", "colors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"emerald\""));
}

#[test]
fn test_run_from_stdin_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let output = taskboard(&dir)
        .args(["--json", "--start", "default", "--actor", "ci", "run", "--activity"])
        .write_stdin("{\"op\": \"add task\", \"title\": \"Ship it\"}\n{oops\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line 2: skipped"))
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["board"]["taskCount"], 1);
    assert_eq!(document["activity"][0]["op"], "add task");
    assert_eq!(document["activity"][0]["actor"], "ci");
}

#[test]
fn test_run_from_file_with_project_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".taskboard.toml"),
        "start = \"sample\"\nconfirm_deletes = \"yes\"\noutput = \"json\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("ops.json"),
        r#"[{"op": "delete column", "id": "todo"}]"#,
    )
    .unwrap();

    let output = taskboard(&dir)
        .args(["run", "ops.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["results"][0]["result"]["tasksDeleted"], 1);
    assert_eq!(document["board"]["columns"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unconfirmed_delete_without_terminal_declines() {
    let dir = TempDir::new().unwrap();
    let output = taskboard(&dir)
        .args(["--json", "run"])
        .write_stdin("{\"op\": \"delete task\", \"id\": \"1\"}\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["results"][0]["result"]["changed"], false);
    assert_eq!(document["board"]["taskCount"], 2);
}

#[test]
fn test_errors_exit_with_one() {
    let dir = TempDir::new().unwrap();
    taskboard(&dir)
        .args(["run", "missing.jsonl"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.jsonl"));

    taskboard(&dir)
        .arg("run")
        .write_stdin("[{\"op\": ")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));

    std::fs::write(dir.path().join(".taskboard.yaml"), "output: sideways\n").unwrap();
    taskboard(&dir)
        .arg("demo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration"));
}
