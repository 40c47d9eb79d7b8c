//! End-to-end tests for the pling binary
//!
//! Every invocation points PLING_HOME at a temp directory and supplies the
//! api key through the environment, so nothing touches the real install
//! location. Runs use -q so no notification leaves the process.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pling(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pling").unwrap();
    cmd.env("PLING_HOME", home.path());
    cmd.env("PLING_API_KEY", "test-key");
    cmd
}

#[test]
fn test_list_empty_home() {
    let home = TempDir::new().unwrap();
    pling(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_run_succeeds() {
    let home = TempDir::new().unwrap();
    pling(&home).args(["-q", "true"]).assert().success();
}

#[test]
fn test_exit_code_not_taken_from_task() {
    // A failing task does not fail the program.
    let home = TempDir::new().unwrap();
    pling(&home).args(["-q", "false"]).assert().success();
}

#[test]
fn test_save_then_list() {
    let home = TempDir::new().unwrap();
    pling(&home)
        .args(["-q", "--save", "builds", "true"])
        .assert()
        .success();

    assert!(home.path().join("builds.saved_args").is_file());

    pling(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::diff("builds\n"));
}

#[test]
fn test_save_then_recall_runs_saved_tasks() {
    let home = TempDir::new().unwrap();
    pling(&home)
        .args(["-q", "--save", "builds", "true"])
        .assert()
        .success();

    // The saved set carries -q, so the recalled run is silent too.
    pling(&home)
        .args(["--recall", "builds"])
        .assert()
        .success();
}

#[test]
fn test_recall_missing_set_exits_nonzero() {
    let home = TempDir::new().unwrap();
    pling(&home)
        .args(["--recall", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not locate saved command set \"nope\"",
        ));
}

#[test]
fn test_missing_credential_is_fatal() {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("pling").unwrap();
    cmd.env("PLING_HOME", home.path());
    cmd.env_remove("PLING_API_KEY");
    cmd.args(["-q", "true"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_list_needs_no_credential() {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("pling").unwrap();
    cmd.env("PLING_HOME", home.path());
    cmd.env_remove("PLING_API_KEY");
    cmd.arg("--list").assert().success();
}

#[test]
fn test_help_names_the_flags() {
    let home = TempDir::new().unwrap();
    pling(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--break")
                .and(predicate::str::contains("--each"))
                .and(predicate::str::contains("--return"))
                .and(predicate::str::contains("--strict"))
                .and(predicate::str::contains("--recall")),
        );
}
