//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cvgen(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cvgen").unwrap();
    cmd.current_dir(project.path())
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("APP_CONFIG_PATH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_content_shows_suggestions() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();

    cvgen(&temp)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions"))
        .stderr(predicate::str::contains("--content"));
}

#[test]
fn test_explicit_missing_app_config_exits_four() {
    let temp = TempDir::new().unwrap();

    cvgen(&temp)
        .env("APP_CONFIG_PATH", "nonexistent_config.toml")
        .arg("generate")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_app_config_exits_four() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app_config.toml"), "not = valid = toml").unwrap();

    cvgen(&temp)
        .arg("generate")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_job_file_outside_project_root_is_refused() {
    let outside = TempDir::new().unwrap();
    let job_path = outside.path().join("job.txt");
    fs::write(&job_path, "external job description").unwrap();

    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();
    fs::write(
        temp.path().join("templates").join("resume_page1.html"),
        "<html></html>",
    )
    .unwrap();
    fs::write(
        temp.path().join("templates").join("resume_page2.html"),
        "<html></html>",
    )
    .unwrap();
    fs::write(
        temp.path().join("resume.toml"),
        "[personal]\nname = \"Test User\"\n",
    )
    .unwrap();

    cvgen(&temp)
        .args(["generate", "--resume", "--job"])
        .arg(&job_path)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("outside the project directory"));
}

#[test]
fn test_unknown_argument_exits_two() {
    let temp = TempDir::new().unwrap();

    cvgen(&temp)
        .args(["generate", "--definitely-not-a-flag"])
        .assert()
        .failure()
        .code(2);
}
