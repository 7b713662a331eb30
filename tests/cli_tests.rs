//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A config file pointing storage into the temp dir and the API at a port
/// nothing listens on.
fn workspace() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("schooldesk.toml");
    let storage = dir.path().join("state");
    fs::write(
        &config,
        format!(
            "[api]\nbase_url = \"http://127.0.0.1:9\"\n\n[storage]\ndir = \"{}\"\n",
            storage.display()
        ),
    )
    .expect("write config");
    (dir, config)
}

fn schooldesk(config: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("schooldesk");
    cmd.env_remove("SCHOOLDESK_API_URL")
        .env_remove("SCHOOLDESK_PASSWORD")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_help_lists_resources() {
    cargo_bin_cmd!("schooldesk")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("sessions"))
        .stdout(predicate::str::contains("class-subjects"))
        .stdout(predicate::str::contains("grades"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("schooldesk")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schooldesk"));
}

#[test]
fn test_config_check_reports_effective_values() {
    let (_dir, config) = workspace();

    schooldesk(&config)
        .args(["config", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("http://127.0.0.1:9"));
}

#[test]
fn test_config_check_honours_env_override() {
    let (_dir, config) = workspace();

    schooldesk(&config)
        .env("SCHOOLDESK_API_URL", "https://school.example.org")
        .args(["config", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://school.example.org"))
        .stdout(predicate::str::contains("overridden by SCHOOLDESK_API_URL"));
}

#[test]
fn test_config_check_fails_on_invalid_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[api]\nbase_url = \"ftp://school.example.org\"\n").unwrap();

    schooldesk(&config)
        .args(["config", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn test_layout_mode_persists_between_runs() {
    let (dir, config) = workspace();

    schooldesk(&config)
        .args(["layout", "mode", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout mode set to dark"));

    let stored = fs::read_to_string(dir.path().join("state/app-layout-config.json"))
        .expect("layout persisted");
    assert!(stored.contains(r#""layoutMode":"dark""#));

    schooldesk(&config)
        .args(["layout", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-bs-theme"))
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn test_layout_mode_rejects_unknown_value() {
    let (_dir, config) = workspace();

    schooldesk(&config)
        .args(["layout", "mode", "sepia"])
        .assert()
        .failure();
}

#[test]
fn test_unreachable_backend_reports_store_error() {
    let (_dir, config) = workspace();

    schooldesk(&config)
        .args(["sessions", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load sessions"));
}

#[test]
fn test_whoami_without_session() {
    let (_dir, config) = workspace();

    schooldesk(&config)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}
