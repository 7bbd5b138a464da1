//! Integration tests for the locsync CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the locsync binary.
fn locsync_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("locsync"))
}

/// Test that the CLI shows help.
#[test]
fn test_help() {
    locsync_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("locsync"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    locsync_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail.
#[test]
fn test_unknown_command() {
    locsync_cmd().arg("unknown-command").assert().failure();
}

/// Running without a config file is a configuration error.
#[test]
fn test_missing_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    locsync_cmd()
        .current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"));
}

/// A fully translated tree validates clean.
#[test]
fn test_validate_clean_tree() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);
    common::write_namespace(project.path(), "fr", "app", r#"{"HELLO": "Bonjour"}"#);

    locsync_cmd()
        .current_dir(project.path())
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("present and filled"));
}

/// Missing keys fail validation with exit code 1.
#[test]
fn test_validate_missing_key_exits_nonzero() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello", "BYE": "Bye"}"#);
    common::write_namespace(project.path(), "fr", "app", r#"{"HELLO": "Bonjour"}"#);

    locsync_cmd()
        .current_dir(project.path())
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("BYE"))
        .stderr(predicate::str::contains("Validation failed"));
}

/// JSON output carries the structured report.
#[test]
fn test_validate_json_report() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello", "BYE": "Bye"}"#);
    common::write_namespace(project.path(), "fr", "app", r#"{"HELLO": "Bonjour"}"#);

    locsync_cmd()
        .current_dir(project.path())
        .args(["validate", "-o", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"missing\""))
        .stdout(predicate::str::contains("\"valid\": false"));
}

/// Sync scaffolds configured-but-absent languages with placeholders.
#[test]
fn test_sync_creates_target_files() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);

    locsync_cmd().current_dir(project.path()).arg("sync").assert().success();

    let created = common::namespace_path(project.path(), "fr", "app");
    assert!(created.exists());
    let contents = fs::read_to_string(created).unwrap();
    assert!(contents.contains("\"HELLO\": \"\""));
}

/// A second sync run reports a clean tree.
#[test]
fn test_sync_is_idempotent() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);
    common::write_namespace(
        project.path(),
        "fr",
        "app",
        r#"{"HELLO": "Bonjour", "OLD": "x"}"#,
    );
    common::write_namespace(project.path(), "fr", "legacy", r#"{"OLD": "x"}"#);

    locsync_cmd().current_dir(project.path()).arg("sync").assert().success();

    assert!(!common::namespace_path(project.path(), "fr", "legacy").exists());

    locsync_cmd()
        .current_dir(project.path())
        .arg("sync")
        .assert()
        .success()
        .stderr(predicate::str::contains("Everything is in sync"));
}

/// Orphaned keys are stripped from disk during validation.
#[test]
fn test_validate_heals_orphaned_keys() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);
    common::write_namespace(
        project.path(),
        "fr",
        "app",
        r#"{"HELLO": "Bonjour", "OLD": "x"}"#,
    );

    locsync_cmd().current_dir(project.path()).arg("validate").assert().success();

    let contents =
        fs::read_to_string(common::namespace_path(project.path(), "fr", "app")).unwrap();
    assert!(!contents.contains("OLD"));
}

/// Duplicate values against the common namespace are reported.
#[test]
fn test_duplicates_report() {
    let project = common::project(&["en"], "en");
    common::write_namespace(project.path(), "en", "common", r#"{"SAVE": "Save"}"#);
    common::write_namespace(
        project.path(),
        "en",
        "editor",
        r#"{"SAVE_BTN": "Save", "CANCEL": "Cancel"}"#,
    );

    locsync_cmd()
        .current_dir(project.path())
        .arg("duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAVE_BTN"))
        .stdout(predicate::str::contains("SAVE"));
}

/// Fill with the echo provider copies source text into targets.
#[test]
fn test_fill_echo_writes_targets() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);
    common::write_namespace(project.path(), "fr", "app", "{}");

    locsync_cmd()
        .current_dir(project.path())
        .args(["fill", "--provider", "echo"])
        .assert()
        .success();

    let contents =
        fs::read_to_string(common::namespace_path(project.path(), "fr", "app")).unwrap();
    assert!(contents.contains("\"HELLO\": \"Hello\""));
}

/// Dry-run fill leaves files untouched.
#[test]
fn test_fill_dry_run_writes_nothing() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);
    common::write_namespace(project.path(), "fr", "app", "{}");

    locsync_cmd()
        .current_dir(project.path())
        .args(["fill", "--provider", "echo", "--dry-run"])
        .assert()
        .success();

    let contents =
        fs::read_to_string(common::namespace_path(project.path(), "fr", "app")).unwrap();
    assert!(!contents.contains("HELLO"));
}

/// Unknown providers are a configuration error.
#[test]
fn test_fill_unknown_provider() {
    let project = common::project(&["en", "fr"], "en");
    common::write_namespace(project.path(), "en", "app", r#"{"HELLO": "Hello"}"#);

    locsync_cmd()
        .current_dir(project.path())
        .args(["fill", "--provider", "deepl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown provider"));
}

/// Keys listing includes plural base keys with --bases.
#[test]
fn test_keys_with_plural_bases() {
    let project = common::project(&["en"], "en");
    common::write_namespace(
        project.path(),
        "en",
        "cart",
        r#"{"items_one": "{{count}} item", "items_other": "{{count}} items"}"#,
    );

    locsync_cmd()
        .current_dir(project.path())
        .args(["keys", "--bases", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plural-base"))
        .stdout(predicate::str::contains("\"items\""));
}

/// Init scaffolds a config and refuses to overwrite without --force.
#[test]
fn test_init_scaffolds_project() {
    let tmp = tempfile::TempDir::new().unwrap();

    locsync_cmd().current_dir(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join(".locsync.yaml").exists());
    assert!(common::namespace_path(tmp.path(), "en", "common").exists());

    locsync_cmd().current_dir(tmp.path()).arg("init").assert().code(2);

    locsync_cmd()
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
