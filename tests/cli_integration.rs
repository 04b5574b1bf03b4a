//! CLI integration tests for the stash binary.
//!
//! These exercise argument validation and the offline commands; the REST
//! client itself is covered against a mock server in the library tests.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the stash binary command.
fn stash() -> Command {
    Command::cargo_bin("stash").unwrap()
}

/// Create a temporary working directory.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const PROJECT_TOML: &str = r#"
package = "stashifier"
author = "Ben Warfield"
author_email = "bwarfield@amplify.com"
license = "amplify"
description = "Stash client library for Amplify utilities."
zip_safe = "True"
artifact_registry_url = "https://packages.wgenhq.net/pynest"
ci_server_url = "https://poe210.wgenhq.net/jenkins"
source_host = "git.amplify.com"
"#;

// ============================================================================
// scope validation
// ============================================================================

#[test]
fn test_repos_requires_project_or_user() {
    stash()
        .args(["repos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --user or --project"));
}

#[test]
fn test_create_rejects_project_and_user_together() {
    stash()
        .args(["create", "scratch", "--project", "SI", "--user", "bwarfield"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "EITHER --user or --project may be supplied",
        ));
}

#[test]
fn test_permissions_requires_project() {
    stash()
        .args(["permissions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("supply --project"));
}

// ============================================================================
// host resolution
// ============================================================================

#[test]
fn test_repos_without_configured_host_fails() {
    let tmp = temp_dir();

    stash()
        .args(["repos", "--project", "SI"])
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Stash hostname configured"));
}

// ============================================================================
// stash metadata
// ============================================================================

#[test]
fn test_metadata_prints_record() {
    let tmp = temp_dir();
    fs::write(tmp.path().join("Project.toml"), PROJECT_TOML).unwrap();

    stash()
        .args(["metadata"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("package:       stashifier"))
        .stdout(predicate::str::contains("license:       amplify"))
        .stdout(predicate::str::contains("zip safe:      true"))
        .stdout(predicate::str::contains("source host:   git.amplify.com"));
}

#[test]
fn test_metadata_accepts_explicit_path() {
    let tmp = temp_dir();
    let path = tmp.path().join("elsewhere.toml");
    fs::write(&path, PROJECT_TOML).unwrap();

    stash()
        .args(["metadata", "--manifest-path", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("author:        Ben Warfield"));
}

#[test]
fn test_metadata_fails_on_missing_required_field() {
    let tmp = temp_dir();
    let doc = PROJECT_TOML.replace("license = \"amplify\"", "");
    fs::write(tmp.path().join("Project.toml"), doc).unwrap();

    stash()
        .args(["metadata"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing or invalid field"))
        .stderr(predicate::str::contains("license"));
}

#[test]
fn test_metadata_fails_without_file() {
    let tmp = temp_dir();

    stash()
        .args(["metadata"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project.toml"));
}

// ============================================================================
// stash info
// ============================================================================

#[test]
fn test_info_outside_git_checkout_fails() {
    let tmp = temp_dir();

    stash()
        .args(["info"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not inside a git checkout"));
}

// ============================================================================
// stash completions
// ============================================================================

#[test]
fn test_completions_generates_script() {
    stash()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stash"));
}
