#![allow(clippy::unwrap_used)]
// CLI argument-surface smoke tests via assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn depot() -> Command {
    let mut cmd = Command::cargo_bin("depot").unwrap();
    // Keep the environment from leaking a real backend into the tests.
    cmd.env_remove("DEPOT_API_URL");
    cmd.env_remove("DEPOT_PROFILE");
    cmd
}

#[test]
fn help_lists_all_resources() {
    depot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("customers"))
        .stdout(predicate::str::contains("locations"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn no_subcommand_shows_help() {
    depot().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_api_url_is_a_diagnostic_error() {
    depot()
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .args(["customers", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no back-office URL configured"));
}

#[test]
fn product_create_requires_field_flags() {
    depot()
        .args(["products", "create", "--id", "P1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn delete_aliases_are_wired() {
    depot()
        .args(["products", "rm", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete a product"));
}
