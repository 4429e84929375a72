mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "finanzas_cli";

fn cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn dashboard_prints_overview_cards() {
    let dir = common::temp_dir();
    cli(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Income").and(contains("Savings rate")));
}

#[test]
fn add_then_list_shows_the_new_transaction() {
    let dir = common::temp_dir();
    cli(&dir)
        .args(["add", "expense", "45.50", "food", "Weekly", "groceries"])
        .assert()
        .success()
        .stdout(contains("Recorded transaction"));
    cli(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Weekly groceries"));
}

#[test]
fn remove_of_unknown_id_warns_without_failing() {
    let dir = common::temp_dir();
    cli(&dir)
        .args(["remove", "999"])
        .assert()
        .success()
        .stdout(contains("No transaction with id 999"));
}

#[test]
fn projection_rejects_unknown_profile() {
    let dir = common::temp_dir();
    cli(&dir)
        .args(["projection", "reckless"])
        .assert()
        .failure()
        .stderr(contains("unknown risk profile"));
}

#[test]
fn projection_without_surplus_prints_a_notice() {
    let dir = common::temp_dir();
    // Drop the only income record so the balance goes negative.
    cli(&dir).args(["remove", "1"]).assert().success();
    cli(&dir)
        .args(["projection", "moderate"])
        .assert()
        .success()
        .stdout(contains("positive monthly balance"));
}

#[test]
fn health_reports_all_three_metrics() {
    let dir = common::temp_dir();
    cli(&dir)
        .arg("health")
        .assert()
        .success()
        .stdout(
            contains("Savings rate")
                .and(contains("Debt ratio"))
                .and(contains("Emergency fund")),
        );
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let dir = common::temp_dir();
    cli(&dir).arg("frobnicate").assert().failure();
}
