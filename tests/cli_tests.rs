mod common;

use std::fs;

use common::tracker_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_add_and_summary() {
    let dir = TempDir::new().unwrap();

    tracker_cmd(&dir)
        .args(["--user", "1", "add", "10.00", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"));
    tracker_cmd(&dir)
        .args(["--user", "1", "add", "5.50", "Food", "snack"])
        .assert()
        .success();
    tracker_cmd(&dir)
        .args(["--user", "1", "add", "20", "Transport", "taxi", "home"])
        .assert()
        .success();

    tracker_cmd(&dir)
        .args(["--user", "1", "summary", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $35.50"))
        .stdout(predicate::str::contains("Transactions: 3"))
        .stdout(predicate::str::contains("Food: $15.50"));
}

#[test]
fn test_summary_json() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["-u", "4", "add", "8", "Bills"])
        .assert()
        .success();

    let output = tracker_cmd(&dir)
        .args(["-u", "4", "summary", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["count"], 1);
    assert_eq!(summary["days"], 30);
    assert_eq!(summary["by_category"]["Bills"], 8.0);
}

#[test]
fn test_history_is_per_user() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["-u", "1", "add", "3", "Food", "coffee"])
        .assert()
        .success();
    tracker_cmd(&dir)
        .args(["-u", "2", "add", "4", "Food", "tea"])
        .assert()
        .success();

    tracker_cmd(&dir)
        .args(["-u", "1", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("tea").not());
}

#[test]
fn test_ledger_document_format() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["-u", "9", "add", "12.5", "Shopping", "socks"])
        .assert()
        .success();

    let contents = fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["user_id"], 9);
    assert_eq!(value[0]["amount"], 12.5);
    assert_eq!(value[0]["description"], "socks");
    assert!(value[0]["timestamp"].is_f64());
}

#[test]
fn test_corrupt_ledger_does_not_crash() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("expenses.json"), "{{{ nope").unwrap();

    tracker_cmd(&dir)
        .args(["-u", "1", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded in this period."));
}

#[test]
fn test_corrupt_budgets_do_not_block_add() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("budgets.json"), "{{nope").unwrap();

    tracker_cmd(&dir)
        .args(["-u", "1", "add", "10", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"));
    tracker_cmd(&dir)
        .args(["-u", "1", "budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set."));
}

#[test]
fn test_rejects_non_numeric_amount() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["add", "lots", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not an amount"));
}

#[test]
fn test_budget_commands() {
    let dir = TempDir::new().unwrap();

    tracker_cmd(&dir)
        .args(["-u", "1", "budget", "set", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget: $300.00"));
    tracker_cmd(&dir)
        .args(["-u", "1", "budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget: $300.00"));
    tracker_cmd(&dir)
        .args(["-u", "2", "budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set."));
}

#[test]
fn test_bot_requires_token() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("bot")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"))
        .stderr(predicate::str::contains("Missing credential"));
}

#[test]
fn test_bot_handles_messages_from_stdin() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .env("TELEGRAM_BOT_TOKEN", "123:abc")
        .args(["-u", "5", "bot"])
        .write_stdin("/add 7 Food lunch\n/summary\n/nonsense\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added!"))
        .stdout(predicate::str::contains("Total: $7.00"))
        .stdout(predicate::str::contains("unknown command /nonsense"));
}

#[test]
fn test_categories() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Healthcare"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    tracker_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default summary days: 30"));
}

#[test]
fn test_config_counts_journaled_events() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"event_log_enabled": true}"#).unwrap();

    tracker_cmd(&dir)
        .args(["-u", "1", "add", "2", "Food"])
        .assert()
        .success();

    tracker_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Events recorded:"))
        .stdout(predicate::str::contains("unreadable").not());
}
