//! End-to-end tests for the `verzi` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn verzi(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verzi").unwrap();
    cmd.env("VERZI_CLI_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .env_remove("OPENAI_API_KEY");
    cmd
}

fn write_ledger(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("ledger.csv");
    fs::write(
        &path,
        "date,description,category,amount\n\
         2024-03-01,Groceries,food,60\n\
         2024-03-02,Rent,housing,1200\n\
         2024-03-03,Takeaway,food,40\n",
    )
    .unwrap();
    path
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();

    verzi(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(dir.path().join("config.json").exists());

    verzi(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Monthly income:   $20000.00"))
        .stdout(predicate::str::contains("Chat API key:     missing"));
}

#[test]
fn test_budget_summary_from_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger = write_ledger(&dir);

    verzi(dir.path())
        .args(["budget", "summary", "--ledger"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Budget Dashboard"))
        .stdout(predicate::str::contains("housing"))
        .stdout(predicate::str::contains("Total: $1300.00"));
}

#[test]
fn test_budget_summary_csv_has_every_section() {
    let dir = TempDir::new().unwrap();
    let ledger = write_ledger(&dir);

    let output = verzi(dir.path())
        .args(["budget", "summary", "--format", "csv", "--income", "3000", "--ledger"])
        .arg(&ledger)
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Monthly Income,3000");
    assert_eq!(lines[1], "date,description,category,amount");
    assert_eq!(lines[5], "Category,Total,Percentage");
    assert_eq!(lines[6], "food,100,7.69");
    assert_eq!(lines[8], "Day,Income,Spent");
    assert_eq!(lines.len(), 16);
}

#[test]
fn test_budget_ledger_csv_reimports() {
    let dir = TempDir::new().unwrap();
    let ledger = write_ledger(&dir);
    let exported = dir.path().join("exported.csv");

    verzi(dir.path())
        .args(["budget", "ledger", "--format", "csv", "--ledger"])
        .arg(&ledger)
        .arg("--output")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger exported to"));

    verzi(dir.path())
        .args(["budget", "summary", "--ledger"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Takeaway"))
        .stdout(predicate::str::contains("Total: $1300.00"));
}

#[test]
fn test_budget_chart_json() {
    let dir = TempDir::new().unwrap();
    let ledger = write_ledger(&dir);

    let output = verzi(dir.path())
        .args(["budget", "chart", "--format", "json", "--ledger"])
        .arg(&ledger)
        .output()
        .unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["labels"], serde_json::json!(["food", "housing"]));
    assert_eq!(chart["datasets"][0]["data"], serde_json::json!([100.0, 1200.0]));
    assert_eq!(
        chart["datasets"][0]["backgroundColor"],
        serde_json::json!(["#FF6384", "#36A2EB"])
    );
}

#[test]
fn test_budget_weekly_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("weekly.csv");

    verzi(dir.path())
        .args([
            "budget", "weekly", "--income", "3000", "--spend", "100,0,0,0,0,0,50", "--format",
            "csv", "--output",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly comparison exported to"));

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Day,Income,Spent");
    assert_eq!(lines[1], "Mo,100,100");
    assert_eq!(lines[7], "Su,100,50");
}

#[test]
fn test_budget_weekly_rejects_short_spend() {
    let dir = TempDir::new().unwrap();

    verzi(dir.path())
        .args(["budget", "weekly", "--spend", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 7 daily spend values"));
}

#[test]
fn test_feedback_dry_run_prints_body() {
    let dir = TempDir::new().unwrap();

    let output = verzi(dir.path())
        .args([
            "feedback",
            "submit",
            "--dry-run",
            "--customer-service",
            "4",
            "--overall",
            "8",
            "--comments",
            "Helpful staff",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["ratings"]["service"], 3);
    assert_eq!(body["feedback"]["customerService"], 4);
    assert_eq!(body["feedback"]["overallExperience"], 8);
    assert_eq!(body["feedback"]["comments"], "Helpful staff");
}

#[test]
fn test_feedback_rejects_six_stars() {
    let dir = TempDir::new().unwrap();

    verzi(dir.path())
        .args(["feedback", "submit", "--dry-run", "--authenticity", "6"])
        .assert()
        .failure();
}
