//! End-to-end checks of the breakeven binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn breakeven(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breakeven").unwrap();
    cmd.env("BREAKEVEN_CLI_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn analyze_prints_break_even_summary() {
    let config = TempDir::new().unwrap();
    breakeven(&config)
        .args([
            "analyze",
            "--cost",
            "AcmeCo:one_time:Setup:1000",
            "--cost",
            "AcmeCo:annual:License:1200",
            "--cost",
            "AcmeCo:per_customer:Support:2",
            "--customer-price",
            "10",
            "--expected-customers",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed costs: $2,200.00"))
        .stdout(predicate::str::contains(
            "Break-even customers at configured price: 275.00",
        ))
        .stdout(predicate::str::contains(
            "Required price per customer: $24.00",
        ));
}

#[test]
fn analyze_reports_bad_entries_and_continues() {
    let config = TempDir::new().unwrap();
    breakeven(&config)
        .args([
            "analyze",
            "--cost",
            "not an entry",
            "--cost",
            "AcmeCo:annual:License:1200",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed cost entry"))
        .stdout(predicate::str::contains("Fixed costs: $1,200.00"));
}

#[test]
fn analyze_with_no_usable_inputs_fails() {
    let config = TempDir::new().unwrap();
    breakeven(&config)
        .args(["analyze", "--cost", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed cost entry"));
}

#[test]
fn analyze_extracts_costs_from_a_text_document() {
    let config = TempDir::new().unwrap();
    let docs = TempDir::new().unwrap();
    let doc = docs.path().join("acme.txt");
    std::fs::write(
        &doc,
        "Vendor pricing overview\nSetup fee: $2,500.00\nMonthly platform fee: $99.99\n",
    )
    .unwrap();

    breakeven(&config)
        .args(["analyze", "--document"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup fee"))
        .stdout(predicate::str::contains("Fixed costs: $2,599.99"));
}

#[test]
fn analyze_writes_a_csv_workbook() {
    let config = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("analysis.csv");

    breakeven(&config)
        .args(["analyze", "--cost", "AcmeCo:annual:License:1200", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis exported to"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Summary"));
    assert!(contents.contains("Revenue Inputs"));
    assert!(contents.contains("AcmeCo,License,annual,1200.00"));
}

#[test]
fn config_shows_paths_and_settings() {
    let config = TempDir::new().unwrap();
    breakeven(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file:"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}
