//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! LEDGERDESK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledgerdesk(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledgerdesk").unwrap();
    cmd.env("LEDGERDESK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_data_files() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn employee_roundtrip() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .args(["employee", "add", "Dana Whitfield", "Clerk", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added employee: Dana Whitfield"));

    ledgerdesk(&data_dir)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana Whitfield"));

    ledgerdesk(&data_dir)
        .args(["employee", "balance", "Dana Whitfield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"));
}

#[test]
fn transaction_moves_company_balance() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .args([
            "transaction",
            "add",
            "sales",
            "400",
            "Invoice #42",
            "--date",
            "2024-05-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded sales $400.00"));

    ledgerdesk(&data_dir)
        .args(["transaction", "add", "purchase", "150", "Office supplies"])
        .assert()
        .success();

    ledgerdesk(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$250.00"));
}

#[test]
fn printed_transaction_id_is_usable() {
    let data_dir = TempDir::new().unwrap();

    let output = ledgerdesk(&data_dir)
        .args(["transaction", "add", "sales", "400", "Invoice #42"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .expect("add should print the new ID")
        .trim()
        .to_string();

    ledgerdesk(&data_dir)
        .args(["transaction", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice #42"));

    ledgerdesk(&data_dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));
}

#[test]
fn unknown_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .args(["transaction", "add", "refund", "10", "Bad category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction category"));
}

#[test]
fn payroll_stays_off_the_company_balance() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .args(["employee", "add", "Dana Whitfield", "Clerk", "3000"])
        .assert()
        .success();

    ledgerdesk(&data_dir)
        .args([
            "employee",
            "pay",
            "Dana Whitfield",
            "salary",
            "500",
            "Salary draw",
        ])
        .assert()
        .success();

    // Company balance untouched by payroll
    ledgerdesk(&data_dir)
        .args(["balance", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));

    // Employee balance moved: 3000 - 500 = 2500
    ledgerdesk(&data_dir)
        .args(["employee", "balance", "Dana Whitfield"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2500.00"));
}

#[test]
fn export_writes_csv() {
    let data_dir = TempDir::new().unwrap();

    ledgerdesk(&data_dir)
        .args(["transaction", "add", "sales", "400", "Invoice #42"])
        .assert()
        .success();

    ledgerdesk(&data_dir)
        .args(["export", "transactions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID,Date,Category"))
        .stdout(predicate::str::contains("Invoice #42"));
}
