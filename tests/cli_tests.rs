// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tallybook(home: &TempDir, backend: &str) -> Command {
    let mut cmd = Command::cargo_bin("tallybook").unwrap();
    cmd.env("TALLYBOOK_DATA_DIR", home.path())
        .env("TALLYBOOK_BACKEND", backend)
        .env_remove("RUST_LOG");
    cmd
}

fn roundtrip(backend: &str) {
    let home = tempfile::tempdir().unwrap();

    tallybook(&home, backend)
        .args(["tx", "add", "-t", "income", "-c", "profit", "-a", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income profit 1,000 TWD"));
    tallybook(&home, backend)
        .args(["tx", "add", "-c", "freight", "-a", "300"])
        .assert()
        .success();

    tallybook(&home, backend)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""net_profit": 700.0"#));

    let out = tallybook(&home, backend)
        .args(["tx", "list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["category"], "freight");
    let id = rows[0]["id"].as_i64().unwrap().to_string();

    tallybook(&home, backend)
        .args(["tx", "rm", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed record"));

    tallybook(&home, backend)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""net_profit": 1000.0"#));
}

#[test]
fn json_backend_roundtrip() {
    roundtrip("json");
}

#[test]
fn sqlite_backend_roundtrip() {
    roundtrip("sqlite");
}

#[test]
fn invalid_amount_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    tallybook(&home, "json")
        .args(["tx", "add", "-c", "freight", "-a", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn summary_hides_currency_panel_when_empty() {
    let home = tempfile::tempdir().unwrap();
    tallybook(&home, "json")
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income (TWD)"))
        .stdout(predicate::str::contains("Balance").not());
}
