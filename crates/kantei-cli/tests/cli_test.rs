//! Integration tests for the kantei binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Helper to create a temporary script file with given content.
fn create_script(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn kantei() -> Command {
    Command::cargo_bin("kantei").expect("binary not built")
}

// =============================================================================
// Catalog Command Tests
// =============================================================================

#[test]
fn test_catalog_lists_category() {
    kantei()
        .args(["catalog", "grass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("薬草"))
        .stdout(predicate::str::contains("天使の種"));
}

#[test]
fn test_catalog_json() {
    let output = kantei().args(["catalog", "scroll", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 37);
    assert_eq!(entries[1]["name"], "識別の巻物");
    assert_eq!(entries[1]["attribute"]["value"], true);
}

#[test]
fn test_catalog_rejects_unknown_category() {
    kantei()
        .args(["catalog", "sword"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

// =============================================================================
// Price Command Tests
// =============================================================================

#[test]
fn test_price_from_sell() {
    let output = kantei()
        .args(["price", "--sell", "25", "--category", "grass", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["buy_price"], 70);
    assert_eq!(result["sell_price"], 25);
    assert_eq!(result["candidates"]["grass"].as_array().unwrap().len(), 6);
}

#[test]
fn test_price_shows_variants() {
    kantei()
        .args(["price", "--buy", "160", "--category", "grass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("弟切草（祝）"));
}

#[test]
fn test_price_unknown_sell_price() {
    kantei()
        .args(["price", "--sell", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_price_requires_a_price() {
    kantei().args(["price"]).assert().failure();
}

// =============================================================================
// Run Command Tests
// =============================================================================

#[test]
fn test_run_script_deduces() {
    let script = create_script(
        r#"[
            { "op": "add", "label": "A", "category": "grass" },
            { "op": "add", "label": "B", "category": "grass" },
            { "op": "set", "label": "A", "buy_price": 80 },
            { "op": "set", "label": "B", "sell_price": 10 }
        ]"#,
    );

    let output = kantei()
        .args(["run", "--json"])
        .arg(script.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = result["records"].as_array().unwrap();
    assert_eq!(records[0]["confirmed"]["name"], "弟切草");
    assert_eq!(records[1]["confirmed"]["name"], "薬草");
    assert!(result["rejected"].as_array().unwrap().is_empty());
}

#[test]
fn test_run_reports_rejections() {
    let script = create_script(
        r#"[
            { "op": "add", "label": "A", "category": "scroll" },
            { "op": "add", "label": "B", "category": "scroll" },
            { "op": "confirm", "label": "A", "name": "識別の巻物" },
            { "op": "confirm", "label": "B", "name": "識別の巻物" },
            { "op": "set", "label": "C", "buy_price": 300 }
        ]"#,
    );

    let output = kantei()
        .args(["run", "--json"])
        .arg(script.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rejected = result["rejected"].as_array().unwrap();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0]["step"], 4);
    assert_eq!(rejected[1]["step"], 5);
}

#[test]
fn test_run_prints_table() {
    let script = create_script(
        r#"[
            { "op": "add", "label": "A", "category": "grass" },
            { "op": "add", "label": "B", "category": "grass" },
            { "op": "set", "label": "A", "buy_price": 50 },
            { "op": "set", "label": "B", "buy_price": 50 }
        ]"#,
    );

    kantei()
        .arg("run")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("暴走の種, 毒草"))
        .stdout(predicate::str::contains("[group]"));
}

#[test]
fn test_run_missing_file() {
    kantei()
        .args(["run", "/nonexistent/script.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script file not found"));
}

#[test]
fn test_run_invalid_script() {
    let script = create_script(r#"[{ "op": "explode" }]"#);
    kantei()
        .arg("run")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}
