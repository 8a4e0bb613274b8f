//! End-to-end tests for the quickcsv binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{create_custom_csv, create_temp_dir, prepare_test_file};

#[test]
fn test_show() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let test_file = prepare_test_file(temp_dir.path())?;

    let mut cmd = Command::cargo_bin("quickcsv")?;
    cmd.arg("-F").arg(",").arg("--headers").arg(&test_file).arg("show");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"name\",\"age\",\"city\""))
        .stdout(predicate::str::contains("\"Bob\",\"30\",\"Munich\""));
    Ok(())
}

#[test]
fn test_show_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let test_file = prepare_test_file(temp_dir.path())?;

    let output = Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["show", "--json"])
        .output()?;
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(rows[0]["name"], "Alice");
    assert_eq!(rows[2]["city"], "Berlin");
    assert_eq!(rows.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn test_column_and_unique() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let test_file = prepare_test_file(temp_dir.path())?;

    Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["column", "name"])
        .assert()
        .success()
        .stdout("Alice\nBob\nCarol\n");

    Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["unique", "city"])
        .assert()
        .success()
        .stdout("Berlin\nMunich\n");

    Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["unique", "name", "--where", "city=Berlin"])
        .assert()
        .success()
        .stdout("Alice\nCarol\n");
    Ok(())
}

#[test]
fn test_search() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let test_file = prepare_test_file(temp_dir.path())?;

    Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["search", "city=Berlin", "age=22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Carol\",\"22\",\"Berlin\""));

    Command::cargo_bin("quickcsv")?
        .args(["-F", ",", "--headers"])
        .arg(&test_file)
        .args(["search", "city=Paris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching record"));
    Ok(())
}

#[test]
fn test_column_requires_headers() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let test_file = prepare_test_file(temp_dir.path())?;

    Command::cargo_bin("quickcsv")?
        .args(["-F", ","])
        .arg(&test_file)
        .args(["column", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Table has no headers"));
    Ok(())
}

#[test]
fn test_convert() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let input = create_custom_csv(temp_dir.path(), "in.csv", "a;b\n1;\"x\"\"y\"\n")?;
    let output = temp_dir.path().join("out.csv");

    Command::cargo_bin("quickcsv")?
        .arg("--headers")
        .arg(&input)
        .arg("convert")
        .arg(&output)
        .args(["--out-delimiter", ","])
        .assert()
        .success();

    let content = fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["\"a\",\"b\"", "\"1\",\"x\"\"y\""]);
    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    Command::cargo_bin("quickcsv")?
        .arg(temp_dir.path().join("absent.csv"))
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
    Ok(())
}
