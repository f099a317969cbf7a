//! End-to-end tests for the holdings-dedup binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = "\
TITLE,DB,ISSN,e-ISSN,ISBN,e-ISBN
Annals of Testing,DB1,12345678,,,
Annals of Testing,DB2,1234567X,,,
Annals of Testing,DB3,1234-5678,,,
Lonely Quarterly,DB1,87654321,,,
";

#[test]
fn test_writes_duplicates_and_graph() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    let output = dir.path().join("dups.csv");
    let graph = dir.path().join("relation.dot");
    fs::write(&input, CATALOG).unwrap();

    Command::cargo_bin("holdings-dedup")
        .unwrap()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--graph")
        .arg(&graph)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"duplicate_groups\": 1"))
        .stdout(predicate::str::contains("\"max_group_size\": 3"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.lines().nth(1).unwrap().starts_with("Annals of Testing,DB1,12345678,"));
    assert!(fs::read_to_string(&graph).unwrap().contains("DB3"));
}

#[test]
fn test_custom_columns_from_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    let output = dir.path().join("dups.csv");
    let config = dir.path().join("holdings.toml");
    fs::write(&input, CATALOG.replacen("DB,", "Catalog,", 1)).unwrap();
    fs::write(&config, "[columns]\nsource = \"Catalog\"\n").unwrap();

    Command::cargo_bin("holdings-dedup")
        .unwrap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let header = fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("TITLE,Catalog,ISSN"));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    fs::write(&input, "TITLE,ISSN\nNature,00280836\n").unwrap();

    Command::cargo_bin("holdings-dedup")
        .unwrap()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("dups.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column"));
}

#[test]
fn test_default_output_lands_in_working_directory() {
    let input_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    let input = input_dir.path().join("titles.csv");
    let config = work_dir.path().join("empty.toml");
    fs::write(&input, CATALOG).unwrap();
    fs::write(&config, "").unwrap();

    Command::cargo_bin("holdings-dedup")
        .unwrap()
        .current_dir(work_dir.path())
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(work_dir.path().join("duplication.csv").is_file());
    assert!(!input_dir.path().join("duplication.csv").exists());
}
