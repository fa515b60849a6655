use std::fs;

use stockpile_cli::run_demo;
use stockpile_infra::{JsonFileRepository, load_inventory};

#[test]
fn demo_against_missing_file_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let repo = JsonFileRepository::new(&path);

    let mut out = Vec::new();
    run_demo(&repo, 5, &mut out).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    \"apple\": 7,\n    \"banana\": 2\n}\n"
    );
    assert_eq!(load_inventory(&path).unwrap().len(), 2);
}

#[test]
fn demo_against_corrupt_file_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    let repo = JsonFileRepository::new(&path);

    let mut out = Vec::new();
    let err = run_demo(&repo, 5, &mut out).unwrap_err();

    assert!(err.to_string().contains("failed to load inventory"));
    assert!(out.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}
