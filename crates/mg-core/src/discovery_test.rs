use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn discovers_only_up_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("20240101_000000_a.up.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("20240101_000000_a.down.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a migration").unwrap();

    let files = discover(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "20240101_000000_a");
    assert_eq!(files[0].path, dir.path().join("20240101_000000_a.up.sql"));
}

#[test]
fn sorts_lexicographically_by_name() {
    let dir = tempdir().unwrap();
    // Created out of order on purpose
    fs::write(dir.path().join("20240103_000000_c.up.sql"), "").unwrap();
    fs::write(dir.path().join("20240101_000000_a.up.sql"), "").unwrap();
    fs::write(dir.path().join("20240102_000000_b.up.sql"), "").unwrap();

    let files = discover(dir.path()).unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "20240101_000000_a",
            "20240102_000000_b",
            "20240103_000000_c"
        ]
    );
}

#[test]
fn walks_subdirectories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("archive");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("20240101_000000_old.up.sql"), "").unwrap();
    fs::write(dir.path().join("20240102_000000_new.up.sql"), "").unwrap();

    let files = discover(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "20240101_000000_old");
    assert_eq!(files[1].name, "20240102_000000_new");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    let err = discover(&missing).unwrap_err();
    assert!(matches!(err, CoreError::Discovery { .. }));
}

#[test]
fn empty_directory_yields_empty_list() {
    let dir = tempdir().unwrap();
    let files = discover(dir.path()).unwrap();
    assert!(files.is_empty());
}
