use super::*;
use tempfile::tempdir;

#[test]
fn creates_missing_directory_and_both_files() {
    let dir = tempdir().unwrap();
    let migrations = dir.path().join("migrations");
    assert!(!migrations.exists());

    let scaffold = create(&migrations, "create_users").unwrap();

    assert!(migrations.exists());
    assert!(scaffold.up_path.exists());
    assert!(scaffold.down_path.exists());
    assert!(scaffold.name.ends_with("_create_users"));
}

#[test]
fn file_names_carry_timestamp_prefix_and_suffixes() {
    let dir = tempdir().unwrap();

    let scaffold = create(dir.path(), "add_index").unwrap();

    let up_name = scaffold.up_path.file_name().unwrap().to_str().unwrap();
    let down_name = scaffold.down_path.file_name().unwrap().to_str().unwrap();

    assert!(up_name.ends_with("_add_index.up.sql"), "got {up_name}");
    assert!(down_name.ends_with("_add_index.down.sql"), "got {down_name}");

    // Timestamp prefix: YYYYMMDD_HHMMSS_ (15 chars + separator)
    assert_eq!(&up_name[8..9], "_");
    assert!(up_name[..8].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn header_comments_mention_the_migration_name() {
    let dir = tempdir().unwrap();

    let scaffold = create(dir.path(), "drop_legacy").unwrap();

    let up = std::fs::read_to_string(&scaffold.up_path).unwrap();
    let down = std::fs::read_to_string(&scaffold.down_path).unwrap();

    assert!(up.starts_with("-- Миграция: drop_legacy\n"));
    assert!(down.starts_with("-- Откат: drop_legacy\n"));
}

#[test]
fn scaffolded_pair_is_discoverable() {
    let dir = tempdir().unwrap();

    let scaffold = create(dir.path(), "create_events").unwrap();
    let files = crate::discovery::discover(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, scaffold.name);
}
