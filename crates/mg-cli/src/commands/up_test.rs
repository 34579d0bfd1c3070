use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn global_for(dir: &Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        database: dir.join("db.duckdb").to_string_lossy().into_owned(),
        migrations_dir: dir.join("migrations"),
        log_file: dir.join("logs").join("migrate.log"),
    }
}

#[tokio::test]
async fn up_applies_migrations_to_the_database_file() {
    let dir = tempdir().unwrap();
    let migrations = dir.path().join("migrations");
    fs::create_dir_all(&migrations).unwrap();
    fs::write(
        migrations.join("20240101_000000_a.up.sql"),
        "CREATE TABLE t_a (id INTEGER);",
    )
    .unwrap();
    fs::write(migrations.join("20240101_000000_a.down.sql"), "DROP TABLE t_a;").unwrap();

    let global = global_for(dir.path());
    execute(&global).await.unwrap();

    // Reopen the database file and inspect the ledger
    let db = mg_db::MigrationDb::open(&global.database).unwrap();
    let records = mg_db::ledger::all_applied(db.conn()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "20240101_000000_a");
    assert_eq!(records[0].batch, 1);
}

#[tokio::test]
async fn up_fails_when_migrations_directory_is_missing() {
    let dir = tempdir().unwrap();
    let global = global_for(dir.path());

    let result = execute(&global).await;
    assert!(result.is_err());
}
