//! Migration data model: ledger records and on-disk migration files.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File suffix of the apply variant of a migration.
pub const UP_SUFFIX: &str = ".up.sql";

/// File suffix of the revert variant of a migration.
pub const DOWN_SUFFIX: &str = ".down.sql";

/// One row of the `migrations` ledger table.
///
/// Records are created on apply and deleted on rollback of their batch,
/// never updated. `name` is unique across the ledger; `id` is assigned
/// `max(id) + 1` at insert time and never reused after rollback.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationRecord {
    pub id: u32,
    pub name: String,
    pub batch: u32,
    pub executed_at: NaiveDateTime,
}

/// A migration pair on disk, identified by its up file.
///
/// The down sibling lives at the same base path with the suffix swapped.
/// Its presence is assumed, not verified, until rollback time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Logical name: file name minus the `.up.sql` suffix
    /// (e.g. `20240101_120000_create_users`).
    pub name: String,

    /// Filesystem location of the up variant.
    pub path: PathBuf,
}

/// Down-file path for a ledger record: `<migrations_dir>/<name>.down.sql`.
///
/// Rollback derives the path from the record name alone, not from a
/// discovery walk, so down files must live in the directory root.
pub fn down_path(migrations_dir: &Path, name: &str) -> PathBuf {
    migrations_dir.join(format!("{name}{DOWN_SUFFIX}"))
}
