//! Batch planning: compute the pending set.
//!
//! Batch numbering itself (`next_batch` / `last_batch`) lives on the ledger
//! store since those are SQL aggregates over the `migrations` table.

use crate::migration::{MigrationFile, MigrationRecord};
use std::collections::HashSet;

/// Return the files whose name has no ledger record, preserving the
/// relative (sorted) order of `files`.
pub fn pending(files: &[MigrationFile], applied: &[MigrationRecord]) -> Vec<MigrationFile> {
    let applied_names: HashSet<&str> = applied.iter().map(|r| r.name.as_str()).collect();

    files
        .iter()
        .filter(|file| !applied_names.contains(file.name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
