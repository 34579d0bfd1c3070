//! Migration file discovery.
//!
//! Recursively walks the migrations directory collecting `*.up.sql` files.
//! Ordering is a plain lexicographic sort on the logical name, so it is
//! only as correct as the timestamp-prefix naming convention; nothing here
//! validates that convention.

use crate::error::{CoreError, CoreResult};
use crate::migration::{MigrationFile, UP_SUFFIX};
use std::fs;
use std::path::Path;

/// Discover all up-migration files under `dir`, sorted ascending by name.
///
/// Walk errors (missing directory, permissions) abort discovery immediately.
pub fn discover(dir: &Path) -> CoreResult<Vec<MigrationFile>> {
    let mut files = Vec::new();
    walk(dir, &mut files)?;
    files.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Найдено файлов миграций: {}", files.len());
    Ok(files)
}

fn walk(dir: &Path, out: &mut Vec<MigrationFile>) -> CoreResult<()> {
    let entries = fs::read_dir(dir).map_err(|source| CoreError::Discovery {
        path: dir.display().to_string(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CoreError::Discovery {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            walk(&path, out)?;
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if let Some(name) = file_name.strip_suffix(UP_SUFFIX) {
            out.push(MigrationFile {
                name: name.to_string(),
                path: path.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
