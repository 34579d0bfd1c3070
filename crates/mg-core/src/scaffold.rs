//! Scaffold generator: create a timestamp-prefixed up/down migration pair.

use crate::error::{CoreError, CoreResult};
use crate::migration::{DOWN_SUFFIX, UP_SUFFIX};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths produced by [`create`].
#[derive(Debug, Clone)]
pub struct Scaffold {
    /// Full logical name including the timestamp prefix.
    pub name: String,
    pub up_path: PathBuf,
    pub down_path: PathBuf,
}

/// Create a new migration pair under `migrations_dir`.
///
/// The directory is created if absent. File names are
/// `<YYYYMMDD_HHMMSS>_<name>.up.sql` / `.down.sql`; both files start with a
/// boilerplate header comment carrying the name and creation time. On write
/// failure the up file may exist without its down counterpart.
pub fn create(migrations_dir: &Path, name: &str) -> CoreResult<Scaffold> {
    let now = Local::now();
    let file_name = format!("{}_{}", now.format("%Y%m%d_%H%M%S"), name);
    let created = now.format("%Y-%m-%d %H:%M:%S");

    fs::create_dir_all(migrations_dir).map_err(|source| CoreError::ScaffoldDir {
        path: migrations_dir.display().to_string(),
        source,
    })?;

    let up_path = migrations_dir.join(format!("{file_name}{UP_SUFFIX}"));
    let up_content = format!(
        "-- Миграция: {name}\n-- Создано: {created}\n\n-- Добавьте ваш SQL код здесь\n"
    );
    write_file(&up_path, &up_content)?;

    let down_path = migrations_dir.join(format!("{file_name}{DOWN_SUFFIX}"));
    let down_content = format!(
        "-- Откат: {name}\n-- Создано: {created}\n\n-- Добавьте ваш SQL код отката здесь\n"
    );
    write_file(&down_path, &down_content)?;

    Ok(Scaffold {
        name: file_name,
        up_path,
        down_path,
    })
}

fn write_file(path: &Path, content: &str) -> CoreResult<()> {
    fs::write(path, content).map_err(|source| CoreError::ScaffoldWrite {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
