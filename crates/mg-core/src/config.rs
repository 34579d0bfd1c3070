//! Runtime configuration for Migratory.
//!
//! All settings come from the environment (or CLI flags) with documented
//! defaults; the struct is passed explicitly into constructors rather than
//! living in ambient global state.

use std::path::PathBuf;

/// Default DuckDB database path (`MIGRATORY_DB`).
pub const DEFAULT_DATABASE_PATH: &str = "./migratory.duckdb";

/// Default migrations directory (`MIGRATIONS_PATH`).
pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Default log file path (`LOG_FILE`).
pub const DEFAULT_LOG_FILE: &str = "./logs/migrate.log";

/// Runtime configuration shared by the runner and CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the target DuckDB database (`:memory:` for ephemeral).
    pub database_path: String,

    /// Directory containing `*.up.sql` / `*.down.sql` migration pairs.
    pub migrations_path: PathBuf,

    /// Log file the CLI writes to.
    pub log_file: PathBuf,
}

impl Config {
    /// Build a config from explicit values.
    pub fn new(
        database_path: impl Into<String>,
        migrations_path: impl Into<PathBuf>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            database_path: database_path.into(),
            migrations_path: migrations_path.into(),
            log_file: log_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATABASE_PATH,
            DEFAULT_MIGRATIONS_PATH,
            DEFAULT_LOG_FILE,
        )
    }
}
