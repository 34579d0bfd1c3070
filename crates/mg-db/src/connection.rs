//! Target database connection wrapper.
//!
//! [`MigrationDb`] owns a DuckDB [`Connection`] to the database being
//! migrated. The ledger table lives inside the same database, so one
//! connection serves both migration SQL and ledger bookkeeping.

use crate::error::{LedgerError, LedgerResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the target database.
///
/// Single-threaded, no `Mutex` needed: the runner is strictly sequential
/// and there is exactly one in-process writer. There is no cross-process
/// mutual exclusion either; running two instances concurrently can
/// produce duplicate ids or interleaved batches.
pub struct MigrationDb {
    conn: Connection,
}

impl MigrationDb {
    /// Open (or create) the database at `path`; `:memory:` is ephemeral.
    pub fn open(path: &str) -> LedgerResult<Self> {
        if path == ":memory:" {
            return Self::open_memory();
        }
        let conn = Connection::open(Path::new(path))
            .map_err(|e| LedgerError::ConnectionError(format!("{e}: {path}")))?;
        Ok(Self { conn })
    }

    /// Open an in-memory database. Useful for unit tests.
    pub fn open_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LedgerError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute the contents of a migration file verbatim.
    ///
    /// Files may contain multiple statements; each statement auto-commits
    /// on its own. There is no cross-statement transaction, so a failing
    /// statement leaves earlier ones applied.
    pub fn execute_script(&self, sql: &str) -> LedgerResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| LedgerError::ExecutionError(e.to_string()))
    }
}
