//! Migration runner: orchestrates the up / down / status workflows.
//!
//! Strictly sequential, fail-fast. Applying executes each pending file and
//! records it in the ledger with a shared batch number; rolling back
//! reverses the most recent batch file-by-file in descending id order.
//! There is no transaction spanning a file's SQL and its ledger row, so a
//! failure between the two leaves the database and ledger inconsistent —
//! a documented risk, surfaced rather than retried.

use crate::connection::MigrationDb;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger;
use mg_core::{discovery, migration, planner, Config, MigrationFile, MigrationRecord};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;

/// Migration runner bound to one target database.
///
/// Single-instance-only: id and batch numbers come from read-then-write
/// `max(...) + 1` queries with no advisory lock, so two concurrent runners
/// can assign duplicates.
pub struct Runner {
    config: Config,
    db: MigrationDb,
}

impl Runner {
    /// Open the target database from `config` and build a runner.
    pub fn new(config: Config) -> LedgerResult<Self> {
        let db = MigrationDb::open(&config.database_path)?;
        Ok(Self { config, db })
    }

    /// Build a runner over an already-open database. Used by tests that
    /// need to inspect the same in-memory connection afterwards.
    pub fn with_db(config: Config, db: MigrationDb) -> Self {
        Self { config, db }
    }

    /// Borrow the underlying database handle.
    pub fn db(&self) -> &MigrationDb {
        &self.db
    }

    /// Apply all pending migrations as one new batch.
    ///
    /// Aborts on the first failure; files already applied in this
    /// invocation keep their ledger rows (partial batches are possible).
    pub fn up(&self) -> LedgerResult<()> {
        log::info!("Применяем миграции...");

        ledger::ensure_table(self.db.conn())?;
        let files = discovery::discover(&self.config.migrations_path)?;
        let applied = ledger::all_applied(self.db.conn())?;
        let pending = planner::pending(&files, &applied);

        if pending.is_empty() {
            log::info!("Нет новых миграций для применения");
            return Ok(());
        }

        // One batch number for the whole invocation
        let batch = ledger::next_batch(self.db.conn())?;

        for file in &pending {
            self.apply_one(file, batch)
                .map_err(|e| LedgerError::ApplyFailed {
                    name: file.name.clone(),
                    message: e.to_string(),
                })?;
            log::info!("Применена миграция: {}", file.name);
        }

        log::info!("Все миграции применены успешно");
        Ok(())
    }

    /// Roll back the most recent batch, newest migration first.
    pub fn down(&self) -> LedgerResult<()> {
        log::info!("Откатываем миграции...");

        let last_batch = ledger::last_batch(self.db.conn())?;
        if last_batch == 0 {
            log::info!("Нет миграций для отката");
            return Ok(());
        }

        let records = ledger::by_batch(self.db.conn(), last_batch)?;
        for record in records.iter().rev() {
            self.rollback_one(record)
                .map_err(|e| LedgerError::RollbackFailed {
                    name: record.name.clone(),
                    message: e.to_string(),
                })?;
            log::info!("Откачена миграция: {}", record.name);
        }

        log::info!("Все миграции откачены успешно");
        Ok(())
    }

    /// Collect the ledger summary and pending list. Pure read.
    pub fn status(&self) -> LedgerResult<StatusReport> {
        ledger::ensure_table(self.db.conn())?;

        let files = discovery::discover(&self.config.migrations_path)?;
        let applied = ledger::all_applied(self.db.conn())?;
        let pending = planner::pending(&files, &applied);
        let last_batch = ledger::last_batch(self.db.conn())?;

        Ok(StatusReport {
            last_batch,
            applied,
            pending: pending.into_iter().map(|f| f.name).collect(),
        })
    }

    fn apply_one(&self, file: &MigrationFile, batch: u32) -> LedgerResult<()> {
        let sql = fs::read_to_string(&file.path).map_err(|source| mg_core::CoreError::FileRead {
            path: file.path.display().to_string(),
            source,
        })?;

        self.db.execute_script(&sql)?;

        // Computed per file, not cached: ids stay gap-free even if an
        // earlier file of this batch failed on a previous invocation.
        let id = ledger::next_id(self.db.conn())?;
        ledger::insert(self.db.conn(), id, &file.name, batch)
    }

    fn rollback_one(&self, record: &MigrationRecord) -> LedgerResult<()> {
        let down_path = migration::down_path(&self.config.migrations_path, &record.name);
        let sql = fs::read_to_string(&down_path).map_err(|source| mg_core::CoreError::FileRead {
            path: down_path.display().to_string(),
            source,
        })?;

        self.db.execute_script(&sql)?;
        ledger::delete(self.db.conn(), record.id)
    }
}

/// Result of [`Runner::status`]: ledger summary plus pending file names.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub last_batch: u32,
    pub applied: Vec<MigrationRecord>,
    pub pending: Vec<String>,
}

impl StatusReport {
    /// Render the human-readable status block.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\nСтатус миграций\n");
        out.push_str("==================\n");
        let _ = writeln!(out, "Последний batch: {}", self.last_batch);
        let _ = writeln!(out, "Применено: {} миграций", self.applied.len());
        let _ = writeln!(out, "Ожидает: {} миграций", self.pending.len());

        if !self.applied.is_empty() {
            out.push_str("\nПрименённые миграции:\n");
            for record in &self.applied {
                let _ = writeln!(
                    out,
                    "  [Batch {}] {} ({})",
                    record.batch,
                    record.name,
                    record.executed_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }

        if !self.pending.is_empty() {
            out.push_str("\nОжидающие миграции:\n");
            for name in &self.pending {
                let _ = writeln!(out, "  {name}");
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
