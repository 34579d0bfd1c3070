//! The `migrations` ledger table.
//!
//! One row per applied migration: id, logical name, batch number, and
//! execution timestamp. Ids and batch numbers are assigned by
//! `max(...) + 1` aggregates at insert time; ids are gap-free by
//! construction and never reused after rollback.

use crate::error::{LedgerError, LedgerResult};
use chrono::NaiveDateTime;
use duckdb::Connection;
use mg_core::MigrationRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create the ledger table if it does not exist. Safe to call repeatedly.
pub fn ensure_table(conn: &Connection) -> LedgerResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS migrations (
             id          UINTEGER  NOT NULL,
             migration   VARCHAR   NOT NULL,
             batch       UINTEGER  NOT NULL,
             executed_at TIMESTAMP NOT NULL DEFAULT now()
         );",
    )
    .map_err(|e| LedgerError::QueryError(format!("create migrations table: {e}")))
}

/// All applied migrations, ordered by id ascending.
pub fn all_applied(conn: &Connection) -> LedgerResult<Vec<MigrationRecord>> {
    select_records(
        conn,
        "SELECT id, migration, batch, strftime(executed_at, '%Y-%m-%d %H:%M:%S')
         FROM migrations ORDER BY id",
        [],
    )
}

/// Migrations belonging to `batch`, ordered by id ascending.
pub fn by_batch(conn: &Connection, batch: u32) -> LedgerResult<Vec<MigrationRecord>> {
    select_records(
        conn,
        "SELECT id, migration, batch, strftime(executed_at, '%Y-%m-%d %H:%M:%S')
         FROM migrations WHERE batch = ? ORDER BY id",
        duckdb::params![batch],
    )
}

/// Next unused migration id: `max(id) + 1`, or 1 for an empty ledger.
pub fn next_id(conn: &Connection) -> LedgerResult<u32> {
    aggregate(conn, "SELECT COALESCE(MAX(id), 0) + 1 FROM migrations")
}

/// Batch number for a new apply: `max(batch) + 1`, or 1 if empty.
pub fn next_batch(conn: &Connection) -> LedgerResult<u32> {
    aggregate(conn, "SELECT COALESCE(MAX(batch), 0) + 1 FROM migrations")
}

/// Most recent batch number, or 0 if the ledger is empty.
pub fn last_batch(conn: &Connection) -> LedgerResult<u32> {
    aggregate(conn, "SELECT COALESCE(MAX(batch), 0) FROM migrations")
}

/// Record an applied migration. `executed_at` defaults to now().
pub fn insert(conn: &Connection, id: u32, name: &str, batch: u32) -> LedgerResult<()> {
    conn.execute(
        "INSERT INTO migrations (id, migration, batch) VALUES (?, ?, ?)",
        duckdb::params![id, name, batch],
    )
    .map_err(|e| LedgerError::QueryError(format!("insert migration '{name}': {e}")))?;
    Ok(())
}

/// Delete a ledger record by id (rollback).
pub fn delete(conn: &Connection, id: u32) -> LedgerResult<()> {
    conn.execute(
        "DELETE FROM migrations WHERE id = ?",
        duckdb::params![id],
    )
    .map_err(|e| LedgerError::QueryError(format!("delete migration id {id}: {e}")))?;
    Ok(())
}

fn aggregate(conn: &Connection, sql: &str) -> LedgerResult<u32> {
    let value: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .map_err(|e| LedgerError::QueryError(format!("{sql}: {e}")))?;
    Ok(value as u32)
}

fn select_records<P: duckdb::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> LedgerResult<Vec<MigrationRecord>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| LedgerError::QueryError(format!("prepare ledger query: {e}")))?;

    let rows: Vec<(u32, String, u32, String)> = stmt
        .query_map(params, |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .map_err(|e| LedgerError::QueryError(format!("query ledger: {e}")))?
        .collect::<Result<_, _>>()
        .map_err(|e| LedgerError::QueryError(format!("read ledger row: {e}")))?;

    rows.into_iter()
        .map(|(id, name, batch, ts)| {
            let executed_at = NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT)
                .map_err(|e| LedgerError::QueryError(format!("bad executed_at '{ts}': {e}")))?;
            Ok(MigrationRecord {
                id,
                name,
                batch,
                executed_at,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
