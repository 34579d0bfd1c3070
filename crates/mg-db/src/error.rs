//! Error types for the migration engine.

use thiserror::Error;

/// Migration engine errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open the target database (L001).
    #[error("[L001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Ledger query, insert, or delete failed (L002).
    #[error("[L002] Ledger query failed: {0}")]
    QueryError(String),

    /// Migration SQL was rejected by the database (L003).
    #[error("[L003] SQL execution failed: {0}")]
    ExecutionError(String),

    /// A migration could not be applied (L004). Earlier migrations of the
    /// same batch stay committed.
    #[error("[L004] Failed to apply migration '{name}': {message}")]
    ApplyFailed { name: String, message: String },

    /// A migration could not be rolled back (L005). Records not yet
    /// reached remain in the ledger.
    #[error("[L005] Failed to roll back migration '{name}': {message}")]
    RollbackFailed { name: String, message: String },

    /// Filesystem error surfaced from discovery or file reads.
    #[error(transparent)]
    Core(#[from] mg_core::CoreError),
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
