//! mg-db - Batch-ledger migration engine for Migratory.
//!
//! Provides the DuckDB-backed `migrations` ledger table and the
//! [`Runner`] orchestrating the up / down / status workflows. Everything
//! here is synchronous and single-threaded; async lives only in the CLI
//! command layer.

pub mod connection;
pub mod error;
pub mod ledger;
pub mod runner;

pub use connection::MigrationDb;
pub use error::{LedgerError, LedgerResult};
pub use runner::{Runner, StatusReport};
