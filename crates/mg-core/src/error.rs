//! Error types for mg-core

use thiserror::Error;

/// Core error type for Migratory
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Migrations directory walk failed
    #[error("[C001] Failed to scan migrations directory '{path}': {source}")]
    Discovery {
        path: String,
        source: std::io::Error,
    },

    /// C002: Migration SQL file could not be read
    #[error("[C002] Failed to read migration file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// C003: Migrations directory could not be created
    #[error("[C003] Failed to create migrations directory '{path}': {source}")]
    ScaffoldDir {
        path: String,
        source: std::io::Error,
    },

    /// C004: Scaffold file could not be written
    #[error("[C004] Failed to write migration file '{path}': {source}")]
    ScaffoldWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
