//! mg-core - Core library for Migratory
//!
//! This crate provides the configuration struct, the migration data model,
//! migration file discovery, batch planning, and the scaffold generator.
//! It has no database dependency; everything here is filesystem and string
//! logic shared by the engine and CLI crates.

pub mod config;
pub mod discovery;
pub mod error;
pub mod migration;
pub mod planner;
pub mod scaffold;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use migration::{MigrationFile, MigrationRecord, DOWN_SUFFIX, UP_SUFFIX};
