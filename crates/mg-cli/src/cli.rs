//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use mg_core::config::{DEFAULT_DATABASE_PATH, DEFAULT_LOG_FILE, DEFAULT_MIGRATIONS_PATH};
use mg_core::Config;
use std::path::PathBuf;

/// Migratory - batch-ledger schema migrations for DuckDB
#[derive(Parser, Debug)]
#[command(name = "mg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Target DuckDB database path (":memory:" for ephemeral)
    #[arg(
        short,
        long,
        global = true,
        env = "MIGRATORY_DB",
        default_value = DEFAULT_DATABASE_PATH
    )]
    pub database: String,

    /// Directory containing migration files
    #[arg(
        short,
        long,
        global = true,
        env = "MIGRATIONS_PATH",
        default_value = DEFAULT_MIGRATIONS_PATH
    )]
    pub migrations_dir: PathBuf,

    /// Log file path
    #[arg(long, global = true, env = "LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl GlobalArgs {
    /// Build the runner configuration from the resolved arguments.
    pub fn to_config(&self) -> Config {
        Config::new(
            self.database.clone(),
            self.migrations_dir.clone(),
            self.log_file.clone(),
        )
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all pending migrations
    Up,

    /// Roll back the most recent batch of migrations
    Down,

    /// Show the ledger summary and pending migrations
    Status(StatusArgs),

    /// Scaffold a new up/down migration pair
    Create(CreateArgs),
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: StatusOutput,
}

/// Status output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Human-readable report
    Text,
    /// JSON output
    Json,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Migration name (e.g. create_users)
    pub name: String,
}
