//! Migratory CLI - batch-ledger schema migrations for DuckDB

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::{create, down, status, up};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global.log_file, cli.global.verbose);

    match &cli.command {
        cli::Commands::Up => up::execute(&cli.global).await,
        cli::Commands::Down => down::execute(&cli.global).await,
        cli::Commands::Status(args) => status::execute(args, &cli.global).await,
        cli::Commands::Create(args) => create::execute(args, &cli.global).await,
    }
}
