//! Up command implementation

use anyhow::{Context, Result};
use mg_db::Runner;

use crate::cli::GlobalArgs;

/// Execute the up command: apply all pending migrations as one batch.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let runner = Runner::new(global.to_config()).context("Ошибка создания мигратора")?;
    runner.up().context("Ошибка применения миграций")?;
    Ok(())
}

#[cfg(test)]
#[path = "up_test.rs"]
mod tests;
