//! Down command implementation

use anyhow::{Context, Result};
use mg_db::Runner;

use crate::cli::GlobalArgs;

/// Execute the down command: roll back the most recent batch.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let runner = Runner::new(global.to_config()).context("Ошибка создания мигратора")?;
    runner.down().context("Ошибка отката миграций")?;
    Ok(())
}
