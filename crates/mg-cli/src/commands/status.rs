//! Status command implementation

use anyhow::{Context, Result};
use mg_db::Runner;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};

/// Execute the status command: print the ledger summary and pending list.
pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let runner = Runner::new(global.to_config()).context("Ошибка создания мигратора")?;
    let report = runner.status().context("Ошибка получения статуса")?;

    match args.output {
        StatusOutput::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        StatusOutput::Text => println!("{}", report.render()),
    }

    Ok(())
}
