//! Create command implementation

use anyhow::{Context, Result};
use mg_core::scaffold;

use crate::cli::{CreateArgs, GlobalArgs};

/// Execute the create command: scaffold a new up/down migration pair.
pub async fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let config = global.to_config();
    let scaffold = scaffold::create(&config.migrations_path, &args.name)
        .context("Ошибка создания миграции")?;

    println!("Создана миграция: {}", scaffold.name);
    println!("Up файл: {}", scaffold.up_path.display());
    println!("Down файл: {}", scaffold.down_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
