//! Log file initialization.
//!
//! The `log` facade writes to the configured log file (append), matching
//! the tool's convention of keeping stdout for reports and stderr for
//! errors. `RUST_LOG` overrides the level when set.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Initialize the global logger targeting `log_file`.
///
/// Parent directories are created as needed; if the file cannot be
/// opened, logging falls back to stderr.
pub fn init(log_file: &Path, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();

    if let Some(parent) = log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!(
                "Не удалось открыть файл логов {}: {e}",
                log_file.display()
            );
        }
    }

    builder.init();
}
