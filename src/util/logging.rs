use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("drivescope").join("drivescope.log"))
}

/// Initialise the global logger.
///
/// The TUI owns the terminal, so in that mode records are appended to
/// `log_path()`; one-shot modes log to stderr. `RUST_LOG` overrides `level`.
pub fn init(level: LevelFilter, to_file: bool) -> Result<Option<PathBuf>> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs();

    let mut written_to = None;
    if to_file {
        let path = log_path().context("no local data directory for the log file")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file))).write_style(WriteStyle::Never);
        written_to = Some(path);
    } else {
        builder.target(Target::Stderr).write_style(WriteStyle::Auto);
    }

    builder.try_init().context("logger already initialised")?;
    Ok(written_to)
}
