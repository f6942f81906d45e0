//! Logging setup built on `fern`.
//!
//! The library itself only uses the `log` macros; applications call [`init`]
//! once to route them to stderr or a file.

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Build the dispatcher described by `config` without installing it.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    if !config.enabled {
        return Ok(fern::Dispatch::new().level(LevelFilter::Off));
    }

    let level = config.level_filter()?;
    // Driver chatter only when something goes wrong, and never above the configured level
    let driver_level = level.min(LevelFilter::Warn);

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", driver_level)
        .level_for("sea_orm", driver_level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    Ok(dispatch)
}

/// Install the global logger. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    build_dispatch(config)?
        .apply()
        .context("A global logger is already installed")?;
    Ok(())
}
