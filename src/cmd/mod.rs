//! Command handlers for the drills CLI

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use drills::config::{Config, Overrides};
use drills::input::ReaderSource;
use drills::table;
use drills::temperature::TemperatureLogger;

/// Run the temperature logger against the console or a file.
pub fn cmd_temperature(config: &Config, input: Option<&Path>) -> Result<()> {
    let mut logger = TemperatureLogger::from_config(&config.temperature);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match input {
        Some(path) => logger.run(&mut ReaderSource::open(path)?, &mut out)?,
        None => logger.run(&mut ReaderSource::stdin(), &mut out)?,
    };

    tracing::debug!(
        count = stats.count(),
        average = stats.average(),
        "Temperature session finished"
    );
    Ok(())
}

/// Run the multiplication table tool on the console.
pub fn cmd_table(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = table::run_with_config(config, &mut ReaderSource::stdin(), &mut out)?;

    tracing::debug!(size = summary.size, quiz = ?summary.quiz, "Table session finished");
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config(config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}

/// Load config and fold in per-command overrides.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<Config> {
    Config::load(path)?.with_overrides(overrides)
}
