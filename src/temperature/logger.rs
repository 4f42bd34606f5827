//! Read-validate-accumulate loop for the temperature logger.

use anyhow::Result;
use std::fmt;
use std::io::Write;

use super::stats::RunningStatistics;
use super::validator::ValidationRange;
use crate::config::TemperatureConfig;
use crate::input::LineSource;
use crate::prompt;
use crate::ui::colors;

pub const PROMPT: &str = "Enter a temperature ('q' to quit): ";
pub const INVALID_NUMBER_NOTICE: &str = "Invalid input. Please enter a valid number.";

/// Why a line was discarded
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Text did not parse as a number
    ParseFailure(String),
    /// Parsed, but outside the configured bounds
    RangeFailure(f64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ParseFailure(raw) => write!(f, "not a number: {:?}", raw),
            Rejection::RangeFailure(value) => write!(f, "out of range: {}", value),
        }
    }
}

/// Classification of one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Quit sentinel or end of input
    Quit,
    Accepted(f64),
    Rejected(Rejection),
}

/// Drives one logging session and owns its statistics.
#[derive(Debug, Clone)]
pub struct TemperatureLogger {
    range: ValidationRange,
    unit: String,
    quit_sentinel: String,
    stats: RunningStatistics,
}

impl Default for TemperatureLogger {
    fn default() -> Self {
        Self::from_config(&TemperatureConfig::default())
    }
}

impl TemperatureLogger {
    pub fn new(range: ValidationRange, unit: impl Into<String>) -> Self {
        Self {
            range,
            unit: unit.into(),
            quit_sentinel: "q".to_string(),
            stats: RunningStatistics::new(),
        }
    }

    pub fn from_config(config: &TemperatureConfig) -> Self {
        Self::new(ValidationRange::from(config), config.unit.clone())
            .with_quit_sentinel(config.quit_sentinel.clone())
    }

    pub fn with_quit_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.quit_sentinel = sentinel.into();
        self
    }

    pub fn range(&self) -> ValidationRange {
        self.range
    }

    pub fn stats(&self) -> &RunningStatistics {
        &self.stats
    }

    /// Classify a raw line without touching the statistics.
    /// `None` (end of input) is treated like the quit sentinel.
    pub fn classify(&self, raw: Option<&str>) -> Entry {
        let Some(raw) = raw else {
            return Entry::Quit;
        };
        let trimmed = raw.trim();

        if trimmed.eq_ignore_ascii_case(self.quit_sentinel.trim()) {
            return Entry::Quit;
        }

        match trimmed.parse::<f64>() {
            Err(_) => Entry::Rejected(Rejection::ParseFailure(trimmed.to_string())),
            Ok(value) if self.range.is_valid(value) => Entry::Accepted(value),
            Ok(value) => Entry::Rejected(Rejection::RangeFailure(value)),
        }
    }

    /// Classify a line and record it when accepted.
    pub fn submit(&mut self, raw: Option<&str>) -> Entry {
        let entry = self.classify(raw);
        match &entry {
            Entry::Accepted(value) => {
                self.stats.add_temperature(*value);
                tracing::debug!(value, count = self.stats.count(), "Reading accepted");
            }
            Entry::Rejected(rejection) => {
                tracing::debug!(%rejection, "Reading discarded");
            }
            Entry::Quit => tracing::debug!("Quit requested"),
        }
        entry
    }

    /// Notice shown for a discarded line
    pub fn notice(&self, rejection: &Rejection) -> String {
        match rejection {
            Rejection::ParseFailure(_) => INVALID_NUMBER_NOTICE.to_string(),
            Rejection::RangeFailure(_) => self.range_notice(),
        }
    }

    /// Out-of-range notice naming the configured bounds and unit.
    pub fn range_notice(&self) -> String {
        format!(
            "Temperature must be between {} and {} {}.",
            self.range.min, self.range.max, self.unit
        )
    }

    /// Prompt for readings until quit or end of input, then print the report.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<RunningStatistics>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            let line = prompt::ask(source, out, PROMPT)?;
            match self.submit(line.as_deref()) {
                Entry::Quit => break,
                Entry::Accepted(_) => {}
                Entry::Rejected(Rejection::ParseFailure(_)) => {
                    writeln!(out, "{}", colors::warning(INVALID_NUMBER_NOTICE))?;
                }
                Entry::Rejected(rejection @ Rejection::RangeFailure(_)) => {
                    writeln!(out, "{}", colors::error(&self.notice(&rejection)))?;
                }
            }
        }

        // Keep the report off the prompt line when input ended without a newline.
        writeln!(out)?;
        writeln!(out, "{}", colors::heading(&format_report(&self.stats)))?;
        out.flush()?;

        Ok(self.stats)
    }
}

/// Final two-line report: count, then average to two decimals.
pub fn format_report(stats: &RunningStatistics) -> String {
    format!(
        "Total temperatures entered: {}\nAverage temperature: {:.2}",
        stats.count(),
        stats.average()
    )
}
