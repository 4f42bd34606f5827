//! Resolve the table dimension for a run.

use anyhow::Result;
use std::io::Write;

use super::render::MAX_SIZE;
use crate::input::LineSource;
use crate::prompt;
use crate::ui::colors;

pub const CUSTOM_SIZE_QUESTION: &str = "Would you like to choose a custom table size?";
pub const MAX_NUMBER_PROMPT: &str = "Enter the maximum number for the table: ";

/// Parse a table size; only integers in `1..=MAX_SIZE` qualify.
pub fn parse_size(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| (1..=MAX_SIZE).contains(size))
}

/// Notice shown when a custom size cannot be used
pub fn invalid_size_notice(default_size: usize) -> String {
    format!("Invalid input. Using default size {}.", default_size)
}

/// Ask for an optional custom size.
///
/// Declining resolves to `default_size` silently; an unusable number resolves
/// to `default_size` with a notice.
pub fn select_size<S, W>(source: &mut S, out: &mut W, default_size: usize) -> Result<usize>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    if !prompt::confirm(source, out, CUSTOM_SIZE_QUESTION)? {
        tracing::debug!(size = default_size, "Custom size declined");
        return Ok(default_size);
    }

    let answer = prompt::ask(source, out, MAX_NUMBER_PROMPT)?;
    match answer.as_deref().and_then(parse_size) {
        Some(size) => {
            tracing::debug!(size, "Custom size selected");
            Ok(size)
        }
        None => {
            tracing::debug!(?answer, "Unusable size, falling back to default");
            writeln!(
                out,
                "{}",
                colors::warning(&invalid_size_notice(default_size))
            )?;
            Ok(default_size)
        }
    }
}
