use anyhow::Result;
use std::io::Write;

use crate::input::LineSource;

/// Write `message` without a newline and read the answer.
///
/// Returns `None` when the source is exhausted.
pub fn ask<S, W>(source: &mut S, out: &mut W, message: &str) -> Result<Option<String>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{}", message)?;
    out.flush()?;
    source.read_line()
}

/// Ask a yes/no question.
/// Returns true only for y/yes (any case). Anything else, including end of
/// input, declines.
pub fn confirm<S, W>(source: &mut S, out: &mut W, message: &str) -> Result<bool>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let answer = ask(source, out, &format!("{} (y/n): ", message))?;
    Ok(answer.as_deref().map(is_yes).unwrap_or(false))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
