//! Multiplication table tool: pick a size, print the grid, optionally run a
//! one-question practice quiz.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

use crate::config::Config;
use crate::input::LineSource;
use crate::prompt;
use crate::ui::colors;

pub mod quiz;
pub mod render;
pub mod size;

pub use quiz::{run_quiz, QuizOutcome, QuizQuestion};
pub use render::{render_table, write_table, MAX_SIZE};
pub use size::select_size;

pub const PRACTICE_QUESTION: &str = "Would you like to practice a multiplication question?";
pub const FAREWELL: &str = "Thanks for practicing. Goodbye!";

/// What happened during one table session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    pub size: usize,
    /// `None` when practice was declined
    pub quiz: Option<QuizOutcome>,
}

/// Run a full session with the given randomness source.
pub fn run_session<R, S, W>(
    rng: &mut R,
    default_size: usize,
    source: &mut S,
    out: &mut W,
) -> Result<TableSummary>
where
    R: Rng,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let size = select_size(source, out, default_size)?;
    tracing::debug!(size, "Rendering table");

    writeln!(out)?;
    write_table(out, size)?;
    writeln!(out)?;

    let quiz = if prompt::confirm(source, out, PRACTICE_QUESTION)? {
        Some(run_quiz(rng, size, source, out)?)
    } else {
        None
    };

    writeln!(out, "{}", colors::secondary(FAREWELL))?;
    out.flush()?;

    Ok(TableSummary { size, quiz })
}

/// Run a session using the configured seed, or OS entropy when unset.
pub fn run_with_config<S, W>(config: &Config, source: &mut S, out: &mut W) -> Result<TableSummary>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let mut rng = match config.quiz.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_session(&mut rng, config.table.default_size, source, out)
}
