//! One-shot multiplication practice question.

use anyhow::Result;
use rand::Rng;
use std::io::Write;
use std::num::IntErrorKind;

use crate::input::LineSource;
use crate::prompt;
use crate::ui::colors;

pub const CORRECT_NOTICE: &str = "Correct! Well done.";
pub const INVALID_ANSWER_NOTICE: &str = "Invalid input. Please enter a whole number next time.";

/// Two factors drawn from `[1, size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub left: usize,
    pub right: usize,
}

/// Result of grading one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect { expected: usize },
    /// Answer was not an integer (or no answer arrived)
    Invalid,
}

impl QuizQuestion {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Draw both factors independently and uniformly from `[1, size]`.
    pub fn draw<R: Rng>(rng: &mut R, size: usize) -> Self {
        let size = size.max(1);
        let left = rng.gen_range(1..=size);
        let right = rng.gen_range(1..=size);
        Self::new(left, right)
    }

    pub fn product(&self) -> usize {
        self.left * self.right
    }

    pub fn prompt(&self) -> String {
        format!("What is {} x {}? ", self.left, self.right)
    }

    /// Grade a raw answer line. `None` (end of input) is invalid.
    pub fn grade(&self, answer: Option<&str>) -> QuizOutcome {
        let Some(raw) = answer else {
            return QuizOutcome::Invalid;
        };
        let incorrect = QuizOutcome::Incorrect {
            expected: self.product(),
        };

        match raw.trim().parse::<i128>() {
            Ok(value) if value == self.product() as i128 => QuizOutcome::Correct,
            Ok(_) => incorrect,
            // A whole number too large to hold is still a wrong answer.
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                incorrect
            }
            Err(_) => QuizOutcome::Invalid,
        }
    }
}

impl QuizOutcome {
    pub fn notice(&self) -> String {
        match self {
            QuizOutcome::Correct => CORRECT_NOTICE.to_string(),
            QuizOutcome::Incorrect { expected } => {
                format!("Not quite. The correct answer is {}.", expected)
            }
            QuizOutcome::Invalid => INVALID_ANSWER_NOTICE.to_string(),
        }
    }
}

/// Pose one question, read one answer, print the verdict.
pub fn run_quiz<R, S, W>(
    rng: &mut R,
    size: usize,
    source: &mut S,
    out: &mut W,
) -> Result<QuizOutcome>
where
    R: Rng,
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let question = QuizQuestion::draw(rng, size);
    tracing::debug!(left = question.left, right = question.right, "Quiz question drawn");

    let answer = prompt::ask(source, out, &question.prompt())?;
    let outcome = question.grade(answer.as_deref());
    tracing::debug!(?outcome, "Quiz answer graded");

    let notice = outcome.notice();
    let styled = match outcome {
        QuizOutcome::Correct => colors::success(&notice),
        QuizOutcome::Incorrect { .. } => colors::error(&notice),
        QuizOutcome::Invalid => colors::warning(&notice),
    };
    writeln!(out, "{}", styled)?;

    Ok(outcome)
}
