//! Line sources for the interactive tools.
//!
//! Every tool reads its input through [`LineSource`], so the same session code
//! runs against the console, a file, or a scripted list of answers in tests.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

/// Capability to read one line of input.
pub trait LineSource {
    /// Read the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Line source backed by any buffered reader (console or file).
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<StdinLock<'static>> {
    /// Blocking console source.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl ReaderSource<BufReader<File>> {
    /// Open a file whose lines are fed to the tool one at a time.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }

        // Invalid UTF-8 is user input like any other; it reaches the parser
        // with replacement characters and gets rejected there.
        let mut line = String::from_utf8_lossy(&buf).into_owned();

        // Strip the line terminator only; callers decide how to trim.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Pre-recorded answers, yielded in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
