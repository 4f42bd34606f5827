//! Fixed-width multiplication grid.
//!
//! Layout for size 3:
//!
//! ```text
//!   x|   1   2   3
//! ----------------
//!   1|   1   2   3
//!   2|   2   4   6
//!   3|   3   6   9
//! ```

use std::io::{self, Write};

/// Width of each product column
pub const CELL_WIDTH: usize = 4;
/// Width of the row label, before the separator character
pub const LABEL_WIDTH: usize = 3;
pub const LABEL_SEPARATOR: char = '|';
/// Largest grid the tool will print
pub const MAX_SIZE: usize = 1000;

/// Product shown at 1-indexed `row`, `column`
pub fn cell(row: usize, column: usize) -> usize {
    row * column
}

pub fn header_row(size: usize) -> String {
    let mut line = format!("{:>width$}{}", "x", LABEL_SEPARATOR, width = LABEL_WIDTH);
    for column in 1..=size {
        line.push_str(&format!("{:>width$}", column, width = CELL_WIDTH));
    }
    line
}

pub fn separator_row(size: usize) -> String {
    "-".repeat(LABEL_WIDTH + 1 + CELL_WIDTH * size)
}

pub fn body_row(row: usize, size: usize) -> String {
    let mut line = format!("{:>width$}{}", row, LABEL_SEPARATOR, width = LABEL_WIDTH);
    for column in 1..=size {
        line.push_str(&format!("{:>width$}", cell(row, column), width = CELL_WIDTH));
    }
    line
}

/// Write the header, separator and `size` body rows one line at a time.
///
/// `size` must be within `1..=MAX_SIZE`; the size selector guarantees this.
pub fn write_table<W: Write + ?Sized>(out: &mut W, size: usize) -> io::Result<()> {
    writeln!(out, "{}", header_row(size))?;
    writeln!(out, "{}", separator_row(size))?;
    for row in 1..=size {
        writeln!(out, "{}", body_row(row, size))?;
    }
    Ok(())
}

/// Full table with a trailing newline.
pub fn render_table(size: usize) -> String {
    let mut table = String::new();
    table.push_str(&header_row(size));
    table.push('\n');
    table.push_str(&separator_row(size));
    table.push('\n');
    for row in 1..=size {
        table.push_str(&body_row(row, size));
        table.push('\n');
    }
    table
}
