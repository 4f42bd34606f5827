//! Colour scheme for console notices.
//!
//! Colour is applied to whole lines only, so the plain text of a notice is
//! always a contiguous substring of what reaches the terminal.

/// Disable colour when quiet mode or NO_COLOR is set
pub fn configure_color(quiet: bool) {
    if quiet || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

/// Color scheme for notice text
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for accepted answers
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for recoverable input problems
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for rejected values
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Bold for headings and reports
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}
