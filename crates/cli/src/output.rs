//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use weft_core::Error;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Print a configuration error with its field, context, and suggestion.
pub fn print_config_error(error: &Error) {
    match &error.field {
        Some(field) => Status::error(&format!("{}: {}", field.bold(), error.message)),
        None => Status::error(&error.message),
    }
    if let Some(context) = &error.context {
        eprintln!("  {}", context.dimmed());
    }
    if let Some(suggestion) = &error.suggestion {
        eprintln!("  {} {}", "hint:".cyan(), suggestion);
    }
}

/// Print an aligned `name value` row for document summaries.
pub fn field_row(name: &str, value: &str) {
    println!("  {} {}", format!("{:<10}", name).dimmed(), value);
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "pattern", "patterns"), "1 pattern");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(3, "pattern", "patterns"), "3 patterns");
    }

    #[test]
    fn test_format_count_zero() {
        assert_eq!(format_count(0, "plugin", "plugins"), "0 plugins");
    }
}
