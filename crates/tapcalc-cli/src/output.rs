//! Terminal output formatting

use console::style;
use tapcalc::core::number::{INFINITY, NAN, NEG_INFINITY};

/// Formats the calculator display and diagnostics for the terminal
#[derive(Debug, Clone, Copy)]
pub struct DisplayPrinter {
    /// Whether to use colors
    pub use_color: bool,
}

impl DisplayPrinter {
    /// Create a new printer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Formats display text; non-finite results are highlighted
    #[must_use]
    pub fn display(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if matches!(text, INFINITY | NEG_INFINITY | NAN) {
            style(text).yellow().bold().force_styling(true).to_string()
        } else {
            style(text).bold().force_styling(true).to_string()
        }
    }

    /// Formats an error line
    #[must_use]
    pub fn error(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {message}", style("✗").red().bold().force_styling(true))
        } else {
            format!("Error: {message}")
        }
    }

    /// Formats the repl prompt
    #[must_use]
    pub fn prompt(&self) -> String {
        if self.use_color {
            style("> ").dim().force_styling(true).to_string()
        } else {
            "> ".to_string()
        }
    }
}
