//! Output rendering for the chat REPL.
//!
//! This module provides a renderer trait and a plain-text implementation
//! so the binary can print replies, errors, and info lines with or without
//! ANSI styling.

use std::io::{self, Write};

/// ANSI escape code for dim text (used for info lines).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for assistant replies).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
pub trait Renderer: Send {
    /// Print an assistant reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Renderer that writes plain text to stdout, optionally with ANSI styling.
pub struct PlainTextRenderer {
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a renderer with ANSI styling enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a renderer with ANSI styling controlled by `use_color`.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, text: &str) {
        println!("{}", self.styled(ANSI_CYAN, text));
        let _ = io::stdout().flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("{}", self.styled(ANSI_RED, error));
    }

    fn print_info(&mut self, info: &str) {
        println!("{}", self.styled(ANSI_DIM, info));
    }
}
