//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("{} {}", style("·").dim(), style(msg).dim());
        }
    }

    /// Print a section heading.
    pub fn heading(&self, msg: &str) {
        println!("\n{}", style(msg).bold());
    }
}
