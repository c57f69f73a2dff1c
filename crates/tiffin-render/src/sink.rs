//! Shell-first section writer.
//!
//! Emits the shell opening, then named sections in order, then the
//! closing shell, recording a timing mark per write so callers can see
//! where rendering time went.

use std::io::Write;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::shell::Shell;

/// Errors raised while writing the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Sections were written before the shell.
    #[error("Shell not sent before sections")]
    ShellNotSent,

    /// Underlying writer failed.
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named timing mark recorded during rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingMark {
    /// Mark name (e.g., "section_hero_sent").
    pub name: String,
    /// Elapsed time since the sink was created.
    pub elapsed: Duration,
}

/// Writes a page shell-first into any [`Write`] destination.
pub struct SectionSink<W: Write> {
    writer: W,
    shell_sent: bool,
    start: Instant,
    marks: Vec<TimingMark>,
}

impl<W: Write> SectionSink<W> {
    /// Create a sink over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            shell_sent: false,
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Write the opening shell. Must happen before any section.
    pub fn send_shell(&mut self, shell: &Shell) -> Result<(), RenderError> {
        self.writer.write_all(shell.render_opening().as_bytes())?;
        self.shell_sent = true;
        self.mark("shell_sent");
        Ok(())
    }

    /// Write one named section.
    pub fn send_section(&mut self, name: &str, html: &str) -> Result<(), RenderError> {
        if !self.shell_sent {
            return Err(RenderError::ShellNotSent);
        }
        self.writer.write_all(html.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.mark(&format!("section_{}_sent", name));
        Ok(())
    }

    /// Write the closing shell, flush, and return the timing marks.
    pub fn finish(mut self, shell: &Shell) -> Result<Vec<TimingMark>, RenderError> {
        self.writer.write_all(shell.render_closing().as_bytes())?;
        self.writer.flush()?;
        self.mark("complete");
        Ok(self.marks)
    }

    fn mark(&mut self, name: &str) {
        self.marks.push(TimingMark {
            name: name.to_string(),
            elapsed: self.start.elapsed(),
        });
    }
}
