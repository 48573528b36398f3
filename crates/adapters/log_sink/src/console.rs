//! Console logger — prints every message to standard output.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use powerhub_app::ports::Logger;

/// Writes `[Console] <message>` lines to standard output, or to any writer
/// injected with [`ConsoleLogger::with_writer`].
pub struct ConsoleLogger<W = Stdout> {
    out: RefCell<W>,
}

impl ConsoleLogger<Stdout> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleLogger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleLogger<W> {
    #[must_use]
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Logger for ConsoleLogger<W> {
    fn log(&self, message: &str) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "[Console] {message}") {
            tracing::warn!(error = %err, "unable to write log line to console");
        }
    }
}
