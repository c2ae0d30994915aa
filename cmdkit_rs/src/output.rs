//! Text output sink.
//!
//! The dispatcher and commands never touch the process streams directly; they
//! hand pre-formatted text to an [`OutputSink`]. Everything written to
//! [`Stream::Stderr`] is prefixed with `"error: "`.

use std::io::{self, Write};

/// Prefix applied to every standard-error write.
pub const ERROR_PREFIX: &str = "error: ";

/// Logical output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Help/version text and normal messages.
    Stdout,
    /// Error messages (prefixed with `"error: "`).
    Stderr,
}

/// Destination for formatted CLI text.
pub trait OutputSink {
    /// Write `text` to `stream` as-is (plus the error prefix on stderr).
    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn writeln(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        self.write(stream, &format!("{text}\n"))
    }
}

/// Sink backed by the process stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(ERROR_PREFIX.as_bytes())?;
                err.write_all(text.as_bytes())
            }
        }
    }
}

/// Sink that captures both streams in memory.
///
/// Used by tests and by embedding code that wants to route output elsewhere.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    stdout: String,
    stderr: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to stdout so far.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Everything written to stderr so far, prefixes included.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Drop captured output.
    pub fn clear(&mut self) {
        self.stdout.clear();
        self.stderr.clear();
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => self.stdout.push_str(text),
            Stream::Stderr => {
                self.stderr.push_str(ERROR_PREFIX);
                self.stderr.push_str(text);
            }
        }
        Ok(())
    }
}
