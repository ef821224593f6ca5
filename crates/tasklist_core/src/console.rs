//! Line-oriented console capability.
//!
//! # Responsibility
//! - Abstract "read one line" and "write text" for the interactive loop.
//! - Provide a stdio-backed console and an in-memory console for scripts/tests.
//!
//! # Invariants
//! - `read_line` strips the trailing line terminator (`\n` or `\r\n`).
//! - `read_line` returns `Ok(None)` once input is exhausted.
//! - Bytes that are not UTF-8 are replaced, never reported as a read error.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking text transport used by `TaskList`.
pub trait Console {
    /// Reads one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Console over any buffered reader and writer, usually stdin/stdout.
pub struct StdConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdConsole<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Locks the process stdin/stdout for the lifetime of the console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is a bad line, not a broken stream.
        let line = String::from_utf8_lossy(&raw).into_owned();
        Ok(Some(strip_line_terminator(line)))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// Scripted console: queued input lines, captured output.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: String,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that will answer `read_line` with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drains and returns everything written so far.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for MemoryConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front().map(strip_line_terminator))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
