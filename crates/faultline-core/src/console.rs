//! Console collaborator

use std::io::{self, Write};

/// Line-oriented output stream
///
/// Writes are best effort: implementations swallow I/O errors so a logging
/// call never fails because of its sink.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes each line to stdout with a single `write_all` under the stdout
/// lock, so lines from concurrent callers never interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        let stdout = io::stdout();
        let mut io = stdout.lock();
        let _ = io.write_all(&buf);
        let _ = io.flush();
    }
}
