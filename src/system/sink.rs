// src/system/sink.rs

use crate::constants::HELP_INDENT;
use colored::*;
use std::io::{self, Write};

/// Where rendered text ends up. Every call is a blocking write; nothing is
/// buffered or retried on behalf of the caller.
pub trait OutputSink {
    /// Writes a line of regular output.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes a line describing a failure.
    fn error(&mut self, text: &str) -> io::Result<()>;

    /// Writes a line describing a successful outcome.
    fn success(&mut self, text: &str) -> io::Result<()>;

    /// Writes a titled help section. The body is placed on the next line, indented.
    fn section(&mut self, heading: &str, body: &str) -> io::Result<()> {
        self.write(&format!("{}:\n{}{}\n", heading, HELP_INDENT, body))
    }
}

/// Sink for the terminal: regular and success output on stdout, errors on stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}", text.red())
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", text.green())
    }

    fn section(&mut self, heading: &str, body: &str) -> io::Result<()> {
        writeln!(
            io::stdout().lock(),
            "{}\n{}{}\n",
            format!("{}:", heading).yellow().bold(),
            HELP_INDENT,
            body
        )
    }
}

/// Which sink method produced a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Write,
    Error,
    Success,
}

/// In-memory sink that records everything written to it.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<(LineKind, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    /// All captured text of one kind, each entry followed by a newline.
    pub fn text_of(&self, kind: LineKind) -> String {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| format!("{}\n", text))
            .collect()
    }

    /// Everything captured, in write order, each entry followed by a newline.
    pub fn contents(&self) -> String {
        self.lines
            .iter()
            .map(|(_, text)| format!("{}\n", text))
            .collect()
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.lines.push((LineKind::Write, text.to_string()));
        Ok(())
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        self.lines.push((LineKind::Error, text.to_string()));
        Ok(())
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        self.lines.push((LineKind::Success, text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_records_kinds_in_order() {
        let mut sink = BufferSink::new();
        sink.write("plain").unwrap();
        sink.error("bad").unwrap();
        sink.success("good").unwrap();

        assert_eq!(sink.lines().len(), 3);
        assert_eq!(sink.contents(), "plain\nbad\ngood\n");
        assert_eq!(sink.text_of(LineKind::Error), "bad\n");
    }

    #[test]
    fn test_default_section_layout() {
        let mut sink = BufferSink::new();
        sink.section("Usage", "app run").unwrap();
        assert_eq!(sink.contents(), "Usage:\n  app run\n\n");
    }
}
