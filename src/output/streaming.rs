//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! as they are produced, for use with `StreamingWalker`.

use std::io::{self, BufWriter, StdoutLock, Write};

use crate::tree::StreamingOutput;

/// Streaming output formatter over any writer.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: Write> {
    writer: W,
}

impl StreamingFormatter<BufWriter<StdoutLock<'static>>> {
    /// Formatter over a buffered, locked stdout.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_connector(&mut self, prefix: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", prefix)
    }

    fn output_node(&mut self, name: &str, is_dir: bool, prefix: &str) -> io::Result<()> {
        if is_dir {
            writeln!(self.writer, "{}{}/", prefix, name)
        } else {
            writeln!(self.writer, "{}{}", prefix, name)
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
