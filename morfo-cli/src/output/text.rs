//! Plain text output formatter

use super::{OutputFormatter, WordReport};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one analysis per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, report: &WordReport) -> Result<()> {
        write!(self.writer, "{}", report.analysis)?;
        match &report.verification {
            Some(v) if v.found => write!(self.writer, "\t[found: {}]", v.lookup_word)?,
            Some(v) => write!(self.writer, "\t[not found: {}]", v.lookup_word)?,
            None => {}
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
