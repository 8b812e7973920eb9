//! Markdown output formatter

use super::{OutputFormatter, WordReport};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs analyses as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "| Word | Prefixes | Core | Suffixes | Ending | Status | Lookup |"
        )?;
        writeln!(self.writer, "|---|---|---|---|---|---|---|")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, report: &WordReport) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        self.word_count += 1;

        let word = &report.analysis;
        let lookup = match &report.verification {
            Some(v) if v.found => format!("✓ {}", v.lookup_word),
            Some(v) => format!("✗ {}", v.lookup_word),
            None => String::new(),
        };
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {:?} | {} |",
            word.original,
            word.prefixes.join(" "),
            word.core_display().replace('|', "\\|"),
            word.suffixes.join(" "),
            word.ending,
            word.status,
            lookup
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
