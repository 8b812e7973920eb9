//! JSON output formatter

use super::{OutputFormatter, WordReport};
use anyhow::Result;
use morfo_core::{AnalyzedWord, RootStatus};
use serde::Serialize;
use std::io::Write;

use crate::verify::Verification;

/// JSON formatter - outputs analyses as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct WordData {
    /// The token as it appeared in the input
    pub word: String,
    pub prefixes: Vec<String>,
    pub core: Vec<String>,
    pub suffixes: Vec<String>,
    pub ending: String,
    pub status: RootStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_parts: Vec<WordData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl From<&AnalyzedWord> for WordData {
    fn from(word: &AnalyzedWord) -> Self {
        Self {
            word: word.original.clone(),
            prefixes: word.prefixes.clone(),
            core: word.core.clone(),
            suffixes: word.suffixes.clone(),
            ending: word.ending.clone(),
            status: word.status,
            sub_parts: word.sub_parts.iter().map(WordData::from).collect(),
            tags: Vec::new(),
            verification: None,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, report: &WordReport) -> Result<()> {
        let mut data = WordData::from(&report.analysis);
        data.tags = report.tags.clone();
        data.verification = report.verification.clone();
        self.words.push(data);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morfo_core::{embedded_rules, Analyzer, RootLexicon};
    use std::sync::Arc;

    fn analyzer() -> Analyzer {
        let dictionary = RootLexicon::from_roots(["kompren", "aer", "ŝip"]);
        Analyzer::shared(embedded_rules(), Arc::new(dictionary))
    }

    fn render(words: &[&str], pretty: bool) -> serde_json::Value {
        let analyzer = analyzer();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            for word in words {
                let report = WordReport::new(analyzer.analyze(word), analyzer.rules(), None);
                formatter.format_word(&report).unwrap();
            }
            formatter.finish().unwrap();
        }
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_fields() {
        let value = render(&["Nekompreneble"], true);
        let word = &value[0];
        assert_eq!(word["word"], "Nekompreneble");
        assert_eq!(word["prefixes"], serde_json::json!(["ne"]));
        assert_eq!(word["core"], serde_json::json!(["kompren"]));
        assert_eq!(word["suffixes"], serde_json::json!(["ebl"]));
        assert_eq!(word["ending"], "i");
        assert_eq!(word["status"], "validated");
        assert_eq!(word["tags"], serde_json::json!(["NOT", "ABLE"]));
        assert!(word.get("sub_parts").is_none());
        assert!(word.get("verification").is_none());
    }

    #[test]
    fn test_sub_parts_and_compact_output() {
        let value = render(&["aer-ŝipo", "ksptaĵo"], false);
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["sub_parts"][0]["word"], "aer");
        assert_eq!(value[1]["status"], "unresolved");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(render(&[], true), serde_json::json!([]));
    }
}
