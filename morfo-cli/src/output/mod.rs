//! Output formatting module

use anyhow::Result;
use morfo_core::{AnalyzedWord, MorphologyRules};

use crate::verify::Verification;

/// One analyzed token ready for output
#[derive(Debug, Clone)]
pub struct WordReport {
    pub analysis: AnalyzedWord,
    /// Grammatical tags of the prefixes then the suffixes
    pub tags: Vec<String>,
    pub verification: Option<Verification>,
}

impl WordReport {
    pub fn new(
        analysis: AnalyzedWord,
        rules: &dyn MorphologyRules,
        verification: Option<Verification>,
    ) -> Self {
        let tags = analysis
            .prefixes
            .iter()
            .chain(analysis.suffixes.iter())
            .filter_map(|affix| rules.affix_tag(affix))
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            analysis,
            tags,
            verification,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single analysis
    fn format_word(&mut self, report: &WordReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use morfo_core::{embedded_rules, RootStatus};

    #[test]
    fn test_report_tags_follow_affix_order() {
        let analysis = AnalyzedWord {
            original: "malbonulo".to_string(),
            prefixes: vec!["mal".to_string()],
            core: vec!["bon".to_string()],
            suffixes: vec!["ul".to_string()],
            ending: "o".to_string(),
            sub_parts: Vec::new(),
            status: RootStatus::Validated,
        };
        let rules = embedded_rules();
        let report = WordReport::new(analysis, rules.as_ref(), None);
        assert_eq!(report.tags, vec!["OPP", "PERS"]);
    }
}
