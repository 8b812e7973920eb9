//! Output types of the analyzer

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the core of an [`AnalyzedWord`] was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootStatus {
    /// At least one candidate segmentation validated
    Validated,
    /// The stem is a closed-class particle and was not segmented
    ClosedClass,
    /// Nothing validated; the core is the maximal reduction
    Unresolved,
    /// Not a word (empty or not starting with a letter)
    Passthrough,
}

impl RootStatus {
    /// Whether the core could be confirmed against the dictionary or rules
    pub fn is_known(&self) -> bool {
        matches!(self, RootStatus::Validated | RootStatus::ClosedClass)
    }
}

/// A word split into prefixes, core, suffixes and ending
///
/// `core` holds one or more roots. In a compound, single-character
/// linking vowels may sit between two roots. Suffixes are listed
/// innermost first, prefixes outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedWord {
    /// Input token as given
    pub original: String,
    pub prefixes: Vec<String>,
    pub core: Vec<String>,
    pub suffixes: Vec<String>,
    pub ending: String,
    /// One analysis per hyphen-separated segment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_parts: Vec<AnalyzedWord>,
    pub status: RootStatus,
}

impl AnalyzedWord {
    /// Analysis of a token that is not a word
    pub fn passthrough(original: &str) -> Self {
        Self {
            original: original.to_string(),
            prefixes: Vec::new(),
            core: Vec::new(),
            suffixes: Vec::new(),
            ending: String::new(),
            sub_parts: Vec::new(),
            status: RootStatus::Passthrough,
        }
    }

    /// Shallow copy carrying a different original token
    pub fn with_original(&self, original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..self.clone()
        }
    }

    /// Prefixes, core and suffixes concatenated
    pub fn stem(&self) -> String {
        self.prefixes
            .iter()
            .chain(self.core.iter())
            .chain(self.suffixes.iter())
            .map(String::as_str)
            .collect()
    }

    /// Core elements that are roots, skipping linking vowels
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        let last = self.core.len().saturating_sub(1);
        self.core.iter().enumerate().filter_map(move |(i, part)| {
            let is_link = i > 0 && i < last && part.chars().count() == 1;
            (!is_link).then_some(part.as_str())
        })
    }

    /// Whether the core holds more than one root
    pub fn is_compound(&self) -> bool {
        self.roots().nth(1).is_some()
    }

    /// Core elements joined for display
    pub fn core_display(&self) -> String {
        self.core.join("|")
    }

    /// `pre+core+suf+ending`, omitting empty pieces
    pub fn breakdown(&self) -> String {
        let core = self.core_display();
        self.prefixes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(core.as_str()))
            .chain(self.suffixes.iter().map(String::as_str))
            .chain(std::iter::once(self.ending.as_str()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for AnalyzedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.original, self.breakdown())
    }
}
