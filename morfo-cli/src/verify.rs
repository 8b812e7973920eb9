//! Checking analyses against a headword list
//!
//! An analysis is confirmed when a word rebuilt from it is a headword.
//! Lookups are tried in order:
//! 1. the token itself
//! 2. prefixes, core and suffixes with an ending
//! 3. the same with suffixes dropped one at a time from the end
//! 4. the core with suffixes and without prefixes, then the bare core
//! 5. each root of the core on its own
//!
//! Every base is tried with the analysed ending first, then bare, then with
//! the common endings. Every form is looked up as written and capitalized.

use anyhow::Result;
use morfo_core::AnalyzedWord;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::input::FileReader;

/// Endings tried after the analysed one
const LOOKUP_ENDINGS: &[&str] = &[
    "", "i", "o", "a", "e", "as", "is", "os", "us", "u", "n", "j", "jn",
];

/// Known dictionary headwords, case preserved
#[derive(Debug, Default)]
pub struct Headwords {
    words: HashSet<String>,
}

/// Which lookup found the headword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMethod {
    Exact,
    WithEnding,
    SuffixStripped,
    Core,
}

/// Outcome of a headword lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub found: bool,
    /// Headword that matched, or the rebuilt word when nothing matched
    pub lookup_word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<LookupMethod>,
}

impl Verification {
    pub fn found(method: LookupMethod, lookup_word: impl Into<String>) -> Self {
        Self {
            found: true,
            lookup_word: lookup_word.into(),
            method: Some(method),
        }
    }

    pub fn missing(lookup_word: impl Into<String>) -> Self {
        Self {
            found: false,
            lookup_word: lookup_word.into(),
            method: None,
        }
    }
}

impl Headwords {
    /// Load one headword per line; anything after `:` or a tab is ignored
    pub fn load(path: &Path) -> Result<Self> {
        let lines = FileReader::read_lines(path)?;
        let headwords = Self::from_words(lines.iter().map(|line| {
            line.split_once([':', '\t'])
                .map_or(line.as_str(), |(word, _)| word)
        }));
        log::debug!(
            "Loaded {} headwords from {}",
            headwords.len(),
            path.display()
        );
        Ok(headwords)
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up the words rebuilt from an analysis
    ///
    /// Returns `None` for tokens that were not analyzed.
    pub fn verify(&self, word: &AnalyzedWord) -> Option<Verification> {
        if word.core.is_empty() {
            return None;
        }

        let found = lookup_candidates(word)
            .into_iter()
            .find_map(|(method, candidate)| {
                self.find_form(&candidate)
                    .map(|form| Verification::found(method, form))
            });

        Some(found.unwrap_or_else(|| Verification::missing(rebuild(word))))
    }

    /// `word` as written, then capitalized
    fn find_form(&self, word: &str) -> Option<String> {
        if self.contains(word) {
            return Some(word.to_string());
        }
        let capitalized = capitalize(word);
        self.contains(&capitalized).then_some(capitalized)
    }
}

/// Prefixes, core, suffixes and ending joined back together
fn rebuild(word: &AnalyzedWord) -> String {
    format!(
        "{}{}{}{}",
        word.prefixes.concat(),
        word.core.concat(),
        word.suffixes.concat(),
        word.ending
    )
}

/// Every lookup form in order, without repeats
fn lookup_candidates(word: &AnalyzedWord) -> Vec<(LookupMethod, String)> {
    let mut candidates: Vec<(LookupMethod, String)> = Vec::new();
    let mut push = |method: LookupMethod, form: String| {
        if !form.is_empty() && !candidates.iter().any(|(_, c)| *c == form) {
            candidates.push((method, form));
        }
    };
    let with_endings = |base: &str| -> Vec<String> {
        std::iter::once(word.ending.as_str())
            .chain(LOOKUP_ENDINGS.iter().copied())
            .map(|ending| format!("{base}{ending}"))
            .collect()
    };

    push(LookupMethod::Exact, word.original.clone());
    push(LookupMethod::Exact, word.original.to_lowercase());

    let prefixes = word.prefixes.concat();
    let core = word.core.concat();
    let suffixes = word.suffixes.len();
    for kept in (0..=suffixes).rev() {
        let method = if kept == suffixes {
            LookupMethod::WithEnding
        } else {
            LookupMethod::SuffixStripped
        };
        let base = format!("{prefixes}{core}{}", word.suffixes[..kept].concat());
        for form in with_endings(&base) {
            push(method, form);
        }
    }

    if !prefixes.is_empty() {
        for kept in [suffixes, 0] {
            let base = format!("{core}{}", word.suffixes[..kept].concat());
            for form in with_endings(&base) {
                push(LookupMethod::Core, form);
            }
        }
    }

    for root in word.roots() {
        for form in with_endings(root) {
            push(LookupMethod::Core, form);
        }
    }

    candidates
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morfo_core::RootStatus;

    fn analysis(core: &[&str], suffixes: &[&str], ending: &str) -> AnalyzedWord {
        affixed(&[], core, suffixes, ending)
    }

    fn affixed(prefixes: &[&str], core: &[&str], suffixes: &[&str], ending: &str) -> AnalyzedWord {
        let owned = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        AnalyzedWord {
            original: String::new(),
            prefixes: owned(prefixes),
            core: owned(core),
            suffixes: owned(suffixes),
            ending: ending.to_string(),
            sub_parts: Vec::new(),
            status: RootStatus::Validated,
        }
    }

    #[test]
    fn test_exact_token() {
        let headwords = Headwords::from_words(["venis"]);
        let mut word = analysis(&["ven"], &[], "i");
        word.original = "Venis".to_string();
        assert_eq!(
            headwords.verify(&word),
            Some(Verification::found(LookupMethod::Exact, "venis"))
        );
    }

    #[test]
    fn test_prefixes_kept_in_rebuilt_word() {
        let headwords = Headwords::from_words(["malbona", "bona"]);
        let result = headwords
            .verify(&affixed(&["mal"], &["bon"], &[], "a"))
            .unwrap();
        assert_eq!(result, Verification::found(LookupMethod::WithEnding, "malbona"));
    }

    #[test]
    fn test_other_endings_are_tried() {
        let headwords = Headwords::from_words(["paroli"]);
        let result = headwords
            .verify(&analysis(&["parol"], &[], "o"))
            .unwrap();
        assert_eq!(result, Verification::found(LookupMethod::WithEnding, "paroli"));
    }

    #[test]
    fn test_suffixes_stripped_from_the_end() {
        let headwords = Headwords::from_words(["ĉirkaŭparoli", "paroli"]);
        let result = headwords
            .verify(&affixed(&["ĉirkaŭ"], &["parol"], &["ad"], "o"))
            .unwrap();
        assert_eq!(
            result,
            Verification::found(LookupMethod::SuffixStripped, "ĉirkaŭparoli")
        );
    }

    #[test]
    fn test_core_without_prefixes() {
        let headwords = Headwords::from_words(["kompreni"]);
        let result = headwords
            .verify(&affixed(&["ne"], &["kompren"], &["ebl"], "i"))
            .unwrap();
        assert_eq!(result, Verification::found(LookupMethod::Core, "kompreni"));
    }

    #[test]
    fn test_core_with_ending() {
        let headwords = Headwords::from_words(["hundo", "paroli"]);
        let result = headwords.verify(&analysis(&["hund"], &["et"], "o")).unwrap();
        assert_eq!(
            result,
            Verification::found(LookupMethod::SuffixStripped, "hundo")
        );
    }

    #[test]
    fn test_core_with_suffixes() {
        let headwords = Headwords::from_words(["lernejo"]);
        let result = headwords.verify(&analysis(&["lern"], &["ej"], "o")).unwrap();
        assert!(result.found);
        assert_eq!(result.lookup_word, "lernejo");
    }

    #[test]
    fn test_bare_root_of_compound() {
        let headwords = Headwords::from_words(["okul"]);
        let result = headwords
            .verify(&analysis(&["blu", "okul"], &[], "a"))
            .unwrap();
        assert!(result.found);
        assert_eq!(result.lookup_word, "okul");
    }

    #[test]
    fn test_capitalized_headword() {
        let headwords = Headwords::from_words(["Eŭropo"]);
        let result = headwords.verify(&analysis(&["eŭrop"], &[], "o")).unwrap();
        assert!(result.found);
        assert_eq!(result.lookup_word, "Eŭropo");
    }

    #[test]
    fn test_not_found_reports_rebuilt_word() {
        let headwords = Headwords::from_words(["hundo"]);
        let result = headwords
            .verify(&affixed(&["re"], &["ven"], &[], "i"))
            .unwrap();
        assert_eq!(result, Verification::missing("reveni"));
    }

    #[test]
    fn test_passthrough_is_not_verified() {
        let headwords = Headwords::from_words(["hundo"]);
        assert!(headwords.verify(&AnalyzedWord::passthrough("123")).is_none());
    }

    #[test]
    fn test_load_ignores_definitions() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("kapvortoj.txt");
        std::fs::write(&path, "# kapvortoj\nhundo: dog\nkato\tcat\nparoli\n").unwrap();

        let headwords = Headwords::load(&path).unwrap();
        assert_eq!(headwords.len(), 3);
        assert!(headwords.contains("kato"));
    }
}
