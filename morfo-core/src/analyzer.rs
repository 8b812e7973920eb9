//! Analyzer entry points

use std::sync::Arc;

use tracing::debug;

use crate::dictionary::RootDictionary;
use crate::domain::{assemble::assemble, collect_candidates, ending, select, RootValidator};
use crate::language::MorphologyRules;
use crate::text;
use crate::types::{AnalyzedWord, RootStatus};

/// Morphological analyzer over a fixed rule set and root dictionary
///
/// Both collaborators are read-only, so one analyzer can be shared by any
/// number of threads.
///
/// # Example
///
/// ```rust
/// use morfo_core::{embedded_rules, Analyzer, RootLexicon};
///
/// let dictionary = RootLexicon::from_roots(["parol", "kompren"]);
/// let analyzer = Analyzer::shared(embedded_rules(), std::sync::Arc::new(dictionary));
///
/// let word = analyzer.analyze("nekompreneble");
/// assert_eq!(word.prefixes, vec!["ne"]);
/// assert_eq!(word.core, vec!["kompren"]);
/// assert_eq!(word.suffixes, vec!["ebl"]);
/// assert_eq!(word.ending, "i");
/// ```
#[derive(Clone)]
pub struct Analyzer {
    rules: Arc<dyn MorphologyRules>,
    dictionary: Arc<dyn RootDictionary>,
}

impl Analyzer {
    pub fn new(
        rules: impl MorphologyRules,
        dictionary: impl RootDictionary + 'static,
    ) -> Self {
        Self::shared(Arc::new(rules), Arc::new(dictionary))
    }

    pub fn shared(rules: Arc<dyn MorphologyRules>, dictionary: Arc<dyn RootDictionary>) -> Self {
        Self { rules, dictionary }
    }

    pub fn rules(&self) -> &dyn MorphologyRules {
        self.rules.as_ref()
    }

    pub fn dictionary(&self) -> &dyn RootDictionary {
        self.dictionary.as_ref()
    }

    fn validator(&self) -> RootValidator<'_> {
        RootValidator::new(self.dictionary.as_ref(), self.rules.as_ref())
    }

    /// Ending normalization of a raw token
    pub fn normalize(&self, token: &str) -> ending::NormalizedWord {
        ending::normalize(&token.to_lowercase(), self.rules())
    }

    /// Analyze a token, splitting hyphenated compounds into sub parts
    ///
    /// Tokens whose first segment is a single letter (`d-ro`) are
    /// abbreviations and are analyzed whole.
    pub fn analyze(&self, token: &str) -> AnalyzedWord {
        match token.split_once('-') {
            Some((first, _)) if first.chars().count() > 1 => self.analyze_hyphenated(token),
            _ => self.analyze_word(token),
        }
    }

    /// Analyze a single word
    pub fn analyze_word(&self, token: &str) -> AnalyzedWord {
        if !token.chars().next().is_some_and(char::is_alphabetic) {
            return AnalyzedWord::passthrough(token);
        }

        let rules = self.rules();
        let normalized = self.normalize(token);

        if rules.is_particle(&normalized.stem)
            && !rules.is_particle_lookalike(&normalized.form())
        {
            return AnalyzedWord {
                original: token.to_string(),
                prefixes: Vec::new(),
                core: vec![normalized.stem],
                suffixes: Vec::new(),
                ending: normalized.ending,
                sub_parts: Vec::new(),
                status: RootStatus::ClosedClass,
            };
        }

        let validator = self.validator();
        let set = collect_candidates(&normalized.stem, &validator);
        let found = set.candidates.len();
        let winner = select(set.candidates, &validator);
        let word = assemble(token, &normalized.ending, winner, set.reduction, rules);

        debug!(
            token,
            candidates = found,
            analysis = %word.breakdown(),
            status = ?word.status,
            "analyzed word"
        );
        word
    }

    /// Analyze a hyphenated token segment by segment
    ///
    /// Inner segments that are not particles are tried with the assumed
    /// nominal ending first, falling back to the bare segment when that
    /// does not resolve.
    pub fn analyze_hyphenated(&self, token: &str) -> AnalyzedWord {
        let segments: Vec<&str> = token.split('-').collect();
        let last = segments.len() - 1;

        let sub_parts: Vec<AnalyzedWord> = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| self.analyze_segment(segment, i == last))
            .collect();

        let status = if sub_parts.iter().all(|part| part.status.is_known()) {
            RootStatus::Validated
        } else {
            RootStatus::Unresolved
        };

        let (first, final_part) = match (sub_parts.first(), sub_parts.last()) {
            (Some(first), Some(final_part)) => (first, final_part),
            _ => return AnalyzedWord::passthrough(token),
        };

        AnalyzedWord {
            original: token.to_string(),
            prefixes: first.prefixes.clone(),
            core: sub_parts.iter().flat_map(|part| part.core.clone()).collect(),
            suffixes: final_part.suffixes.clone(),
            ending: final_part.ending.clone(),
            status,
            sub_parts,
        }
    }

    fn analyze_segment(&self, segment: &str, is_final: bool) -> AnalyzedWord {
        if is_final || self.rules.is_particle(&segment.to_lowercase()) {
            return self.analyze_word(segment);
        }

        let assumed = format!("{segment}{}", self.rules.endings().assumed_nominal);
        let analysis = self.analyze_word(&assumed);
        if analysis.status == RootStatus::Unresolved {
            self.analyze_word(segment)
        } else {
            analysis.with_original(segment)
        }
    }

    /// Analyze every word of a running text
    pub fn analyze_text(&self, text: &str) -> Vec<AnalyzedWord> {
        let words = text::words(text);
        self.analyze_batch(&words)
    }

    /// Analyze many tokens, in input order
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Vec<AnalyzedWord> {
        use rayon::prelude::*;

        tokens
            .par_iter()
            .map(|token| self.analyze(token.as_ref()))
            .collect()
    }

    /// Analyze many tokens, in input order
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> Vec<AnalyzedWord> {
        tokens
            .iter()
            .map(|token| self.analyze(token.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("roots", &self.dictionary.len())
            .finish_non_exhaustive()
    }
}
