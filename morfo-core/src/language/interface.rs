//! Public contract for morphology rules
//!
//! The analyzer only talks to this trait. Every lookup is expected to be
//! O(1) or O(affix length) and allocation-free, since the search calls
//! these many times per word.

use crate::domain::scoring::ScoringPolicy;
use crate::language::config::Endings;

/// Length limits for compound splitting
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CompoundLimits {
    /// Shortest string worth splitting, in characters
    pub min_word_length: usize,
    /// Shortest root segment, in characters
    pub min_root_length: usize,
}

/// Affix configuration consumed by the analyzer
pub trait MorphologyRules: Send + Sync + 'static {
    // --- Endings ---

    fn endings(&self) -> &Endings;

    // --- Affixes ---

    /// Longest configured prefix at the start of `stem`
    fn longest_prefix(&self, stem: &str) -> Option<&str>;

    /// Longest configured suffix at the end of `stem`
    fn longest_suffix(&self, stem: &str) -> Option<&str>;

    /// Longest preposition that is a proper prefix of `stem`
    fn longest_preposition(&self, stem: &str) -> Option<&str>;

    fn is_prefix(&self, affix: &str) -> bool;

    fn is_suffix(&self, affix: &str) -> bool;

    fn is_affix(&self, affix: &str) -> bool {
        self.is_prefix(affix) || self.is_suffix(affix)
    }

    /// Grammatical tag of a prefix or suffix
    fn affix_tag(&self, affix: &str) -> Option<&str>;

    /// Suffixes that make a derivation verbal
    fn is_verb_forming(&self, suffix: &str) -> bool;

    // --- Closed classes and exceptions ---

    /// Closed-class word (prepositions included)
    fn is_particle(&self, word: &str) -> bool;

    fn is_preposition(&self, word: &str) -> bool;

    /// Ending-bearing word whose stem merely looks like a particle
    fn is_particle_lookalike(&self, word: &str) -> bool;

    /// Atomic root that would otherwise be taken apart
    fn is_exception_root(&self, root: &str) -> bool;

    /// Stem whose prefix-like start must not be stripped
    fn blocks_prefix_stripping(&self, stem: &str) -> bool;

    // --- Compounds and scoring ---

    fn is_linking_vowel(&self, ch: char) -> bool;

    fn compound_limits(&self) -> CompoundLimits;

    fn negation_particle(&self) -> &str;

    /// Suffixes under which the negation particle stays the root
    fn is_negation_root_suffix(&self, suffix: &str) -> bool;

    fn scoring(&self) -> &ScoringPolicy;
}
