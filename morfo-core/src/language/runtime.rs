//! Runtime implementation of morphology rules
//!
//! This module builds the lookup tables behind [`MorphologyRules`]
//! from a parsed configuration.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::domain::scoring::ScoringPolicy;
use crate::error::{DomainError, Result};
use crate::language::{
    config::{Endings, MorphologyConfig},
    interface::{CompoundLimits, MorphologyRules},
    tables::*,
};

/// Configurable morphology rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableMorphologyRules {
    code: String,
    name: String,

    endings: Endings,
    prefixes: AffixTrie,
    suffixes: AffixTrie,
    prepositions: AffixTrie,
    particles: WordSet,
    exception_roots: WordSet,
    prefix_starts: AffixTrie,
    lookalikes: HashSet<String>,
    verb_forming: HashSet<String>,
    linking_vowels: Vec<char>,
    limits: CompoundLimits,
    negation_particle: String,
    negation_root_suffixes: HashSet<String>,
    scoring: ScoringPolicy,
}

impl ConfigurableMorphologyRules {
    /// Create from configuration
    pub fn from_config(config: &MorphologyConfig) -> Result<Self> {
        config.validate().map_err(DomainError::InvalidRules)?;

        let prefixes = AffixTrie::from_entries(&config.prefixes, Anchor::Leading);
        let suffixes = AffixTrie::from_entries(&config.suffixes, Anchor::Trailing);
        let prepositions =
            AffixTrie::from_words(&config.closed_class.prepositions, Anchor::Leading);

        // Prepositions are particles too
        let mut particles = WordSet::from_categories(&config.closed_class.categories);
        for preposition in &config.closed_class.prepositions {
            particles.insert(preposition, "prepositions");
        }

        // Protected prefix starts are roots in their own right
        let mut exception_roots = WordSet::from_categories(&config.exceptions.roots);
        for start in &config.exceptions.prefix_starts {
            exception_roots.insert(start, "prefix_starts");
        }
        let prefix_starts = AffixTrie::from_words(&config.exceptions.prefix_starts, Anchor::Leading);

        let rules = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            endings: config.endings.clone(),
            prefixes,
            suffixes,
            prepositions,
            particles,
            exception_roots,
            prefix_starts,
            lookalikes: config.exceptions.particle_lookalikes.iter().cloned().collect(),
            verb_forming: config.derivation.verb_forming.iter().cloned().collect(),
            linking_vowels: config.compounds.linking_vowels.clone(),
            limits: CompoundLimits {
                min_word_length: config.compounds.min_word_length,
                min_root_length: config.compounds.min_root_length,
            },
            negation_particle: config.negation.particle.clone(),
            negation_root_suffixes: config.negation.root_suffixes.iter().cloned().collect(),
            scoring: config.scoring,
        };

        debug!(
            code = %rules.code,
            prefixes = rules.prefixes.len(),
            suffixes = rules.suffixes.len(),
            particles = rules.particles.len(),
            exceptions = rules.exception_roots.len(),
            "built morphology rules"
        );

        Ok(rules)
    }

    /// Parse and build from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: MorphologyConfig = toml::from_str(toml_str)
            .map_err(|e| DomainError::ConfigurationError(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Parse and build from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Replace the scoring policy
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Result<Self> {
        scoring.validate().map_err(DomainError::InvalidRules)?;
        self.scoring = scoring;
        Ok(self)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefixes(&self) -> &AffixTrie {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &AffixTrie {
        &self.suffixes
    }

    pub fn particles(&self) -> &WordSet {
        &self.particles
    }

    pub fn exception_roots(&self) -> &WordSet {
        &self.exception_roots
    }
}

impl MorphologyRules for ConfigurableMorphologyRules {
    fn endings(&self) -> &Endings {
        &self.endings
    }

    #[inline]
    fn longest_prefix(&self, stem: &str) -> Option<&str> {
        self.prefixes.longest_match(stem).map(|e| e.affix.as_str())
    }

    #[inline]
    fn longest_suffix(&self, stem: &str) -> Option<&str> {
        self.suffixes.longest_match(stem).map(|e| e.affix.as_str())
    }

    #[inline]
    fn longest_preposition(&self, stem: &str) -> Option<&str> {
        self.prepositions
            .longest_proper_match(stem)
            .map(|e| e.affix.as_str())
    }

    #[inline]
    fn is_prefix(&self, affix: &str) -> bool {
        self.prefixes.contains(affix)
    }

    #[inline]
    fn is_suffix(&self, affix: &str) -> bool {
        self.suffixes.contains(affix)
    }

    fn affix_tag(&self, affix: &str) -> Option<&str> {
        self.prefixes
            .tag(affix)
            .or_else(|| self.suffixes.tag(affix))
    }

    #[inline]
    fn is_verb_forming(&self, suffix: &str) -> bool {
        self.verb_forming.contains(suffix)
    }

    #[inline]
    fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(word)
    }

    #[inline]
    fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    fn is_particle_lookalike(&self, word: &str) -> bool {
        self.lookalikes.contains(word)
    }

    #[inline]
    fn is_exception_root(&self, root: &str) -> bool {
        self.exception_roots.contains(root)
    }

    fn blocks_prefix_stripping(&self, stem: &str) -> bool {
        self.prefix_starts.longest_match(stem).is_some()
    }

    #[inline]
    fn is_linking_vowel(&self, ch: char) -> bool {
        self.linking_vowels.contains(&ch)
    }

    fn compound_limits(&self) -> CompoundLimits {
        self.limits
    }

    fn negation_particle(&self) -> &str {
        &self.negation_particle
    }

    fn is_negation_root_suffix(&self, suffix: &str) -> bool {
        self.negation_root_suffixes.contains(suffix)
    }

    fn scoring(&self) -> &ScoringPolicy {
        &self.scoring
    }
}
