//! Configuration structures and validation
//!
//! This module defines the TOML schema for morphology rules.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::scoring::ScoringPolicy;

/// Root morphology configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphologyConfig {
    pub metadata: Metadata,
    pub endings: Endings,
    pub prefixes: Vec<AffixEntry>,
    pub suffixes: Vec<AffixEntry>,
    pub derivation: Derivation,
    pub negation: Negation,
    pub compounds: Compounds,
    pub closed_class: ClosedClass,
    #[serde(default)]
    pub exceptions: Exceptions,
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Grammatical ending markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endings {
    pub plural: char,
    pub accusative: char,
    pub tense: Vec<String>,
    pub volitive: String,
    pub infinitive: String,
    pub vowels: Vec<char>,
    pub assumed_nominal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixEntry {
    pub affix: String,
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Derivation {
    pub verb_forming: Vec<String>,
}

/// Negation particle special-casing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Negation {
    pub particle: String,
    /// Suffixes under which the particle itself is kept as the root
    #[serde(default)]
    pub root_suffixes: Vec<String>,
}

/// Compound splitting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compounds {
    pub linking_vowels: Vec<char>,
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
    #[serde(default = "default_min_root_length")]
    pub min_root_length: usize,
}

/// Closed-class words, organized by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedClass {
    /// Prepositions may also act as prefixes
    pub prepositions: Vec<String>,
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Hand-curated exceptions to regular affix stripping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exceptions {
    /// Stems starting with these keep their prefix-like start
    #[serde(default)]
    pub prefix_starts: Vec<String>,
    /// Words that are not particles despite a particle stem
    #[serde(default)]
    pub particle_lookalikes: Vec<String>,
    /// Atomic roots that look affixed
    #[serde(flatten)]
    pub roots: HashMap<String, Vec<String>>,
}

fn default_min_word_length() -> usize {
    4
}

fn default_min_root_length() -> usize {
    2
}

impl MorphologyConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.prefixes.is_empty() && self.suffixes.is_empty() {
            return Err("At least one prefix or suffix must be configured".to_string());
        }

        for (kind, table) in [("prefix", &self.prefixes), ("suffix", &self.suffixes)] {
            let mut seen = HashSet::new();
            for entry in table {
                if entry.affix.is_empty() {
                    return Err(format!("Empty {kind} entry (tag {})", entry.tag));
                }
                if !seen.insert(entry.affix.as_str()) {
                    return Err(format!("Duplicate {kind}: {}", entry.affix));
                }
            }
        }

        let endings = &self.endings;
        if endings.infinitive.is_empty() {
            return Err("Infinitive marker must not be empty".to_string());
        }
        if endings.vowels.is_empty() {
            return Err("At least one ending vowel must be configured".to_string());
        }
        if endings.tense.iter().any(String::is_empty) || endings.volitive.is_empty() {
            return Err("Verb endings must not be empty".to_string());
        }

        if let Some(vowel) = self
            .compounds
            .linking_vowels
            .iter()
            .find(|v| !endings.vowels.contains(v))
        {
            return Err(format!("Linking vowel '{vowel}' is not an ending vowel"));
        }
        if self.compounds.min_root_length == 0 {
            return Err("Minimum root length must be at least 1".to_string());
        }
        if self.compounds.min_word_length < self.compounds.min_root_length * 2 {
            return Err(format!(
                "Minimum compound length {} cannot hold two roots of length {}",
                self.compounds.min_word_length, self.compounds.min_root_length
            ));
        }

        if self.negation.particle.is_empty() {
            return Err("Negation particle must not be empty".to_string());
        }

        let suffixes: HashSet<&str> = self.suffixes.iter().map(|e| e.affix.as_str()).collect();
        for affix in self
            .derivation
            .verb_forming
            .iter()
            .chain(&self.negation.root_suffixes)
        {
            if !suffixes.contains(affix.as_str()) {
                return Err(format!("'{affix}' is not a configured suffix"));
            }
        }

        self.scoring.validate()
    }
}
