//! Affix enumeration
//!
//! Greedily strips every recognizable prefix from the front and suffix
//! from the back. The result over-strips on purpose: reconstruction gives
//! affixes back until a known root appears.

use smallvec::SmallVec;

use crate::language::MorphologyRules;

/// Affixes in order; words rarely carry more than four
pub type AffixChain = SmallVec<[String; 4]>;

/// Maximal reduction of a stem
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AffixReduction {
    /// What is left after stripping; may be empty
    pub remainder: String,
    /// Outermost first
    pub prefixes: AffixChain,
    /// Innermost first
    pub suffixes: AffixChain,
}

impl AffixReduction {
    /// Stem rebuilt from all parts
    pub fn stem(&self) -> String {
        let mut stem: String = self.prefixes.concat();
        stem.push_str(&self.remainder);
        stem.push_str(&self.suffixes.concat());
        stem
    }

    pub fn affix_count(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }
}

/// Strip prefixes, then suffixes, each time taking the longest match
pub fn strip_affixes(stem: &str, rules: &dyn MorphologyRules) -> AffixReduction {
    let mut rest = stem;
    let mut prefixes = AffixChain::new();

    while !rules.blocks_prefix_stripping(rest) {
        let Some(prefix) = rules.longest_prefix(rest) else {
            break;
        };
        prefixes.push(prefix.to_string());
        rest = &rest[prefix.len()..];
    }

    // Suffixes come off outermost first; store them innermost first
    let mut suffixes = AffixChain::new();
    while let Some(suffix) = rules.longest_suffix(rest) {
        suffixes.insert(0, suffix.to_string());
        rest = &rest[..rest.len() - suffix.len()];
    }

    AffixReduction {
        remainder: rest.to_string(),
        prefixes,
        suffixes,
    }
}
