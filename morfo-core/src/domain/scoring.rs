//! Candidate scoring
//!
//! Candidates are ranked by `(penalty, root length, affix count)`: the
//! lowest penalty wins, then the longest validated root, then the deepest
//! decomposition. The penalties are named policy values so they can be
//! tuned from the rules file without touching the search.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::domain::reconstruct::{Candidate, CandidateOrigin};
use crate::language::MorphologyRules;

/// Penalties applied to candidate segmentations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Root is the negation particle and its suffixes are not a single boosted one
    pub negation_root_penalty: i32,
    /// Root is the negation particle and its only suffix is boosted (neig, neul)
    pub negation_root_bonus: i32,
    /// Root is a suffix used as a root while the negation particle is a prefix.
    /// Must stay below `negation_root_penalty` so that `neebl` reads as ne+ebl.
    pub negated_suffix_root_penalty: i32,
    /// Compound found in the remainder left by affix stripping
    pub compound_after_stripping_penalty: i32,
    /// Compound found in the unstripped stem
    pub compound_on_stem_penalty: i32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            negation_root_penalty: 100,
            negation_root_bonus: -100,
            negated_suffix_root_penalty: 50,
            compound_after_stripping_penalty: 2,
            compound_on_stem_penalty: 1,
        }
    }
}

impl ScoringPolicy {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.negated_suffix_root_penalty >= self.negation_root_penalty {
            return Err(format!(
                "negated_suffix_root_penalty ({}) must be lower than negation_root_penalty ({})",
                self.negated_suffix_root_penalty, self.negation_root_penalty
            ));
        }
        if self.negation_root_bonus >= self.negation_root_penalty {
            return Err("negation_root_bonus must be lower than negation_root_penalty".to_string());
        }
        if self.compound_after_stripping_penalty < 0 || self.compound_on_stem_penalty < 0 {
            return Err("Compound penalties must not be negative".to_string());
        }
        Ok(())
    }
}

/// Score of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub penalty: i32,
    /// Characters of validated roots, linking vowels excluded
    pub root_length: usize,
    /// Affixes separated from the root
    pub affix_count: usize,
}

impl Score {
    /// Key whose minimum is the best candidate
    pub fn rank_key(&self) -> (i32, Reverse<usize>, Reverse<usize>) {
        (
            self.penalty,
            Reverse(self.root_length),
            Reverse(self.affix_count),
        )
    }
}

/// Penalty for a candidate under the configured policy
pub fn penalty(candidate: &Candidate, rules: &dyn MorphologyRules) -> i32 {
    let policy = rules.scoring();
    let negation = rules.negation_particle();
    let mut penalty = 0;

    if let [root] = candidate.core.as_slice() {
        if root == negation {
            let boosted = matches!(
                candidate.suffixes.as_slice(),
                [only] if rules.is_negation_root_suffix(only)
            );
            penalty += if boosted {
                policy.negation_root_bonus
            } else {
                policy.negation_root_penalty
            };
        }

        if rules.is_suffix(root) && candidate.prefixes.iter().any(|p| p == negation) {
            penalty += policy.negated_suffix_root_penalty;
        }
    }

    penalty += match candidate.origin {
        CandidateOrigin::Reconstruction => 0,
        CandidateOrigin::CompoundAfterStripping => policy.compound_after_stripping_penalty,
        CandidateOrigin::CompoundOnStem => policy.compound_on_stem_penalty,
    };

    penalty
}

pub fn score(candidate: &Candidate, rules: &dyn MorphologyRules) -> Score {
    Score {
        penalty: penalty(candidate, rules),
        root_length: candidate.root_length,
        affix_count: candidate.prefixes.len() + candidate.suffixes.len(),
    }
}
