//! Final assembly of an analysis

use crate::domain::affix::AffixReduction;
use crate::domain::reconstruct::Candidate;
use crate::language::MorphologyRules;
use crate::types::{AnalyzedWord, RootStatus};

/// Build the analysis of a word from the winning candidate
///
/// Without a winner the maximal reduction is used unvalidated.
pub fn assemble(
    original: &str,
    ending: &str,
    winner: Option<Candidate>,
    fallback: AffixReduction,
    rules: &dyn MorphologyRules,
) -> AnalyzedWord {
    let (mut prefixes, mut core, mut suffixes, status) = match winner {
        Some(candidate) => (
            candidate.prefixes.into_vec(),
            candidate.core,
            candidate.suffixes.into_vec(),
            RootStatus::Validated,
        ),
        None => {
            let core = if fallback.remainder.is_empty() {
                Vec::new()
            } else {
                vec![fallback.remainder]
            };
            (
                fallback.prefixes.into_vec(),
                core,
                fallback.suffixes.into_vec(),
                RootStatus::Unresolved,
            )
        }
    };

    // A word cannot have an empty root. The innermost prefix is promoted so
    // that prefixes + core + suffixes still spells the stem.
    if core.is_empty() {
        if !suffixes.is_empty() {
            core.push(suffixes.remove(0));
        } else if let Some(prefix) = prefixes.pop() {
            core.push(prefix);
        }
    }

    let ending = if is_verbal(&core, &suffixes, rules) {
        rules.endings().infinitive.clone()
    } else {
        ending.to_string()
    };

    AnalyzedWord {
        original: original.to_string(),
        prefixes,
        core,
        suffixes,
        ending,
        sub_parts: Vec::new(),
        status,
    }
}

/// Derivations with a verb-forming suffix, or such a suffix as the root
fn is_verbal(core: &[String], suffixes: &[String], rules: &dyn MorphologyRules) -> bool {
    let by_suffix = suffixes
        .last()
        .is_some_and(|suffix| rules.is_verb_forming(suffix));
    let by_root = matches!(core, [root] if rules.is_verb_forming(root));
    by_suffix || by_root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reconstruct::CandidateOrigin;
    use crate::language::embedded_rules;

    fn chain(items: &[&str]) -> crate::domain::affix::AffixChain {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn candidate(prefixes: &[&str], core: &[&str], suffixes: &[&str]) -> Candidate {
        Candidate {
            prefixes: chain(prefixes),
            core: core.iter().map(|s| s.to_string()).collect(),
            suffixes: chain(suffixes),
            root_length: core.iter().map(|s| s.chars().count()).sum(),
            origin: CandidateOrigin::Reconstruction,
        }
    }

    #[test]
    fn test_verb_suffix_forces_infinitive() {
        let rules = embedded_rules();
        let word = assemble(
            "nekompreneble",
            "e",
            Some(candidate(&["ne"], &["kompren"], &["ebl"])),
            AffixReduction::default(),
            &*rules,
        );
        assert_eq!(word.ending, "i");
        assert_eq!(word.status, RootStatus::Validated);
    }

    #[test]
    fn test_verb_suffix_as_root_forces_infinitive() {
        let rules = embedded_rules();
        let word = assemble(
            "neind",
            "",
            Some(candidate(&["ne"], &["ind"], &[])),
            AffixReduction::default(),
            &*rules,
        );
        assert_eq!(word.ending, "i");
    }

    #[test]
    fn test_nominal_suffix_keeps_ending() {
        let rules = embedded_rules();
        let word = assemble(
            "lernejo",
            "o",
            Some(candidate(&[], &["lern"], &["ej"])),
            AffixReduction::default(),
            &*rules,
        );
        assert_eq!(word.ending, "o");
    }

    #[test]
    fn test_unresolved_fallback() {
        let rules = embedded_rules();
        let reduction = AffixReduction {
            remainder: "kspt".to_string(),
            prefixes: chain(&[]),
            suffixes: chain(&["ar"]),
        };
        let word = assemble("ksptaro", "o", None, reduction, &*rules);
        assert_eq!(word.status, RootStatus::Unresolved);
        assert_eq!(word.core, vec!["kspt"]);
        assert_eq!(word.suffixes, vec!["ar"]);
        assert_eq!(word.ending, "o");
    }

    #[test]
    fn test_empty_root_promotes_first_suffix() {
        let rules = embedded_rules();
        let reduction = AffixReduction {
            remainder: String::new(),
            prefixes: chain(&["mal"]),
            suffixes: chain(&["et", "ul"]),
        };
        let word = assemble("maletulo", "o", None, reduction, &*rules);
        assert_eq!(word.prefixes, vec!["mal"]);
        assert_eq!(word.core, vec!["et"]);
        assert_eq!(word.suffixes, vec!["ul"]);
        assert_eq!(word.stem(), "maletul");
    }

    #[test]
    fn test_empty_root_promotes_innermost_prefix() {
        let rules = embedded_rules();
        let reduction = AffixReduction {
            remainder: String::new(),
            prefixes: chain(&["mal", "ek"]),
            suffixes: chain(&[]),
        };
        let word = assemble("malek", "", None, reduction, &*rules);
        assert_eq!(word.prefixes, vec!["mal"]);
        assert_eq!(word.core, vec!["ek"]);
        assert_eq!(word.stem(), "malek");
    }
}
