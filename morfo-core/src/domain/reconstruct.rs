//! Reconstruction search
//!
//! Starting from the maximal reduction, every combination of giving back
//! the innermost `k` prefixes and the innermost `m` suffixes to the
//! remainder is tried. Each combination that forms a valid root is a
//! candidate segmentation.
//!
//! A preposition at the start of the stem is tried as an extra outermost
//! prefix. Its candidates are kept only when one of them validates with
//! the preposition still separated.

use tracing::trace;

use crate::domain::affix::{strip_affixes, AffixChain, AffixReduction};
use crate::domain::validator::RootValidator;

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    /// Affixes given back to the remainder
    Reconstruction,
    /// Compound split of the remainder after maximal stripping
    CompoundAfterStripping,
    /// Compound split of the whole stem
    CompoundOnStem,
}

/// One possible segmentation of a stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Outermost first
    pub prefixes: AffixChain,
    /// One root, or roots joined by linking vowels
    pub core: Vec<String>,
    /// Innermost first
    pub suffixes: AffixChain,
    /// Characters in validated roots
    pub root_length: usize,
    pub origin: CandidateOrigin,
}

/// Every valid give-back of a reduction
///
/// Candidates come out with fewer suffixes given back first, then fewer
/// prefixes.
pub fn reconstruct(reduction: &AffixReduction, validator: &RootValidator<'_>) -> Vec<Candidate> {
    let p = reduction.prefixes.len();
    let s = reduction.suffixes.len();
    let mut candidates = Vec::new();

    for m in 0..=s {
        for k in 0..=p {
            let keep = p - k;
            let mut root = reduction.prefixes[keep..].concat();
            root.push_str(&reduction.remainder);
            root.push_str(&reduction.suffixes[..m].concat());

            if validator.is_valid(&root) {
                candidates.push(Candidate {
                    prefixes: reduction.prefixes[..keep].iter().cloned().collect(),
                    root_length: root.chars().count(),
                    core: vec![root],
                    suffixes: reduction.suffixes[m..].iter().cloned().collect(),
                    origin: CandidateOrigin::Reconstruction,
                });
            }
        }
    }

    candidates
}

/// Candidates with the leading preposition kept as a prefix
///
/// Empty when the stem has no leading preposition, or when no give-back
/// validates without also giving the preposition back.
pub fn preposition_candidates(stem: &str, validator: &RootValidator<'_>) -> Vec<Candidate> {
    let rules = validator.rules();
    let Some(preposition) = rules.longest_preposition(stem) else {
        return Vec::new();
    };

    let mut reduction = strip_affixes(&stem[preposition.len()..], rules);
    reduction.prefixes.insert(0, preposition.to_string());

    let candidates: Vec<Candidate> = reconstruct(&reduction, validator)
        .into_iter()
        .filter(|candidate| !candidate.prefixes.is_empty())
        .collect();

    trace!(
        stem,
        preposition,
        kept = candidates.len(),
        "preposition pass"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::RootLexicon;
    use crate::language::embedded_rules;

    const ROOTS: &[&str] = &[
        "parol", "kompren", "ekvilibr", "dir", "sum", "dezert", "aĉet", "aŭtor", "aŭtoritat",
        "trankvil", "ebl", "ind", "ig", "ul",
    ];

    fn search(stem: &str) -> Vec<(Vec<String>, Vec<String>, Vec<String>)> {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(ROOTS);
        let validator = RootValidator::new(&dictionary, &*rules);
        let reduction = strip_affixes(stem, &*rules);
        reconstruct(&reduction, &validator)
            .into_iter()
            .map(|c| (c.prefixes.to_vec(), c.core, c.suffixes.to_vec()))
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remainder_is_root() {
        assert_eq!(
            search("nekomprenebl"),
            vec![(strings(&["ne"]), strings(&["kompren"]), strings(&["ebl"]))]
        );
    }

    #[test]
    fn test_prefix_given_back() {
        // ek+vilibr fails; ekvilibr is the root
        assert_eq!(
            search("ekvilibrigit"),
            vec![(vec![], strings(&["ekvilibr"]), strings(&["ig", "it"]))]
        );
    }

    #[test]
    fn test_suffix_given_back() {
        assert_eq!(
            search("maltrankvil"),
            vec![(strings(&["mal"]), strings(&["trankvil"]), vec![])]
        );
    }

    #[test]
    fn test_all_valid_give_backs_listed() {
        let found = search("aŭtoritat");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, strings(&["aŭtor"]));
        assert_eq!(found[1].1, strings(&["aŭtoritat"]));
    }

    #[test]
    fn test_negation_readings() {
        let found = search("neind");
        assert_eq!(
            found,
            vec![
                (vec![], strings(&["ne"]), strings(&["ind"])),
                (strings(&["ne"]), strings(&["ind"]), vec![]),
            ]
        );
    }

    #[test]
    fn test_nothing_validates() {
        assert!(search("ksp").is_empty());
    }

    #[test]
    fn test_preposition_kept_when_root_validates() {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(ROOTS);
        let validator = RootValidator::new(&dictionary, &*rules);

        let found = preposition_candidates("ensumig", &validator);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].prefixes.to_vec(), strings(&["en"]));
        assert_eq!(found[0].core, strings(&["sum"]));
        assert_eq!(found[0].suffixes.to_vec(), strings(&["ig"]));
    }

    #[test]
    fn test_preposition_dropped_when_only_giveback_validates() {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(ROOTS);
        let validator = RootValidator::new(&dictionary, &*rules);

        assert!(preposition_candidates("dezert", &validator).is_empty());
        assert!(preposition_candidates("parol", &validator).is_empty());
    }

    #[test]
    fn test_root_length_in_chars() {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(ROOTS);
        let validator = RootValidator::new(&dictionary, &*rules);
        let reduction = strip_affixes("aĉet", &*rules);
        let found = reconstruct(&reduction, &validator);
        let full = found.iter().find(|c| c.core == ["aĉet"]).unwrap();
        assert_eq!(full.root_length, 4);
    }
}
