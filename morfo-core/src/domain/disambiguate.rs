//! Candidate collection and selection

use tracing::trace;

use crate::domain::affix::{strip_affixes, AffixChain, AffixReduction};
use crate::domain::compound::split_compound;
use crate::domain::reconstruct::{preposition_candidates, reconstruct, Candidate, CandidateOrigin};
use crate::domain::scoring::score;
use crate::domain::validator::RootValidator;

/// All segmentations found for a stem
#[derive(Debug, Clone)]
pub struct CandidateSet {
    /// Maximal reduction without a preposition, used when nothing validates
    pub reduction: AffixReduction,
    /// In generation order
    pub candidates: Vec<Candidate>,
}

/// Collect every candidate segmentation of `stem`
///
/// Generation order is part of the tie-break: preposition candidates,
/// plain give-backs, the compound left after stripping, then the
/// compound on the whole stem.
pub fn collect_candidates(stem: &str, validator: &RootValidator<'_>) -> CandidateSet {
    let rules = validator.rules();
    let reduction = strip_affixes(stem, rules);
    trace!(
        stem,
        prefixes = ?reduction.prefixes,
        remainder = %reduction.remainder,
        suffixes = ?reduction.suffixes,
        "maximal reduction"
    );

    let mut candidates = preposition_candidates(stem, validator);
    candidates.extend(reconstruct(&reduction, validator));

    if let Some(split) = split_compound(&reduction.remainder, validator) {
        candidates.push(Candidate {
            prefixes: reduction.prefixes.clone(),
            core: split.parts,
            suffixes: reduction.suffixes.clone(),
            root_length: split.root_length,
            origin: CandidateOrigin::CompoundAfterStripping,
        });
    }

    if let Some(split) = split_compound(stem, validator) {
        candidates.push(Candidate {
            prefixes: AffixChain::new(),
            core: split.parts,
            suffixes: AffixChain::new(),
            root_length: split.root_length,
            origin: CandidateOrigin::CompoundOnStem,
        });
    }

    CandidateSet {
        reduction,
        candidates,
    }
}

/// Best candidate; the first generated wins remaining ties
pub fn select(candidates: Vec<Candidate>, validator: &RootValidator<'_>) -> Option<Candidate> {
    let rules = validator.rules();
    candidates
        .into_iter()
        .min_by_key(|candidate| score(candidate, rules).rank_key())
}
