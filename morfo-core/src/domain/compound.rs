//! Compound splitting
//!
//! Partitions a string into two or more roots, optionally joined by a
//! single linking vowel at the end of a left-hand segment. The search runs
//! over suffixes of the string from the right: the best cover of each
//! suffix is computed once and reused by every split that ends there, so
//! the whole split costs O(n²) validator calls.

use crate::domain::validator::RootValidator;

/// A compound split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSplit {
    /// Roots with linking vowels between them
    pub parts: Vec<String>,
    /// Characters in roots, linking vowels excluded
    pub root_length: usize,
}

impl CompoundSplit {
    fn single(segment: &str, length: usize) -> Self {
        Self {
            parts: vec![segment.to_string()],
            root_length: length,
        }
    }

    /// Prepend a left root (and its linking vowel) to a cover of the rest
    fn prepend(left: &str, left_length: usize, link: Option<&str>, right: &CompoundSplit) -> Self {
        let mut parts = Vec::with_capacity(right.parts.len() + 2);
        parts.push(left.to_string());
        if let Some(link) = link {
            parts.push(link.to_string());
        }
        parts.extend(right.parts.iter().cloned());
        Self {
            parts,
            root_length: left_length + right.root_length,
        }
    }

    /// Whether `self` should replace `other` as the best split
    fn beats(&self, other: &CompoundSplit) -> bool {
        self.root_length > other.root_length
            || (self.root_length == other.root_length && self.parts.len() < other.parts.len())
    }
}

/// Best split of `word` into at least two roots
pub fn split_compound(word: &str, validator: &RootValidator<'_>) -> Option<CompoundSplit> {
    let limits = validator.rules().compound_limits();

    // Byte offset of every char boundary, plus the end
    let mut bounds: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    let n = bounds.len();
    if n < limits.min_word_length {
        return None;
    }
    bounds.push(word.len());

    // covers[i]: best cover of word[bounds[i]..] by one or more roots
    let mut covers: Vec<Option<CompoundSplit>> = vec![None; n + 1];
    for start in (1..n).rev() {
        let segment = &word[bounds[start]..];
        // A valid segment stays whole: splitting it cannot add root length
        let cover = if validator.is_compound_segment(segment) {
            Some(CompoundSplit::single(segment, n - start))
        } else {
            best_split(word, &bounds, start, &covers, validator)
        };
        covers[start] = cover;
    }

    best_split(word, &bounds, 0, &covers, validator)
}

/// Best multi-root cover of `word[bounds[start]..]`
fn best_split(
    word: &str,
    bounds: &[usize],
    start: usize,
    covers: &[Option<CompoundSplit>],
    validator: &RootValidator<'_>,
) -> Option<CompoundSplit> {
    let n = bounds.len() - 1;
    let min_root = validator.rules().compound_limits().min_root_length;
    let mut best: Option<CompoundSplit> = None;

    let mut consider = |candidate: CompoundSplit| {
        if best.as_ref().map_or(true, |current| candidate.beats(current)) {
            best = Some(candidate);
        }
    };

    // `end` is where the right-hand cover begins
    for end in (start + min_root)..=n.saturating_sub(min_root) {
        let Some(right) = &covers[end] else {
            continue;
        };

        let left = &word[bounds[start]..bounds[end]];
        if validator.is_compound_segment(left) {
            consider(CompoundSplit::prepend(left, end - start, None, right));
        }

        // Same split with the last char of the left side as a linking vowel
        let link_at = end - 1;
        if link_at - start < min_root {
            continue;
        }
        let link = &word[bounds[link_at]..bounds[end]];
        let linked = link
            .chars()
            .next()
            .is_some_and(|ch| validator.rules().is_linking_vowel(ch));
        let left = &word[bounds[start]..bounds[link_at]];
        if linked && validator.is_compound_segment(left) {
            consider(CompoundSplit::prepend(left, link_at - start, Some(link), right));
        }
    }

    best
}
