//! Root validation against the dictionary and the rule exceptions

use crate::dictionary::RootDictionary;
use crate::language::MorphologyRules;

/// Decides whether a string can stand as a root
#[derive(Clone, Copy)]
pub struct RootValidator<'a> {
    dictionary: &'a dyn RootDictionary,
    rules: &'a dyn MorphologyRules,
}

impl<'a> RootValidator<'a> {
    pub fn new(dictionary: &'a dyn RootDictionary, rules: &'a dyn MorphologyRules) -> Self {
        Self { dictionary, rules }
    }

    pub fn rules(&self) -> &'a dyn MorphologyRules {
        self.rules
    }

    /// Known root, exception root or standalone particle
    pub fn is_valid(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && (self.dictionary.contains(candidate)
                || self.rules.is_exception_root(candidate)
                || self.rules.is_particle(candidate))
    }

    /// Valid root that may also be one segment of a compound
    ///
    /// Affixes and prepositions are excluded, as are segments shorter
    /// than the configured minimum root length.
    pub fn is_compound_segment(&self, segment: &str) -> bool {
        segment.chars().count() >= self.rules.compound_limits().min_root_length
            && !self.rules.is_affix(segment)
            && !self.rules.is_preposition(segment)
            && self.is_valid(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::RootLexicon;
    use crate::language::embedded_rules;

    #[test]
    fn test_validity_sources() {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(["parol", "ig"]);
        let validator = RootValidator::new(&dictionary, &*rules);

        assert!(validator.is_valid("parol"));
        assert!(validator.is_valid("eksist"));
        assert!(validator.is_valid("antaŭ"));
        assert!(!validator.is_valid("trankv"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_compound_segments() {
        let rules = embedded_rules();
        let dictionary = RootLexicon::from_roots(["blu", "okul", "ig", "x"]);
        let validator = RootValidator::new(&dictionary, &*rules);

        assert!(validator.is_compound_segment("okul"));
        assert!(validator.is_compound_segment("ok"));
        assert!(!validator.is_compound_segment("ig"));
        assert!(!validator.is_compound_segment("en"));
        assert!(!validator.is_compound_segment("x"));
        assert!(validator.is_valid("x"));
    }
}
