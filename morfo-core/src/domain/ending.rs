//! Ending normalization
//!
//! Strips plural and accusative markers, rewrites finite verb endings to
//! the infinitive and splits off the final grammatical vowel. Input is
//! expected to be lowercase.

use crate::language::MorphologyRules;

/// A word split into stem and grammatical ending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    pub stem: String,
    /// Empty when the word has no separable ending
    pub ending: String,
}

impl NormalizedWord {
    /// Stem and ending rejoined
    pub fn form(&self) -> String {
        format!("{}{}", self.stem, self.ending)
    }
}

/// Run all normalization steps on a lowercase word
pub fn normalize(word: &str, rules: &dyn MorphologyRules) -> NormalizedWord {
    let word = strip_plural_accusative(word, rules);
    let word = rewrite_verb_ending(word, rules);
    let (stem, ending) = split_ending(&word, rules);
    NormalizedWord {
        stem: stem.to_string(),
        ending: ending.to_string(),
    }
}

/// Remove a trailing accusative and/or plural marker
///
/// Particles that happen to end in a marker letter are left alone, and
/// the word is never stripped to nothing.
pub fn strip_plural_accusative<'w>(word: &'w str, rules: &dyn MorphologyRules) -> &'w str {
    if rules.is_particle(word) {
        return word;
    }

    let endings = rules.endings();
    let mut stripped = word;
    for marker in [endings.accusative, endings.plural] {
        if let Some(rest) = stripped.strip_suffix(marker) {
            if !rest.is_empty() {
                stripped = rest;
            }
        }
    }
    stripped
}

/// Replace a tense or volitive ending with the infinitive marker
pub fn rewrite_verb_ending(word: &str, rules: &dyn MorphologyRules) -> String {
    if rules.is_particle(word) {
        return word.to_string();
    }

    let endings = rules.endings();
    let verb_endings = endings
        .tense
        .iter()
        .chain(std::iter::once(&endings.volitive));
    for ending in verb_endings {
        if let Some(stem) = word.strip_suffix(ending.as_str()) {
            if !stem.is_empty() {
                return format!("{stem}{}", endings.infinitive);
            }
        }
    }
    word.to_string()
}

/// Split off the final ending vowel
pub fn split_ending<'w>(word: &'w str, rules: &dyn MorphologyRules) -> (&'w str, &'w str) {
    let mut chars = word.char_indices();
    let Some((last_idx, last)) = chars.next_back() else {
        return (word, "");
    };

    let long_enough = chars.next().is_some();
    if long_enough && rules.endings().vowels.contains(&last) && !rules.is_particle(word) {
        (&word[..last_idx], &word[last_idx..])
    } else {
        (word, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::embedded_rules;

    fn norm(word: &str) -> (String, String) {
        let rules = embedded_rules();
        let normalized = normalize(word, &*rules);
        (normalized.stem, normalized.ending)
    }

    #[test]
    fn test_plural_and_accusative() {
        let expected = ("kat".to_string(), "o".to_string());
        assert_eq!(norm("kato"), expected);
        assert_eq!(norm("katoj"), expected);
        assert_eq!(norm("katon"), expected);
        assert_eq!(norm("katojn"), expected);
    }

    #[test]
    fn test_particles_keep_marker_letters() {
        let rules = embedded_rules();
        assert_eq!(strip_plural_accusative("kun", &*rules), "kun");
        assert_eq!(strip_plural_accusative("jen", &*rules), "jen");
        assert_eq!(strip_plural_accusative("kiujn", &*rules), "kiu");
        assert_eq!(norm("nun"), ("nun".to_string(), String::new()));
    }

    #[test]
    fn test_verb_endings_become_infinitive() {
        assert_eq!(norm("estas"), ("est".to_string(), "i".to_string()));
        assert_eq!(norm("diris"), ("dir".to_string(), "i".to_string()));
        assert_eq!(norm("parolos"), ("parol".to_string(), "i".to_string()));
        assert_eq!(norm("parolus"), ("parol".to_string(), "i".to_string()));
        assert_eq!(norm("diru"), ("dir".to_string(), "i".to_string()));
    }

    #[test]
    fn test_particles_keep_vowel_endings() {
        assert_eq!(norm("plus"), ("plus".to_string(), String::new()));
        assert_eq!(norm("kio"), ("kio".to_string(), String::new()));
        assert_eq!(norm("ĉu"), ("ĉu".to_string(), String::new()));
    }

    #[test]
    fn test_particle_stem_after_split() {
        assert_eq!(norm("mia"), ("mi".to_string(), "a".to_string()));
        assert_eq!(norm("unua"), ("unu".to_string(), "a".to_string()));
    }

    #[test]
    fn test_short_words_keep_empty_ending() {
        assert_eq!(norm("o"), ("o".to_string(), String::new()));
        assert_eq!(norm("n"), ("n".to_string(), String::new()));
        assert_eq!(norm("jn"), ("j".to_string(), String::new()));
        assert_eq!(norm("as"), ("as".to_string(), String::new()));
        assert_eq!(norm(""), (String::new(), String::new()));
    }

    #[test]
    fn test_no_ending() {
        assert_eq!(norm("bluokul"), ("bluokul".to_string(), String::new()));
        assert_eq!(norm("malantaŭ"), ("malantaŭ".to_string(), String::new()));
    }

    #[test]
    fn test_form_rejoins() {
        let rules = embedded_rules();
        assert_eq!(normalize("ĉielojn", &*rules).form(), "ĉielo");
    }
}
