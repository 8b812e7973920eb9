//! Closed word lists for O(1) membership tests
//!
//! Used for closed-class particles and exception roots, both of which
//! are configured as named categories of words.

use std::collections::HashMap;

/// Set of words, each remembering the category it was listed under
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    /// Word -> category name
    words: HashMap<String, String>,
    /// Minimum word length in bytes (fast reject)
    min_length: usize,
    /// Maximum word length in bytes (fast reject)
    max_length: usize,
}

impl WordSet {
    /// Create from categorized word lists
    ///
    /// A word listed under several categories keeps the alphabetically
    /// first category name.
    pub fn from_categories<'a>(
        categories: impl IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    ) -> Self {
        let mut sorted: Vec<_> = categories.into_iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut set = Self::default();
        for (category, words) in sorted {
            for word in words {
                set.insert(word, category);
            }
        }
        set
    }

    /// Add a word unless it is already present
    pub fn insert(&mut self, word: &str, category: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.words.contains_key(&word) {
            return;
        }

        let len = word.len();
        if self.words.is_empty() {
            self.min_length = len;
            self.max_length = len;
        } else {
            self.min_length = self.min_length.min(len);
            self.max_length = self.max_length.max(len);
        }
        self.words.insert(word, category.to_string());
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.len() < self.min_length || word.len() > self.max_length {
            return false;
        }
        self.words.contains_key(word)
    }

    /// Category a word was listed under
    pub fn category_of(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// All words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
