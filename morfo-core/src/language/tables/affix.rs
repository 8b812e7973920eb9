//! Affix trie for longest-match lookup at either end of a word
//!
//! Prefixes (and prepositions used as prefixes) are matched from the
//! front, suffixes from the back. Suffixes are stored reversed so both
//! directions walk the trie forward.

use std::collections::HashMap;

use crate::language::config::AffixEntry;

/// Which end of the word the trie matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Leading,
    Trailing,
}

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Entry index if an affix ends here
    entry: Option<u32>,
}

/// Affix table with tags and longest-match lookup
#[derive(Debug, Clone)]
pub struct AffixTrie {
    nodes: Vec<TrieNode>,
    entries: Vec<AffixEntry>,
    anchor: Anchor,
}

impl AffixTrie {
    /// Create empty trie
    pub fn new(anchor: Anchor) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            entries: Vec::new(),
            anchor,
        }
    }

    /// Build from ordered configuration entries
    pub fn from_entries(entries: &[AffixEntry], anchor: Anchor) -> Self {
        let mut trie = Self::new(anchor);
        for entry in entries {
            trie.insert(entry.clone());
        }
        trie
    }

    /// Build from bare words with an empty tag
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a String>, anchor: Anchor) -> Self {
        let mut trie = Self::new(anchor);
        for word in words {
            trie.insert(AffixEntry {
                affix: word.clone(),
                tag: String::new(),
            });
        }
        trie
    }

    /// Insert an affix. The first insertion of a string wins.
    pub fn insert(&mut self, entry: AffixEntry) {
        let mut current_idx = 0u32;

        for ch in self.walk_order(&entry.affix) {
            let node = &self.nodes[current_idx as usize];
            current_idx = if let Some(&child_idx) = node.children.get(&ch) {
                child_idx
            } else {
                let new_idx = self.nodes.len() as u32;
                self.nodes.push(TrieNode::default());
                self.nodes[current_idx as usize]
                    .children
                    .insert(ch, new_idx);
                new_idx
            };
        }

        let node = &mut self.nodes[current_idx as usize];
        if node.entry.is_none() {
            node.entry = Some(self.entries.len() as u32);
            self.entries.push(entry);
        }
    }

    fn walk_order<'w>(&self, word: &'w str) -> Box<dyn Iterator<Item = char> + 'w> {
        match self.anchor {
            Anchor::Leading => Box::new(word.chars()),
            Anchor::Trailing => Box::new(word.chars().rev()),
        }
    }

    /// Longest affix found at the anchored end of `word`
    pub fn longest_match(&self, word: &str) -> Option<&AffixEntry> {
        self.find_longest(word, false)
    }

    /// Longest affix that leaves at least one character of `word`
    pub fn longest_proper_match(&self, word: &str) -> Option<&AffixEntry> {
        self.find_longest(word, true)
    }

    fn find_longest(&self, word: &str, proper: bool) -> Option<&AffixEntry> {
        let total = word.chars().count();
        let mut current_idx = 0u32;
        let mut best = None;

        for (depth, ch) in self.walk_order(word).enumerate() {
            match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            let matched = depth + 1;
            if proper && matched >= total {
                break;
            }
            if let Some(entry) = self.nodes[current_idx as usize].entry {
                best = Some(entry);
            }
        }

        best.map(|idx| &self.entries[idx as usize])
    }

    /// Whether `affix` is in the table as a whole string
    pub fn contains(&self, affix: &str) -> bool {
        self.tag(affix).is_some()
    }

    /// Grammatical tag of an affix
    pub fn tag(&self, affix: &str) -> Option<&str> {
        let mut current_idx = 0u32;
        for ch in self.walk_order(affix) {
            current_idx = *self.nodes[current_idx as usize].children.get(&ch)?;
        }
        self.nodes[current_idx as usize]
            .entry
            .map(|idx| self.entries[idx as usize].tag.as_str())
    }

    /// Entries in configuration order
    pub fn entries(&self) -> &[AffixEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
