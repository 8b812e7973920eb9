//! Root dictionary abstraction
//!
//! The analyzer only needs membership tests. Definitions are carried for
//! collaborators that build glosses on top of an analysis.

pub mod loader;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub use loader::{load_dictionary, parse_json, parse_plain_text};

/// Read-only set of known roots
pub trait RootDictionary: Send + Sync {
    fn contains(&self, root: &str) -> bool;

    /// Definition of a root, if the dictionary carries one
    fn definition(&self, _root: &str) -> Option<&str> {
        None
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RootDictionary for HashSet<String> {
    fn contains(&self, root: &str) -> bool {
        HashSet::contains(self, root)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl RootDictionary for HashMap<String, String> {
    fn contains(&self, root: &str) -> bool {
        self.contains_key(root)
    }

    fn definition(&self, root: &str) -> Option<&str> {
        self.get(root).map(String::as_str)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<D: RootDictionary + ?Sized> RootDictionary for Arc<D> {
    fn contains(&self, root: &str) -> bool {
        (**self).contains(root)
    }

    fn definition(&self, root: &str) -> Option<&str> {
        (**self).definition(root)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Roots with optional definitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootLexicon {
    entries: HashMap<String, Option<String>>,
}

impl RootLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from bare roots
    pub fn from_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for root in roots {
            lexicon.insert(root.as_ref(), None);
        }
        lexicon
    }

    /// Add a root. Keys are trimmed and lowercased; blank keys are ignored.
    /// A later definition replaces an earlier one.
    pub fn insert(&mut self, root: &str, definition: Option<String>) {
        let key = root.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        let entry = self.entries.entry(key).or_insert(None);
        if definition.is_some() {
            *entry = definition;
        }
    }

    /// Roots in no particular order
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl RootDictionary for RootLexicon {
    fn contains(&self, root: &str) -> bool {
        self.entries.contains_key(root)
    }

    fn definition(&self, root: &str) -> Option<&str> {
        self.entries.get(root)?.as_deref()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RootLexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_roots(iter)
    }
}
