//! Dictionary file loading
//!
//! Two formats are understood:
//! - JSON: an object mapping roots to definitions, or an array of roots
//! - plain text: one root per line, optionally followed by `:` or a tab
//!   and a definition; `#` starts a comment line

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{RootDictionary, RootLexicon};
use crate::error::{DomainError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum DictionaryFile {
    Definitions(BTreeMap<String, String>),
    Roots(Vec<String>),
}

/// Parse JSON dictionary content
pub fn parse_json(content: &str) -> Result<RootLexicon> {
    let file: DictionaryFile = serde_json::from_str(content).map_err(|e| {
        DomainError::Dictionary(format!(
            "expected an object of definitions or an array of roots: {e}"
        ))
    })?;

    let mut lexicon = RootLexicon::new();
    match file {
        DictionaryFile::Definitions(definitions) => {
            for (root, definition) in definitions {
                let definition = definition.trim();
                lexicon.insert(&root, (!definition.is_empty()).then(|| definition.to_string()));
            }
        }
        DictionaryFile::Roots(roots) => {
            for root in roots {
                lexicon.insert(&root, None);
            }
        }
    }
    Ok(lexicon)
}

/// Parse plain-text dictionary content
pub fn parse_plain_text(content: &str) -> RootLexicon {
    let mut lexicon = RootLexicon::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once([':', '\t']) {
            Some((root, definition)) => {
                let definition = definition.trim();
                lexicon.insert(root, (!definition.is_empty()).then(|| definition.to_string()));
            }
            None => lexicon.insert(line, None),
        }
    }

    lexicon
}

/// Load a dictionary file, choosing the format by extension
pub fn load_dictionary(path: &Path) -> Result<RootLexicon> {
    let content = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let lexicon = if is_json {
        parse_json(&content)?
    } else {
        parse_plain_text(&content)
    };

    debug!(path = %path.display(), roots = lexicon.len(), "loaded dictionary");
    Ok(lexicon)
}
