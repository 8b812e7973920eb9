//! Morphological segmentation of Esperanto words
//!
//! A word is split into prefixes, one or more roots, suffixes and a
//! grammatical ending. Affixes are stripped greedily, then given back one
//! by one until a known root appears; compound roots are split with
//! optional linking vowels; competing readings are ranked by a
//! configurable scoring policy.
//!
//! # Architecture
//!
//! - **language**: affix tables, closed-class words and exceptions, loaded
//!   from TOML behind the [`MorphologyRules`] trait
//! - **dictionary**: the [`RootDictionary`] trait and file loaders
//! - **domain**: the segmentation pipeline, one module per step
//! - **analyzer**: the [`Analyzer`] entry points
//!
//! # Example
//!
//! ```rust
//! use morfo_core::{embedded_rules, Analyzer, RootLexicon, RootStatus};
//! use std::sync::Arc;
//!
//! let dictionary = RootLexicon::from_roots(["mult", "hom", "parol"]);
//! let analyzer = Analyzer::shared(embedded_rules(), Arc::new(dictionary));
//!
//! let word = analyzer.analyze("multehomoj");
//! assert_eq!(word.core, vec!["mult", "e", "hom"]);
//! assert_eq!(word.ending, "o");
//! assert_eq!(word.status, RootStatus::Validated);
//! assert_eq!(word.to_string(), "multehomoj = mult|e|hom+o");
//! ```

pub mod analyzer;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod language;
pub mod text;
pub mod types;

pub use analyzer::Analyzer;
pub use dictionary::{load_dictionary, RootDictionary, RootLexicon};
pub use domain::ScoringPolicy;
pub use error::{DomainError, Result};
pub use language::{
    embedded_rules, load_embedded, load_rules_file, ConfigurableMorphologyRules, MorphologyRules,
};
pub use types::{AnalyzedWord, RootStatus};
