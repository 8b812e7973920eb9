//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use morfo_core::{embedded_rules, AnalyzedWord, Analyzer, RootLexicon};

/// Roots used across the integration tests
pub const ROOTS: &[&str] = &[
    "aer", "aĉet", "aŭtoritat", "blank", "blu", "bon", "dezert", "dik", "dir", "disciplin",
    "ekvilibr", "est", "farb", "fingr", "gej", "hejm", "hom", "humor", "hund", "jar", "kat",
    "kompren", "kost", "last", "laŭt", "leg", "lern", "mult", "nebul", "neg", "nigr", "okul",
    "pag", "parol", "pov", "pugn", "puŝ", "ruĝ", "sum", "temp", "trankvil", "vapor", "ven",
    "ŝip",
    // Suffixes that are also roots
    "ebl", "em", "ig", "ind", "ul",
];

/// Roots on which no prefix, suffix or preposition can be stripped
pub const PLAIN_ROOTS: &[&str] = &[
    "dezert", "fingr", "hom", "humor", "hund", "kat", "kompren", "kost", "lern", "parol", "pugn",
    "vapor",
];

pub fn analyzer() -> Analyzer {
    Analyzer::shared(embedded_rules(), Arc::new(RootLexicon::from_roots(ROOTS)))
}

/// (prefixes, core, suffixes, ending) as borrowed strings
pub fn parts(word: &AnalyzedWord) -> (Vec<&str>, Vec<&str>, Vec<&str>, &str) {
    (
        word.prefixes.iter().map(String::as_str).collect(),
        word.core.iter().map(String::as_str).collect(),
        word.suffixes.iter().map(String::as_str).collect(),
        word.ending.as_str(),
    )
}
