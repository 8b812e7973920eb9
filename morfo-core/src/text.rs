//! Word extraction from running text

use std::sync::OnceLock;

use regex::Regex;

fn edge_punctuation() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[\p{P}\p{S}]+|[\p{P}\p{S}]+$").expect("Invalid edge punctuation pattern")
    })
}

/// Whitespace-separated words with surrounding punctuation removed
///
/// Inner punctuation is kept, so hyphenated words and abbreviations such
/// as `d-ro` survive intact.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| edge_punctuation().replace_all(token, "").into_owned())
        .filter(|word| !word.is_empty())
        .collect()
}
