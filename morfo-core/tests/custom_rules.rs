//! Rule sets other than the embedded default

mod common;

use std::sync::Arc;

use common::ROOTS;
use morfo_core::language::EMBEDDED_RULES;
use morfo_core::{
    load_embedded, load_rules_file, Analyzer, ConfigurableMorphologyRules, DomainError,
    RootLexicon, ScoringPolicy,
};

fn analyzer_with(rules: ConfigurableMorphologyRules) -> Analyzer {
    Analyzer::shared(Arc::new(rules), Arc::new(RootLexicon::from_roots(ROOTS)))
}

#[test]
fn test_default_prefers_compound_on_stem() {
    let analyzer = analyzer_with(load_embedded().unwrap());
    let word = analyzer.analyze("bluokulo");
    assert_eq!(word.core, vec!["blu", "okul"]);
    assert!(word.suffixes.is_empty());
}

#[test]
fn test_scoring_override_changes_preference() {
    let policy = ScoringPolicy {
        compound_on_stem_penalty: 5,
        ..ScoringPolicy::default()
    };
    let rules = load_embedded().unwrap().with_scoring(policy).unwrap();
    let word = analyzer_with(rules).analyze("bluokulo");
    assert_eq!(word.core, vec!["blu", "ok"]);
    assert_eq!(word.suffixes, vec!["ul"]);
}

#[test]
fn test_invalid_scoring_override_is_rejected() {
    let policy = ScoringPolicy {
        negated_suffix_root_penalty: 200,
        ..ScoringPolicy::default()
    };
    let err = load_embedded().unwrap().with_scoring(policy).unwrap_err();
    assert!(matches!(err, DomainError::InvalidRules(_)));
}

#[test]
fn test_rules_file_with_custom_scoring() {
    let content = EMBEDDED_RULES.replace(
        "compound_on_stem_penalty = 1",
        "compound_on_stem_penalty = 5",
    );
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, content).unwrap();

    let rules = load_rules_file(&path).unwrap();
    assert_eq!(rules.code(), "eo");
    let word = analyzer_with(rules).analyze("bluokulo");
    assert_eq!(word.core, vec!["blu", "ok"]);
}

#[test]
fn test_rules_file_without_scoring_uses_defaults() {
    let end = EMBEDDED_RULES.find("[scoring]").unwrap();
    let rules = ConfigurableMorphologyRules::from_toml_str(&EMBEDDED_RULES[..end]).unwrap();
    let word = analyzer_with(rules).analyze("bluokulo");
    assert_eq!(word.core, vec!["blu", "okul"]);
}

#[test]
fn test_malformed_rules_file() {
    let err = ConfigurableMorphologyRules::from_toml_str("[metadata\ncode = ").unwrap_err();
    assert!(matches!(err, DomainError::ConfigurationError(_)));
}

#[test]
fn test_rules_referencing_unknown_suffix() {
    let content = EMBEDDED_RULES.replace(
        "root_suffixes = [\"ig\", \"ul\"]",
        "root_suffixes = [\"ig\", \"xyz\"]",
    );
    let err = ConfigurableMorphologyRules::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, DomainError::InvalidRules(_)));
}

#[test]
fn test_exception_roots_keep_compounds_whole() {
    let content = EMBEDDED_RULES
        .replace(
            "ends_in_eg = [\"releg\", \"voĉleg\"]",
            "ends_in_eg = [\"laŭtleg\", \"releg\", \"voĉleg\"]",
        )
        .replace("\"alkohol-brul\", \"bunsen-brul\"", "\"alkohol-brul\", \"bluokul\", \"bunsen-brul\"");
    let rules = ConfigurableMorphologyRules::from_toml_str(&content).unwrap();
    let analyzer = analyzer_with(rules);

    assert_eq!(analyzer.analyze("bluokulo").core, vec!["bluokul"]);
    assert_eq!(analyzer.analyze("laŭtlegi").core, vec!["laŭtleg"]);

    let default = analyzer_with(load_embedded().unwrap());
    assert_eq!(default.analyze("bluokulo").core, vec!["blu", "okul"]);
    assert_eq!(default.analyze("laŭtlegi").core, vec!["laŭt", "leg"]);
}
