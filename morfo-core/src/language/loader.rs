//! Morphology rules loader
//!
//! The Esperanto rules ship embedded in the library. They are parsed once
//! and shared; external rule files are parsed on every call.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::language::runtime::ConfigurableMorphologyRules;

/// Embedded Esperanto rules, as TOML
pub const EMBEDDED_RULES: &str = include_str!("../../configs/esperanto.toml");

static EMBEDDED: OnceLock<Arc<ConfigurableMorphologyRules>> = OnceLock::new();

/// Parse the embedded rules into a fresh instance
pub fn load_embedded() -> Result<ConfigurableMorphologyRules> {
    ConfigurableMorphologyRules::from_toml_str(EMBEDDED_RULES)
}

/// Shared instance of the embedded rules
pub fn embedded_rules() -> Arc<ConfigurableMorphologyRules> {
    EMBEDDED
        .get_or_init(|| {
            Arc::new(load_embedded().expect("Failed to load embedded morphology rules"))
        })
        .clone()
}

/// Load rules from an external TOML file
pub fn load_rules_file(path: &Path) -> Result<ConfigurableMorphologyRules> {
    ConfigurableMorphologyRules::from_file(path)
}
