//! Language-specific morphology rules
//!
//! Affix tables, closed-class words and exceptions are data, loaded from
//! TOML and compiled into lookup tables behind the [`MorphologyRules`]
//! trait.

pub mod config;
pub mod interface;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::MorphologyConfig;
pub use interface::{CompoundLimits, MorphologyRules};
pub use loader::{embedded_rules, load_embedded, load_rules_file, EMBEDDED_RULES};
pub use runtime::ConfigurableMorphologyRules;
