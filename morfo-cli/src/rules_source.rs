//! Morphology rules source management for CLI

use anyhow::Result;
use morfo_core::{embedded_rules, load_rules_file, ConfigurableMorphologyRules};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::CliError;

/// Source of morphology rules
#[derive(Debug, Clone)]
pub enum RulesSource {
    /// Rules compiled into the binary
    BuiltIn,
    /// External TOML rules file
    External(PathBuf),
}

impl RulesSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(RulesSource::BuiltIn, RulesSource::External)
    }

    /// Get the display name for the rules source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::BuiltIn => "Built-in: Esperanto".to_string(),
            RulesSource::External(path) => format!("External: {}", path.display()),
        }
    }

    pub fn load(&self) -> Result<Arc<ConfigurableMorphologyRules>> {
        match self {
            RulesSource::BuiltIn => Ok(embedded_rules()),
            RulesSource::External(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let rules = load_rules_file(path)
                    .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
                Ok(Arc::new(rules))
            }
        }
    }
}
