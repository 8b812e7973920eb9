//! Validate command implementation

use anyhow::Result;
use clap::Args;
use morfo_core::ConfigurableMorphologyRules;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the morphology rules file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rules file: {}", self.rules.display());

        match ConfigurableMorphologyRules::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                println!("  Prefixes: {}", rules.prefixes().len());
                println!("  Suffixes: {}", rules.suffixes().len());
                println!("  Closed-class words: {}", rules.particles().len());
                println!("  Exception roots: {}", rules.exception_roots().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
