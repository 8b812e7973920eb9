//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use morfo_core::language::EMBEDDED_RULES;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rules template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, EMBEDDED_RULES)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the affix tables, closed-class words or scoring penalties");
        println!("2. Validate your rules:");
        println!("   morfo validate --rules {}", self.output.display());
        println!("3. Use them for analysis:");
        println!(
            "   morfo analyze -d roots.txt --rules {} WORD...",
            self.output.display()
        );

        Ok(())
    }
}
