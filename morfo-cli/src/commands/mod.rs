//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::rules_source::RulesSource;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment words into prefixes, roots, suffixes and endings
    Analyze(analyze::AnalyzeArgs),

    /// Validate a morphology rules file
    Validate(validate::ValidateArgs),

    /// Write the built-in rules to a file as an editable template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List prefixes and suffixes with their tags
    Affixes {
        /// Morphology rules file (default: built-in Esperanto rules)
        #[arg(short, long, value_name = "FILE")]
        rules: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in analyze::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!(
                            "  {:<10} {}",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        );
                    }
                }
            }
            ListCommands::Affixes { rules } => {
                let rules = RulesSource::from_path(rules.clone()).load()?;
                println!("Prefixes:");
                for entry in rules.prefixes().entries() {
                    println!("  {:<6} {}", entry.affix, entry.tag);
                }
                println!("Suffixes:");
                for entry in rules.suffixes().entries() {
                    println!("  {:<6} {}", entry.affix, entry.tag);
                }
            }
        }
        Ok(())
    }
}
