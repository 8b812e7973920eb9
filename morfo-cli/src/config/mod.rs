//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct AnalysisConfig {
    /// Root dictionary file
    pub dictionary: Option<PathBuf>,

    /// Morphology rules file (default: built-in Esperanto rules)
    pub rules: Option<PathBuf>,

    /// Headword list used for verification
    pub headwords: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.analysis.dictionary.is_none());
        assert_eq!(config.output.format, "text");
        assert!(config.output.pretty);
        assert_eq!(config.performance.threads, 0);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("morfo.toml");
        fs::write(
            &path,
            "[analysis]\ndictionary = \"radikoj.txt\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(
            config.analysis.dictionary.as_deref(),
            Some(Path::new("radikoj.txt"))
        );
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
        assert_eq!(config.performance.threads, 0);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("morfo.toml");
        fs::write(&path, "[output\nformat = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
