use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific errors
///
/// Analysis never fails; these come from loading rules and dictionaries.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Rules parsed but failed validation
    #[error("Invalid morphology rules: {0}")]
    InvalidRules(String),

    /// Malformed dictionary content
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for fallible loading operations
pub type Result<T> = std::result::Result<T, DomainError>;
