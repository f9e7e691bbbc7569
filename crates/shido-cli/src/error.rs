//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classifier error
    #[error(transparent)]
    Classifier(#[from] shido_classifier::ClassifierError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Some batch records could not be classified
    #[error("{failed} of {total} record(s) could not be classified")]
    BatchFailed {
        /// Records rejected
        failed: usize,
        /// Records read
        total: usize,
    },
}
