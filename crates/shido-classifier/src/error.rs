//! Classifier error types

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur during classification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// A field failed the input contract
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        /// Offending field
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// Criteria configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClassifierError {
    /// Build an `InvalidInput` error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
