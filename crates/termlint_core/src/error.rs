//! Linter error types.

use thiserror::Error;

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

impl From<termlint_rule::ConfigError> for LinterError {
    fn from(err: termlint_rule::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<termlint_parser::ParseError> for LinterError {
    fn from(err: termlint_parser::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
