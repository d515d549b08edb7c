//! Rule configuration errors.

use thiserror::Error;

/// Errors raised while building a rule from its options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options object does not match the rule's option structure.
    #[error("Invalid options for rule '{rule}': {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured pattern could not be compiled.
    #[error("Invalid pattern {pattern:?} for rule '{rule}': {reason}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(
        rule: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidPattern {
            rule: rule.into(),
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
