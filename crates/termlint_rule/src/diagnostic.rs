//! Diagnostic types for lint results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use termlint_ast::{Location, Span};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

/// A diagnostic message from a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Byte span in the source.
    pub span: Span,

    /// Line/column location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use termlint_ast::Position;

    #[test]
    fn test_diagnostic_builder_chain() {
        let loc = Location::new(Position::new(1, 28), Position::new(1, 30));
        let diag = Diagnostic::new("uppercase-terms", "Found term", Span::new(28, 30))
            .with_severity(Severity::Warning)
            .with_location(loc);

        assert_eq!(diag.rule_id, "uppercase-terms");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.loc, Some(loc));
    }

    #[test]
    fn test_diagnostic_serialization_omits_missing_loc() {
        let diag = Diagnostic::new("uppercase-terms", "msg", Span::new(0, 2));
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["severity"], "error");
        assert_eq!(json["span"]["end"], 2);
        assert!(json.get("loc").is_none());
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert!("off".parse::<Severity>().is_err());
        assert_eq!(Severity::default().to_string(), "error");
    }
}
