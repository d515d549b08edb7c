//! A textlint-tester style harness for rules.
//!
//! `valid` texts must produce no diagnostics. Each `invalid` case lists the
//! diagnostics it must produce, in position order, with 1-based line and
//! column numbers as textlint reports them.
//!
//! # Example
//!
//! ```rust
//! use termlint_core::{ExpectedError, InvalidCase, RuleTester};
//!
//! let tester = RuleTester::new(termlint_rule_uppercase_terms::create);
//!
//! tester
//!     .run(
//!         &["We can refer to its ID."],
//!         &[InvalidCase::new(
//!             "Use the id.",
//!             vec![ExpectedError::new("Found term \"id\", use \"ID\" instead.").at(1, 9)],
//!         )],
//!     )
//!     .unwrap();
//! ```

use serde_json::Value;
use termlint_rule::{ConfigError, Diagnostic, RuleFactory, Severity};
use thiserror::Error;

use crate::LinterError;
use crate::linter::{ConfiguredRule, run_rules, select_parser};

/// A failed expectation.
#[derive(Debug, Error)]
pub enum TesterError {
    /// The rule could not be built from the case options.
    #[error("Failed to build rule: {0}")]
    Build(#[from] ConfigError),

    /// The text could not be linted.
    #[error("Failed to lint {text:?}: {source}")]
    Lint {
        text: String,
        #[source]
        source: LinterError,
    },

    /// A valid text produced diagnostics.
    #[error("Expected no errors for {text:?}, got {messages:?}")]
    UnexpectedErrors { text: String, messages: Vec<String> },

    /// An invalid text produced the wrong number of diagnostics.
    #[error("Expected {expected} errors for {text:?}, got {actual}: {messages:?}")]
    ErrorCount {
        text: String,
        expected: usize,
        actual: usize,
        messages: Vec<String>,
    },

    /// A diagnostic differs from its expectation.
    #[error("Error #{index} for {text:?}: expected {field} {expected}, got {actual}")]
    Mismatch {
        text: String,
        index: usize,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// An expected diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedError {
    pub message: String,
    /// 1-based line, checked when set.
    pub line: Option<u32>,
    /// 1-based column, checked when set.
    pub column: Option<u32>,
}

impl ExpectedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Expects the diagnostic to start at `line`:`column` (both 1-based).
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// A text that must produce the given diagnostics.
#[derive(Debug, Clone)]
pub struct InvalidCase {
    pub text: String,
    pub errors: Vec<ExpectedError>,
    /// Rule options for this case; the tester's options when unset.
    pub options: Option<Value>,
}

impl InvalidCase {
    pub fn new(text: impl Into<String>, errors: Vec<ExpectedError>) -> Self {
        Self {
            text: text.into(),
            errors,
            options: None,
        }
    }

    /// Lints this case with its own rule options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Runs one rule against valid and invalid texts.
pub struct RuleTester {
    factory: RuleFactory,
    options: Value,
    extension: String,
}

impl RuleTester {
    /// Creates a tester for the rule built by `factory`, with default options,
    /// parsing texts as Markdown.
    pub fn new(factory: RuleFactory) -> Self {
        Self {
            factory,
            options: Value::Null,
            extension: "md".to_string(),
        }
    }

    /// Sets the rule options used for every case.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    /// Sets the file extension that selects the parser.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Checks every case, stopping at the first failed expectation.
    pub fn run(&self, valid: &[&str], invalid: &[InvalidCase]) -> Result<(), TesterError> {
        for text in valid {
            let diagnostics = self.lint(text, &self.options)?;
            if !diagnostics.is_empty() {
                return Err(TesterError::UnexpectedErrors {
                    text: text.to_string(),
                    messages: messages(&diagnostics),
                });
            }
        }

        for case in invalid {
            let options = case.options.as_ref().unwrap_or(&self.options);
            let diagnostics = self.lint(&case.text, options)?;
            check_invalid(case, &diagnostics)?;
        }

        Ok(())
    }

    /// Lints `text` with the rule built from `options`.
    pub fn lint(&self, text: &str, options: &Value) -> Result<Vec<Diagnostic>, TesterError> {
        let rules = [ConfiguredRule {
            rule: (self.factory)(options)?,
            severity: Severity::Error,
        }];

        run_rules(&rules, text, select_parser(&self.extension).as_ref()).map_err(|source| {
            TesterError::Lint {
                text: text.to_string(),
                source,
            }
        })
    }
}

fn check_invalid(case: &InvalidCase, diagnostics: &[Diagnostic]) -> Result<(), TesterError> {
    if diagnostics.len() != case.errors.len() {
        return Err(TesterError::ErrorCount {
            text: case.text.clone(),
            expected: case.errors.len(),
            actual: diagnostics.len(),
            messages: messages(diagnostics),
        });
    }

    for (index, (expected, actual)) in case.errors.iter().zip(diagnostics).enumerate() {
        let mismatch = |field, expected: String, actual: String| TesterError::Mismatch {
            text: case.text.clone(),
            index,
            field,
            expected,
            actual,
        };

        if expected.message != actual.message {
            return Err(mismatch(
                "message",
                expected.message.clone(),
                actual.message.clone(),
            ));
        }

        let start = actual.loc.map(|loc| loc.start);
        let line = start.map(|p| p.line);
        let column = start.map(|p| p.column + 1);

        if expected.line.is_some() && expected.line != line {
            return Err(mismatch("line", fmt_opt(expected.line), fmt_opt(line)));
        }
        if expected.column.is_some() && expected.column != column {
            return Err(mismatch("column", fmt_opt(expected.column), fmt_opt(column)));
        }
    }

    Ok(())
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.message.clone()).collect()
}

fn fmt_opt(value: Option<u32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}
