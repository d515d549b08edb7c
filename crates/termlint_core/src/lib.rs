//! # termlint_core
//!
//! Core linter engine for termlint.
//!
//! This crate provides:
//! - The main [`Linter`] orchestrator
//! - Configuration loading ([`LinterConfig`])
//! - The built-in rule registry ([`RuleRegistry`])
//! - File discovery and filtering
//! - Parallel processing
//! - A rule test harness ([`RuleTester`])
//!
//! ## Example
//!
//! ```rust
//! use termlint_core::{Linter, LinterConfig};
//!
//! let linter = Linter::new(LinterConfig::default()).unwrap();
//! let diagnostics = linter.lint_text("Pass the [id](#id) as an id.", "md").unwrap();
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Found term \"id\", use \"ID\" instead.");
//! ```

mod config;
mod error;
pub mod file_finder;
mod linter;
mod registry;
mod result;
mod tester;

pub use config::{CONFIG_FILE_NAMES, LinterConfig, RuleOption};
pub use error::LinterError;
pub use linter::{LintFilesResult, Linter, MAX_FILE_SIZE};
pub use registry::RuleRegistry;
pub use result::{LintResult, LintSummary};
pub use tester::{ExpectedError, InvalidCase, RuleTester, TesterError};

pub use termlint_rule::{Diagnostic, Severity};
