//! Lint result types.

use std::path::PathBuf;

use termlint_rule::{Diagnostic, Severity};

/// Result of linting a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct LintResult {
    /// Path to the linted file.
    pub path: PathBuf,

    /// Diagnostics found in the file, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Creates a new lint result.
    pub fn new(path: PathBuf, diagnostics: Vec<Diagnostic>) -> Self {
        Self { path, diagnostics }
    }

    /// Returns true if there are any diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns the number of diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns the number of diagnostics with the given severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Summary of linting multiple files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LintSummary {
    /// Total files processed.
    pub files_checked: usize,

    /// Total diagnostics found.
    pub total_diagnostics: usize,

    /// Files with diagnostics.
    pub files_with_errors: usize,
}

impl LintSummary {
    /// Creates a summary from results.
    pub fn from_results(results: &[LintResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            summary.files_checked += 1;
            summary.total_diagnostics += result.diagnostics.len();
            if result.has_errors() {
                summary.files_with_errors += 1;
            }
        }

        summary
    }
}
