//! Output formatting module

mod json;
mod text;

use miette::Result;
use termlint_core::LintResult;

use crate::cli::OutputFormat;

/// Prints `results` to stdout, returning true if any file has issues.
pub fn output_results(results: &[LintResult], format: OutputFormat) -> Result<bool> {
    let has_errors = results.iter().any(|r| r.has_errors());

    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(has_errors)
}
