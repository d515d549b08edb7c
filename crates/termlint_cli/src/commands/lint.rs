//! Lint command implementation

use miette::{IntoDiagnostic, Result};
use termlint_core::{Linter, LinterConfig};
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

/// Lints `patterns`, returning true if any issue was found or any file failed.
pub fn run_lint(cli: &Cli, patterns: &[String], format: OutputFormat) -> Result<bool> {
    let config = load_config(cli)?;
    let linter = Linter::new(config).into_diagnostic()?;

    let (results, failures) = linter.lint_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_errors = output_results(&results, format)?;
    Ok(has_errors || !failures.is_empty())
}

/// Loads `--config`, or the configuration found in the current directory.
pub fn load_config(cli: &Cli) -> Result<LinterConfig> {
    if let Some(ref path) = cli.config {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::default())
}
