//! Rules command implementation

use miette::Result;
use termlint_core::RuleRegistry;

use crate::cli::Cli;
use super::lint::load_config;

/// Prints the built-in rules, marking those enabled by the active configuration.
pub fn run_rules(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let enabled = config.enabled_rules();

    for manifest in RuleRegistry::with_builtins().manifests() {
        let marker = if enabled.iter().any(|(name, _)| *name == manifest.name) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {} (v{}): {}",
            marker,
            manifest.name,
            manifest.version,
            manifest.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
