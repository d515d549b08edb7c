//! Core linter engine.

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use termlint_ast::visitor::{VisitResult, Visitor, walk_tree};
use termlint_ast::{AstArena, NodePath};
use termlint_parser::{MarkdownParser, Parser, PlainTextParser};
use termlint_rule::{Diagnostic, Rule, RuleContext, Severity};

use crate::file_finder::FileFinder;
use crate::{LintResult, LinterConfig, LinterError, RuleRegistry};

/// Files larger than this are rejected.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Result type for lint_files and lint_patterns methods.
///
/// Contains a tuple of:
/// - Successful lint results
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<LintResult>, Vec<(PathBuf, LinterError)>), LinterError>;

/// A built rule with the severity its diagnostics are reported at.
pub(crate) struct ConfiguredRule {
    pub(crate) rule: Box<dyn Rule>,
    pub(crate) severity: Severity,
}

/// The core linter engine.
///
/// Builds every enabled rule once, then checks documents with them. A
/// `Linter` is `Sync` and is shared across the threads of [`lint_files`].
///
/// [`lint_files`]: Linter::lint_files
pub struct Linter {
    config: LinterConfig,
    rules: Vec<ConfiguredRule>,
    file_finder: FileFinder,
}

impl Linter {
    /// Creates a new linter with the built-in rules available.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        Self::with_registry(config, &RuleRegistry::with_builtins())
    }

    /// Creates a new linter resolving rule names through `registry`.
    ///
    /// Fails on unknown rule names, invalid rule options and invalid
    /// include/exclude patterns.
    pub fn with_registry(config: LinterConfig, registry: &RuleRegistry) -> Result<Self, LinterError> {
        let rules = config
            .enabled_rules()
            .into_iter()
            .map(|(name, option)| {
                Ok(ConfiguredRule {
                    rule: registry.build(name, &option.options())?,
                    severity: option.severity()?,
                })
            })
            .collect::<Result<Vec<_>, LinterError>>()?;
        debug!("Loaded {} rules", rules.len());

        let file_finder = FileFinder::new(&config.include, &config.exclude)?;

        Ok(Self {
            config,
            rules,
            file_finder,
        })
    }

    /// Returns the configuration this linter was built from.
    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Names of the active rules, in execution order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.rule.manifest().name.as_str())
    }

    /// Lints source text, choosing the parser by file extension.
    ///
    /// Diagnostics are ordered by position.
    pub fn lint_text(&self, source: &str, extension: &str) -> Result<Vec<Diagnostic>, LinterError> {
        run_rules(&self.rules, source, select_parser(extension).as_ref())
    }

    /// Lints a single file.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());

        let metadata = fs::metadata(path).map_err(|e| {
            LinterError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(LinterError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(LinterError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let diagnostics = self.lint_text(&content, extension)?;
        debug!("{}: {} diagnostics", path.display(), diagnostics.len());

        Ok(LintResult::new(path.to_path_buf(), diagnostics))
    }

    /// Lints a list of files in parallel using rayon.
    ///
    /// A file that cannot be read or parsed does not stop the others.
    /// Returns a tuple of (successful results, failed files with errors),
    /// both in input order.
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(lint_result) => successes.push(lint_result),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Lints the files, directories and glob patterns given on the command line.
    pub fn lint_patterns(&self, patterns: &[String]) -> LintFilesResult {
        let base_dir = self
            .config
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let files = self.file_finder.discover(patterns, &base_dir)?;
        self.lint_files(&files)
    }
}

/// Parses `source` and runs `rules` over it in a single traversal.
pub(crate) fn run_rules(
    rules: &[ConfiguredRule],
    source: &str,
    parser: &dyn Parser,
) -> Result<Vec<Diagnostic>, LinterError> {
    let arena = AstArena::new();
    let ast = parser.parse(&arena, source)?;

    let mut dispatcher = RuleDispatcher {
        rules,
        contexts: rules
            .iter()
            .map(|r| RuleContext::new(&r.rule.manifest().name, source).with_severity(r.severity))
            .collect(),
    };
    let _ = walk_tree(&mut dispatcher, &ast);

    let mut diagnostics: Vec<Diagnostic> = dispatcher
        .contexts
        .into_iter()
        .flat_map(RuleContext::into_diagnostics)
        .collect();
    diagnostics.sort_by_key(|d| (d.span.start, d.span.end));

    Ok(diagnostics)
}

/// Calls each rule for the node types listed in its manifest.
struct RuleDispatcher<'r> {
    rules: &'r [ConfiguredRule],
    contexts: Vec<RuleContext<'r>>,
}

impl<'a> Visitor<'a> for RuleDispatcher<'_> {
    fn enter_node(&mut self, path: &NodePath<'_, 'a>) -> VisitResult {
        let node_type = path.node_type();
        for (configured, ctx) in self.rules.iter().zip(self.contexts.iter_mut()) {
            if configured.rule.manifest().handles(node_type) {
                configured.rule.visit(path, ctx);
            }
        }
        ControlFlow::Continue(())
    }
}

/// Selects the parser for a file extension, falling back to plain text.
pub(crate) fn select_parser(extension: &str) -> Box<dyn Parser> {
    let md_parser = MarkdownParser::new();

    if md_parser.can_parse(extension) {
        Box::new(md_parser)
    } else {
        Box::new(PlainTextParser::new())
    }
}

/// Returns true if a dedicated parser handles the file's extension.
pub(crate) fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MarkdownParser::new().can_parse(ext) || PlainTextParser::new().can_parse(ext)
        })
}
