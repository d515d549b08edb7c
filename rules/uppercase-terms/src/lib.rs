//! uppercase-terms rule: Suggest the uppercase spelling of configured terms.
//!
//! Each `Str` node is searched for every configured term. The first
//! occurrence of a term is reported unless the node sits inside a link or
//! inline code.
//!
//! Terms are regular expressions and are not escaped: `i.` matches `in` and
//! `it`. Matching is case-sensitive and unanchored, so `id` also matches
//! inside `video`. Look-around and backreferences are supported, so
//! `id(?!e)` flags `id` without flagging `video`.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | terms | string[] | ["id"] | Terms to flag, in reporting order |
//!
//! # Example
//!
//! ```json
//! {
//!   "rules": {
//!     "uppercase-terms": {
//!       "terms": ["id", "url", "api"]
//!     }
//!   }
//! }
//! ```

use fancy_regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use termlint_ast::{NodePath, NodeType};
use termlint_rule::{ConfigError, Issue, Rule, RuleContext, RuleManifest, parse_options};
use tracing::{debug, warn};

pub const RULE_ID: &str = "uppercase-terms";
const VERSION: &str = "1.0.0";

/// Ancestors that exempt a node from checking.
pub const WRAPPER_TYPES: &[NodeType] = &[NodeType::Link, NodeType::Code];

/// Configuration for the uppercase-terms rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UppercaseTermsOptions {
    /// Terms to flag.
    pub terms: Vec<String>,
}

impl Default for UppercaseTermsOptions {
    fn default() -> Self {
        Self {
            terms: vec!["id".to_string()],
        }
    }
}

/// A term with its compiled pattern.
#[derive(Debug)]
struct Term {
    term: String,
    pattern: Regex,
}

impl Term {
    fn message(&self) -> String {
        format!(
            "Found term \"{}\", use \"{}\" instead.",
            self.term,
            self.term.to_uppercase()
        )
    }
}

/// The configured rule.
#[derive(Debug)]
pub struct UppercaseTerms {
    manifest: RuleManifest,
    terms: Vec<Term>,
}

impl UppercaseTerms {
    /// Compiles every term of `options`.
    pub fn new(options: UppercaseTermsOptions) -> Result<Self, ConfigError> {
        let terms = options
            .terms
            .into_iter()
            .map(|term| match Regex::new(&term) {
                Ok(pattern) => Ok(Term { term, pattern }),
                Err(e) => Err(ConfigError::invalid_pattern(RULE_ID, term, e)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            manifest: manifest(),
            terms,
        })
    }

    /// Configured terms, in reporting order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.term.as_str())
    }
}

fn manifest() -> RuleManifest {
    RuleManifest::new(RULE_ID, VERSION)
        .with_description("Suggest the uppercase spelling of configured terms")
        .with_fixable(false)
        .with_node_types(vec![NodeType::Str])
}

/// Builds the rule from its JSON options.
pub fn create(options: &Value) -> Result<Box<dyn Rule>, ConfigError> {
    let options: UppercaseTermsOptions = parse_options(RULE_ID, options)?;
    Ok(Box::new(UppercaseTerms::new(options)?))
}

impl Rule for UppercaseTerms {
    fn manifest(&self) -> &RuleManifest {
        &self.manifest
    }

    fn visit(&self, path: &NodePath<'_, '_>, ctx: &mut RuleContext<'_>) {
        let node = path.node();
        let text = ctx.get_source(node);

        for term in &self.terms {
            let found = match term.pattern.find(text) {
                Ok(Some(found)) => found,
                Ok(None) => continue,
                Err(e) => {
                    warn!(term = %term.term, "Failed to match term: {}", e);
                    continue;
                }
            };

            // Allowed inside links and inline code
            if path.is_wrapped_by(WRAPPER_TYPES) {
                continue;
            }

            let index = text[..found.start()].chars().count();
            let length = found.as_str().chars().count();
            debug!(term = %term.term, index, "Found lowercase term");

            ctx.report(node, Issue::new(term.message()).at(index).with_length(length));
        }
    }
}
