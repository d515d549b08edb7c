//! # termlint_rule
//!
//! The contract between the termlint engine (the host) and lint rules.
//!
//! - [`Rule`]: a configured rule instance, visited once per matching node
//! - [`RuleManifest`]: rule metadata, including the node types it visits
//! - [`RuleFactory`]: builds a rule from its JSON options
//! - [`RuleContext`]: per-document access to the source and issue reporting
//! - [`Issue`]: a message with an offset relative to the reported node
//! - [`Diagnostic`]: a reported issue resolved to absolute source positions
//!
//! ## Example
//!
//! ```rust
//! use termlint_ast::{NodePath, NodeType, Span, TxtNode};
//! use termlint_rule::{Issue, Rule, RuleContext, RuleManifest};
//!
//! struct NoExclamation {
//!     manifest: RuleManifest,
//! }
//!
//! impl Rule for NoExclamation {
//!     fn manifest(&self) -> &RuleManifest {
//!         &self.manifest
//!     }
//!
//!     fn visit(&self, path: &NodePath<'_, '_>, ctx: &mut RuleContext<'_>) {
//!         let text = ctx.get_source(path.node());
//!         if let Some(index) = text.chars().position(|c| c == '!') {
//!             ctx.report(path.node(), Issue::new("Avoid exclamation marks.").at(index));
//!         }
//!     }
//! }
//!
//! let rule = NoExclamation {
//!     manifest: RuleManifest::new("no-exclamation", "1.0.0")
//!         .with_node_types(vec![NodeType::Str]),
//! };
//! let source = "Hi!";
//! let node = TxtNode::new_text(NodeType::Str, Span::new(0, 3), source);
//!
//! let mut ctx = RuleContext::new("no-exclamation", source);
//! rule.visit(&NodePath::root(&node), &mut ctx);
//!
//! let diagnostics = ctx.into_diagnostics();
//! assert_eq!(diagnostics[0].span, Span::new(2, 2));
//! ```

mod context;
mod diagnostic;
mod error;
mod rule;

pub use context::{Issue, RuleContext};
pub use diagnostic::{Diagnostic, Severity};
pub use error::ConfigError;
pub use rule::{Rule, RuleFactory, RuleManifest, parse_options};
