//! Per-document rule context and issue reporting.

use termlint_ast::{Location, Span, TxtNode};
use tracing::trace;

use crate::{Diagnostic, Severity};

/// An issue reported by a rule.
///
/// `index` and `length` are counted in characters, relative to the source
/// text of the node the issue is reported on (see [`RuleContext::get_source`]).
///
/// Characters are Unicode scalar values, as are the columns in the resulting
/// [`Location`]. textlint counts UTF-16 code units instead, so columns differ
/// from textlint's after a character outside the Basic Multilingual Plane
/// (most emoji), which counts once here and twice there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Human-readable message.
    pub message: String,
    /// Character offset of the issue within the node text.
    pub index: usize,
    /// Number of characters covered by the issue (0 for a point).
    pub length: usize,
}

impl Issue {
    /// Creates an issue at the start of the node.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index: 0,
            length: 0,
        }
    }

    /// Sets the character offset within the node text.
    pub fn at(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Sets the number of characters covered.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

/// Context handed to a rule while one document is checked.
///
/// Gives access to the document source and collects the rule's reports as
/// [`Diagnostic`]s with absolute byte spans and line/column locations.
pub struct RuleContext<'s> {
    rule_id: &'s str,
    source: &'s str,
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> RuleContext<'s> {
    /// Creates a context for `rule_id` checking `source`.
    pub fn new(rule_id: &'s str, source: &'s str) -> Self {
        Self {
            rule_id,
            source,
            severity: Severity::Error,
            diagnostics: Vec::new(),
        }
    }

    /// Sets the severity given to reported diagnostics.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the full document source.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Returns the raw source text covered by `node`.
    ///
    /// Returns an empty string if the node span does not lie on character
    /// boundaries of the source.
    pub fn get_source(&self, node: &TxtNode<'_>) -> &'s str {
        self.source
            .get(node.span.start as usize..node.span.end as usize)
            .unwrap_or("")
    }

    /// Reports an issue on `node`.
    ///
    /// The node-relative character offset is resolved to an absolute byte
    /// span. Offsets past the end of the node text are clamped to its end.
    pub fn report(&mut self, node: &TxtNode<'_>, issue: Issue) {
        let text = self.get_source(node);
        let start = byte_offset(text, 0, issue.index);
        let end = byte_offset(text, start, issue.length);

        let span = Span::new(node.span.start + start as u32, node.span.start + end as u32);
        let loc = Location::from_span(self.source, span);
        trace!(
            rule = self.rule_id,
            line = loc.start.line,
            column = loc.start.column,
            "{}",
            issue.message
        );

        self.diagnostics.push(
            Diagnostic::new(self.rule_id, issue.message, span)
                .with_severity(self.severity)
                .with_location(loc),
        );
    }

    /// Diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the context, returning the reported diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Byte offset reached by advancing `chars` characters from byte `from`.
fn byte_offset(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| from + offset)
}
