//! Plain text parser.
//!
//! Splits text into paragraphs on blank lines. Each paragraph holds a single
//! `Str` node covering its trimmed content.

use termlint_ast::{AstArena, NodeType, Span, TxtNode};

use crate::traits::check_source_len;
use crate::{ParseError, Parser};

/// Plain text parser implementation.
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a new plain text parser.
    pub fn new() -> Self {
        Self
    }

    /// Byte ranges of the paragraphs in `source`, trailing whitespace excluded.
    fn paragraph_ranges(source: &str) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        let mut current: Option<(usize, usize)> = None;
        let mut offset = 0;

        for line in source.split_inclusive('\n') {
            let content = line.trim_end();
            if content.trim_start().is_empty() {
                ranges.extend(current.take());
            } else {
                let end = offset + content.len();
                current = match current {
                    Some((start, _)) => Some((start, end)),
                    None => Some((offset, end)),
                };
            }
            offset += line.len();
        }
        ranges.extend(current);

        ranges
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for PlainTextParser {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        check_source_len(source)?;

        let paragraphs = Self::paragraph_ranges(source)
            .into_iter()
            .map(|(start, end)| {
                let span = Span::new(start as u32, end as u32);
                let text = arena.alloc(TxtNode::new_text(
                    NodeType::Str,
                    span,
                    arena.alloc_str(&source[start..end]),
                ));
                TxtNode::new_parent(NodeType::Paragraph, span, arena.alloc_slice_copy(&[*text]))
            })
            .collect::<Vec<_>>();

        Ok(TxtNode::new_parent(
            NodeType::Document,
            Span::new(0, source.len() as u32),
            arena.alloc_slice_copy(&paragraphs),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_single_line() {
        let arena = AstArena::new();
        let source = "We shouldn't be able to use id lowercase in a sentence.";
        let ast = PlainTextParser::new().parse(&arena, source).unwrap();

        assert_eq!(ast.children.len(), 1);
        let text = &ast.children[0].children[0];
        assert_eq!(text.node_type, NodeType::Str);
        assert_eq!(text.value, Some(source));
        assert_eq!(text.span, Span::new(0, source.len() as u32));
    }

    #[test]
    fn test_parse_paragraph_spans() {
        let arena = AstArena::new();
        let source = "First line\nstill first.  \n\n\nSecond id.\n";
        let ast = PlainTextParser::new().parse(&arena, source).unwrap();

        assert_eq!(ast.children.len(), 2);
        assert_eq!(ast.children[0].span, Span::new(0, 23));
        assert_eq!(
            ast.children[0].children[0].value,
            Some("First line\nstill first.")
        );
        assert_eq!(ast.children[1].span, Span::new(28, 38));
        assert_eq!(ast.children[1].children[0].value, Some("Second id."));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   \n\n \t \n")]
    fn test_parse_no_paragraphs(#[case] source: &str) {
        let arena = AstArena::new();
        let ast = PlainTextParser::new().parse(&arena, source).unwrap();

        assert_eq!(ast.node_type, NodeType::Document);
        assert!(ast.children.is_empty());
    }

    #[test]
    fn test_extensions() {
        let parser = PlainTextParser::new();

        assert!(parser.can_parse("txt"));
        assert!(parser.can_parse("TEXT"));
        assert!(!parser.can_parse("md"));
    }
}
