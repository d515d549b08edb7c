//! TxtNode definition.

use crate::{NodeType, Span};

/// A node in the TxtAST.
///
/// Nodes are `Copy` views into an [`AstArena`](crate::AstArena). A node only
/// knows its children; use [`NodePath`](crate::NodePath) to reach parents.
///
/// # Example
///
/// ```rust
/// use termlint_ast::{AstArena, NodeType, Span, TxtNode};
///
/// let arena = AstArena::new();
/// let code = arena.alloc(TxtNode::new_text(NodeType::Code, Span::new(6, 10), "id"));
/// let children = arena.alloc_slice_copy(&[*code]);
/// let paragraph = TxtNode::new_parent(NodeType::Paragraph, Span::new(0, 10), children);
///
/// assert!(paragraph.has_children());
/// assert!(paragraph.children[0].is_text());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Text value (for text nodes like Str, Code, CodeBlock).
    pub value: Option<&'a str>,

    /// Additional node-specific data.
    pub data: NodeData<'a>,
}

/// Node-specific payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeData<'a> {
    #[default]
    None,
    /// Heading depth (1-6).
    Header(u8),
    /// Whether a list is ordered.
    List(bool),
    /// Fenced code block language.
    CodeBlock(Option<&'a str>),
    /// Link or image destination.
    Link(LinkData<'a>),
}

/// Destination of a link or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkData<'a> {
    pub url: &'a str,
    pub title: Option<&'a str>,
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(node_type: NodeType, span: Span, children: &'a [TxtNode<'a>]) -> Self {
        Self {
            node_type,
            span,
            children,
            value: None,
            data: NodeData::None,
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(node_type: NodeType, span: Span, value: &'a str) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: Some(value),
            data: NodeData::None,
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self {
            node_type,
            span,
            children: &[],
            value: None,
            data: NodeData::None,
        }
    }

    /// Attaches node-specific data.
    #[inline]
    pub fn with_data(mut self, data: NodeData<'a>) -> Self {
        self.data = data;
        self
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the text value of this node, if any.
    ///
    /// This is the parsed value (e.g. inline code without backticks), not the
    /// raw source slice.
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }
}

impl<'a> NodeData<'a> {
    /// Creates node data for a link.
    #[inline]
    pub const fn link(url: &'a str, title: Option<&'a str>) -> Self {
        Self::Link(LinkData { url, title })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstArena;

    #[test]
    fn test_new_text() {
        let node = TxtNode::new_text(NodeType::Str, Span::new(0, 5), "hello");

        assert_eq!(node.node_type, NodeType::Str);
        assert!(node.is_text());
        assert_eq!(node.text(), Some("hello"));
        assert!(!node.has_children());
    }

    #[test]
    fn test_link_with_children() {
        let arena = AstArena::new();
        let text = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(1, 3), "id"));
        let children = arena.alloc_slice_copy(&[*text]);
        let link = TxtNode::new_parent(NodeType::Link, Span::new(0, 9), children)
            .with_data(NodeData::link("#id", None));

        assert_eq!(link.children[0].value, Some("id"));
        assert_eq!(link.data, NodeData::link("#id", None));
        assert_eq!(link.text(), None);
    }

    #[test]
    fn test_new_leaf() {
        let node = TxtNode::new_leaf(NodeType::HorizontalRule, Span::new(0, 3));

        assert!(!node.is_text());
        assert!(!node.has_children());
        assert_eq!(node.data, NodeData::None);
    }
}
