//! Parent chain for arena nodes.
//!
//! [`TxtNode`] only stores its children. During traversal each visited node is
//! paired with a borrowed reference to the path of its parent, which gives
//! rules the textlint `node.parent` relation without the tree owning upward
//! pointers. A path is only valid for the duration of the visit that created
//! it.

use std::iter::FusedIterator;

use crate::{NodeType, TxtNode};

/// A node together with the chain of its ancestors.
///
/// # Example
///
/// ```rust
/// use termlint_ast::{NodePath, NodeType, Span, TxtNode};
///
/// let paragraph = TxtNode::new_parent(NodeType::Paragraph, Span::new(0, 4), &[]);
/// let link = TxtNode::new_parent(NodeType::Link, Span::new(0, 4), &[]);
/// let text = TxtNode::new_text(NodeType::Str, Span::new(1, 3), "id");
///
/// let root = NodePath::root(&paragraph);
/// let link_path = root.child(&link);
/// let text_path = link_path.child(&text);
///
/// assert!(text_path.is_wrapped_by(&[NodeType::Link]));
/// assert!(!link_path.is_wrapped_by(&[NodeType::Link]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodePath<'p, 'a> {
    node: &'p TxtNode<'a>,
    parent: Option<&'p NodePath<'p, 'a>>,
}

impl<'p, 'a> NodePath<'p, 'a> {
    /// Creates a path for a node without a parent (the document root).
    #[inline]
    pub const fn root(node: &'p TxtNode<'a>) -> Self {
        Self { node, parent: None }
    }

    /// Creates the path of `node`, a child of this path's node.
    #[inline]
    pub const fn child<'c>(&'c self, node: &'c TxtNode<'a>) -> NodePath<'c, 'a> {
        NodePath {
            node,
            parent: Some(self),
        }
    }

    /// Returns the node at the end of this path.
    #[inline]
    pub const fn node(&self) -> &'p TxtNode<'a> {
        self.node
    }

    /// Returns the path of the parent node, or `None` at the root.
    #[inline]
    pub const fn parent(&self) -> Option<&'p NodePath<'p, 'a>> {
        self.parent
    }

    /// Returns the type of the node at the end of this path.
    #[inline]
    pub const fn node_type(&self) -> NodeType {
        self.node.node_type
    }

    /// Iterates over the ancestors, closest parent first, ending at the root.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'p, 'a> {
        Ancestors { next: self.parent }
    }

    /// Number of ancestors (0 for the root).
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Returns true if any ancestor has one of the given types.
    ///
    /// The node itself is not considered, and nesting depth does not matter.
    pub fn is_wrapped_by(&self, types: &[NodeType]) -> bool {
        self.ancestors()
            .any(|ancestor| types.contains(&ancestor.node_type))
    }
}

/// Iterator over the ancestors of a [`NodePath`].
#[derive(Debug, Clone)]
pub struct Ancestors<'p, 'a> {
    next: Option<&'p NodePath<'p, 'a>>,
}

impl<'p, 'a> Iterator for Ancestors<'p, 'a> {
    type Item = &'p TxtNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.next?;
        self.next = path.parent;
        Some(path.node)
    }
}

impl FusedIterator for Ancestors<'_, '_> {}
