//! Ancestor-aware traversal for TxtAST.
//!
//! - [`Visitor`] - read-only traversal hooks receiving a [`NodePath`]
//! - [`walk_tree`] - traverse a whole document from its root
//! - [`walk_node`] / [`walk_children`] - traverse a subtree
//!
//! Traversal is depth-first and pre-order: `enter_node` is called for a node
//! before any of its descendants, `exit_node` after all of them.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use termlint_ast::visitor::{VisitResult, Visitor, walk_tree};
//! use termlint_ast::{AstArena, NodePath, NodeType, Span, TxtNode};
//!
//! /// Collects text that is not inside a link.
//! struct PlainText<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for PlainText<'a> {
//!     fn enter_node(&mut self, path: &NodePath<'_, 'a>) -> VisitResult {
//!         let node = path.node();
//!         if node.node_type == NodeType::Str && !path.is_wrapped_by(&[NodeType::Link]) {
//!             if let Some(text) = node.value {
//!                 self.texts.push(text);
//!             }
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let linked = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(7, 9), "id"));
//! let link = arena.alloc(TxtNode::new_parent(
//!     NodeType::Link,
//!     Span::new(6, 15),
//!     arena.alloc_slice_copy(&[*linked]),
//! ));
//! let plain = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(0, 6), "param "));
//! let doc = TxtNode::new_parent(
//!     NodeType::Document,
//!     Span::new(0, 15),
//!     arena.alloc_slice_copy(&[*plain, *link]),
//! );
//!
//! let mut collector = PlainText { texts: Vec::new() };
//! let _ = walk_tree(&mut collector, &doc);
//! assert_eq!(collector.texts, vec!["param "]);
//! ```

mod walk;

use std::ops::ControlFlow;

use crate::NodePath;

pub use walk::{walk_children, walk_node, walk_tree};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue traversal
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor over TxtAST nodes with access to each node's ancestors.
///
/// The `'a` lifetime ties visited nodes to their arena allocator.
pub trait Visitor<'a>: Sized {
    /// Called before the node's children are visited.
    #[inline]
    fn enter_node(&mut self, _path: &NodePath<'_, 'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after the node and all its children were visited.
    #[inline]
    fn exit_node(&mut self, _path: &NodePath<'_, 'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}
