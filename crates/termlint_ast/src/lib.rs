//! # termlint_ast
//!
//! TxtAST definitions for termlint.
//!
//! The tree follows textlint's TxtAST node vocabulary. Nodes live in a bump
//! arena owned by the caller and only point downwards (to their children).
//! The upward `parent` relation that rules rely on is provided by
//! [`NodePath`], a borrowed chain built by the traversal functions in
//! [`visitor`].
//!
//! ## Example
//!
//! ```rust
//! use termlint_ast::{AstArena, NodeType, Span, TxtNode};
//!
//! let arena = AstArena::new();
//!
//! let text = arena.alloc(TxtNode::new_text(NodeType::Str, Span::new(0, 5), "hello"));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let doc = TxtNode::new_parent(NodeType::Document, Span::new(0, 5), children);
//!
//! assert_eq!(doc.children[0].text(), Some("hello"));
//! ```

mod arena;
mod node;
mod node_type;
mod path;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{LinkData, NodeData, TxtNode};
pub use node_type::NodeType;
pub use path::{Ancestors, NodePath};
pub use span::{Location, Position, Span};

pub use visitor::{VisitResult, Visitor};
