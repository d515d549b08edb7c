//! Walk functions for AST traversal.

use std::ops::ControlFlow;

use crate::{NodePath, TxtNode};

use super::{VisitResult, Visitor};

/// Walks a whole tree, starting with `root` as a node without parent.
#[inline]
pub fn walk_tree<'a, V>(visitor: &mut V, root: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    walk_node(visitor, &NodePath::root(root))
}

/// Walks the node at the end of `path` and its subtree.
///
/// 1. Calls `enter_node` on the visitor
/// 2. Walks the children, extending the path
/// 3. Calls `exit_node` on the visitor
pub fn walk_node<'a, V>(visitor: &mut V, path: &NodePath<'_, 'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(path)?;
    walk_children(visitor, path)?;
    visitor.exit_node(path)
}

/// Walks all children of the node at the end of `path`.
///
/// Stops early on `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, path: &NodePath<'_, 'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in path.node().children {
        walk_node(visitor, &path.child(child))?;
    }
    ControlFlow::Continue(())
}
