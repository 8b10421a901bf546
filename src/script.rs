//! Edit operations and edit scripts.
//!
//! An edit script is the ordered sequence of operations an upstream script
//! generator chose to transform the before-tree into the after-tree. The
//! serializer preserves script order verbatim; it never reorders or
//! filters operations.

use crate::tree::NodeRef;

/// A single edit operation over two matched trees.
///
/// Insert variants carry a node of the *after* tree; delete, move, and
/// update variants carry a node of the *before* tree. For move and update,
/// the after-side position is reached through the correspondence table,
/// never stored on the operation itself.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum EditOp {
    /// A single node was inserted (after-tree node).
    InsertNode(NodeRef),
    /// A whole subtree was inserted (root of the inserted subtree).
    InsertSubtree(NodeRef),
    /// A single node was deleted (before-tree node).
    DeleteNode(NodeRef),
    /// A whole subtree was deleted (root of the deleted subtree).
    DeleteSubtree(NodeRef),
    /// A subtree was moved; the node is its *source* (before-tree) root.
    MoveSubtree(NodeRef),
    /// A node's label changed; the node is the *source* (before-tree) node.
    UpdateNode(NodeRef),
}

impl EditOp {
    /// Returns the node stored on this operation.
    pub fn node(&self) -> &NodeRef {
        match self {
            EditOp::InsertNode(n)
            | EditOp::InsertSubtree(n)
            | EditOp::DeleteNode(n)
            | EditOp::DeleteSubtree(n)
            | EditOp::MoveSubtree(n)
            | EditOp::UpdateNode(n) => n,
        }
    }
}

/// An ordered sequence of edit operations.
#[derive(Debug, Clone, Default)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Creates an empty edit script.
    pub fn new() -> Self {
        EditScript::default()
    }

    /// Appends an operation to the script.
    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    /// Returns the number of operations in the script.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the script contains no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates the operations in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        EditScript { ops }
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
