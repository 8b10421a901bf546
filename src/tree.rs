//! Tree structures for parsed source representation.
//!
//! This module provides the immutable node type consumed by the diff
//! serializer. Trees are produced by an external parser/matcher pipeline;
//! here they are opaque input values: a label, a syntactic type tag, a
//! character span, and children in source order.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a unique node ID.
fn next_node_id() -> u64 {
    NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A reference-counted pointer to an immutable tree node.
pub type NodeRef = Rc<Node>;

/// A node in a parsed source tree.
///
/// Each node has:
/// - A label (the node's textual/semantic value)
/// - A type tag identifying the syntactic category
/// - A character span `[start, end]` in the originating source
/// - 0 or more children, in source order
///
/// Nodes are immutable once built. Spans use whatever offset convention the
/// upstream tree generator encodes; the serializer never transforms them.
#[derive(Debug)]
pub struct Node {
    /// Unique identifier for this node.
    id: u64,
    /// Textual/semantic value of the node.
    label: String,
    /// Syntactic category tag.
    node_type: String,
    /// Start character offset of the node's source span.
    start: usize,
    /// End character offset of the node's source span.
    end: usize,
    /// Child nodes in source order.
    children: Vec<NodeRef>,
}

impl Node {
    /// Creates a new node with the given children.
    pub fn new(
        label: impl Into<String>,
        node_type: impl Into<String>,
        start: usize,
        end: usize,
        children: Vec<NodeRef>,
    ) -> NodeRef {
        debug_assert!(end >= start, "inverted span");
        Rc::new(Node {
            id: next_node_id(),
            label: label.into(),
            node_type: node_type.into(),
            start,
            end,
            children,
        })
    }

    /// Creates a new node without children.
    pub fn leaf(
        label: impl Into<String>,
        node_type: impl Into<String>,
        start: usize,
        end: usize,
    ) -> NodeRef {
        Node::new(label, node_type, start, end, Vec::new())
    }

    /// Returns the unique id of this node.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the label of this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the syntactic type tag of this node.
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Returns the start character offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end character offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the children of this node, in source order.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Returns the number of nodes in the subtree rooted here, including
    /// this node.
    pub fn subtree_size(&self) -> usize {
        DfsTreeIterator::new(self).count()
    }
}

impl Drop for Node {
    // Drains children iteratively; the default recursive drop glue would
    // overflow the stack on very deep trees.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(child) = stack.pop() {
            if let Ok(mut child) = Rc::try_unwrap(child) {
                stack.append(&mut child.children);
            }
        }
    }
}

/// Path used for trees whose originating file is not known.
pub const UNKNOWN_PATH: &str = "unknown";

/// A parsed tree together with its originating file path.
#[derive(Debug)]
pub struct SourceTree {
    /// Root node of the tree.
    root: NodeRef,
    /// Path of the file the tree was parsed from.
    path: String,
}

impl SourceTree {
    /// Creates a source tree from a root node and a file path.
    pub fn new(root: NodeRef, path: impl Into<String>) -> Self {
        SourceTree {
            root,
            path: path.into(),
        }
    }

    /// Creates a source tree whose originating file is not known.
    pub fn unnamed(root: NodeRef) -> Self {
        SourceTree::new(root, UNKNOWN_PATH)
    }

    /// Returns the root node.
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Returns the originating file path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Iterator traversing a subtree in depth-first pre-order.
///
/// Uses an explicit stack rather than call recursion so that arbitrarily
/// deep trees cannot overflow the call stack.
pub struct DfsTreeIterator<'a> {
    /// Stack of nodes still to visit, top of stack visited next.
    stack: Vec<&'a Node>,
}

impl<'a> DfsTreeIterator<'a> {
    /// Creates a new DFS iterator starting at the given root.
    pub fn new(root: &'a Node) -> Self {
        DfsTreeIterator { stack: vec![root] }
    }
}

impl<'a> Iterator for DfsTreeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children reversed so the first child is visited first.
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
