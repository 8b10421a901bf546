//! Node correspondence table.
//!
//! A `MappingStore` records the one-to-one correspondences an external
//! matcher established between nodes of the before-tree and nodes of the
//! after-tree. The serializer queries it in the src→dst direction to
//! resolve the after-side position of moved and updated nodes, and can
//! enumerate it in full when mapping output is enabled.

use rustc_hash::FxHashMap;

use crate::tree::{Node, NodeRef};

/// One-to-one correspondence table between two trees.
///
/// Pairs are unique on both sides; enumeration order is insertion order,
/// which keeps document output deterministic for identical inputs.
#[derive(Debug, Default)]
pub struct MappingStore {
    /// src node id -> dst node.
    src_to_dst: FxHashMap<u64, NodeRef>,
    /// All (src, dst) pairs in insertion order.
    pairs: Vec<(NodeRef, NodeRef)>,
}

impl MappingStore {
    /// Creates an empty mapping store.
    pub fn new() -> Self {
        MappingStore::default()
    }

    /// Records a correspondence between a before-tree node and an
    /// after-tree node.
    ///
    /// One-to-one-ness is an upstream contract; it is not re-validated
    /// here beyond a debug assertion.
    pub fn link(&mut self, src: NodeRef, dst: NodeRef) {
        debug_assert!(
            !self.src_to_dst.contains_key(&src.id()),
            "src node mapped twice"
        );
        self.src_to_dst.insert(src.id(), dst.clone());
        self.pairs.push((src, dst));
    }

    /// Looks up the after-tree counterpart of a before-tree node.
    pub fn lookup(&self, src: &Node) -> Option<&NodeRef> {
        self.src_to_dst.get(&src.id())
    }

    /// Returns the number of pairs in the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the table contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates all (src, dst) pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (NodeRef, NodeRef)> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a MappingStore {
    type Item = &'a (NodeRef, NodeRef);
    type IntoIter = std::slice::Iter<'a, (NodeRef, NodeRef)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
