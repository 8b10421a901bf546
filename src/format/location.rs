//! Character span resolution for edit operations.
//!
//! Before-side spans come straight from the operation's stored node.
//! After-side spans for moved and updated nodes are reached through the
//! correspondence table; the stored node is always the source-tree node,
//! so its own span must never be taken for the after side.

use crate::error::{Error, Result};
use crate::mapping::MappingStore;
use crate::tree::{Node, NodeRef};

/// A character span `(start, end)` as encoded by the upstream tree.
///
/// No offset convention is imposed here; the values are passed through
/// exactly as the tree carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start character offset.
    pub start: usize,
    /// End character offset.
    pub end: usize,
}

impl Span {
    /// Returns the span of a node.
    pub fn of(node: &Node) -> Self {
        Span {
            start: node.start(),
            end: node.end(),
        }
    }
}

/// Resolves the after-tree counterpart of a before-tree node.
///
/// A move or update operation whose node has no entry in the table is a
/// consistency violation between the edit script and the mapping; the
/// build fails rather than emit a fabricated span.
pub fn resolve_counterpart<'a>(
    mappings: &'a MappingStore,
    node: &Node,
    operation: &'static str,
) -> Result<&'a NodeRef> {
    mappings.lookup(node).ok_or_else(|| Error::MissingCounterpart {
        operation,
        id: node.id(),
        label: node.label().to_string(),
    })
}
