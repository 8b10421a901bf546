//! treediff-format - AST diff serialization
//!
//! This library renders a precomputed structural difference between two
//! versions of a parsed program into a canonical, tool-agnostic JSON
//! interchange document: an edit script over two abstract syntax trees,
//! plus the node-correspondence mapping that produced it, become an
//! offset-addressable description of the source changes.
//!
//! # Overview
//!
//! Parsing, tree matching, and edit-script generation happen upstream;
//! this crate consumes their results as immutable values and only
//! serializes. A [`Diff`] bundles the before/after trees, the
//! [`MappingStore`] correspondence table, and the ordered [`EditScript`];
//! a [`TreeDiffBuilder`] turns it into a single JSON document.
//!
//! # Document shape
//!
//! ```text
//! {
//!   "tool-info":   { name, version, matcher, editscriptgenerator },
//!   "diff":        [ one entry per edit operation, in script order ],
//!   "before-file": snapshot or empty placeholder,
//!   "after-file":  snapshot or empty placeholder,
//!   "mapping":     array or empty placeholder
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use treediff_format::{
//!     Diff, EditOp, EditScript, FormatOptions, MappingStore, Node, SourceTree, TreeDiffBuilder,
//! };
//!
//! // Upstream would produce these; built by hand here.
//! let before = Node::leaf("b", "MethodInvocation", 52, 58);
//! let after = Node::leaf("b", "MethodInvocation", 52, 59);
//!
//! let mut mappings = MappingStore::new();
//! mappings.link(before.clone(), after.clone());
//!
//! let mut script = EditScript::new();
//! script.push(EditOp::UpdateNode(before.clone()));
//!
//! let diff = Diff::new(
//!     SourceTree::new(before, "a/Main.java"),
//!     SourceTree::new(after, "b/Main.java"),
//!     mappings,
//!     script,
//! );
//!
//! let builder = TreeDiffBuilder::with_options(FormatOptions::new(false, true));
//! let document = builder.build(&diff)?;
//! assert_eq!(document["diff"][0]["type"], "update-node");
//! # Ok::<(), treediff_format::Error>(())
//! ```

pub mod diff;
pub mod error;
pub mod format;
pub mod mapping;
pub mod script;
pub mod tree;

// Re-export commonly used types
pub use diff::Diff;
pub use error::{Error, Result};
pub use format::{
    encode_mappings, encode_node, encode_subtree, simple_action, to_json_string,
    to_json_string_pretty, tree_snapshot, FormatOptions, Span, ToolInfo, TreeDiffBuilder,
};
pub use mapping::MappingStore;
pub use script::{EditOp, EditScript};
pub use tree::{DfsTreeIterator, Node, NodeRef, SourceTree, UNKNOWN_PATH};
