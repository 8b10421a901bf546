//! JSON diff document format.
//!
//! This module renders a [`Diff`](crate::diff::Diff) into the canonical
//! JSON interchange document consumed by downstream analysis tools:
//! tool-identification metadata, the ordered action list, optional full
//! tree snapshots, and the optional raw correspondence table.
//!
//! Field names and the six action type tags below are a stable contract;
//! consumers key on `type` to interpret the location fields of each entry.

mod action;
mod builder;
mod encode;
mod location;
mod mapping;

pub use action::{encode_action, simple_action};
pub use builder::{to_json_string, to_json_string_pretty, FormatOptions, ToolInfo, TreeDiffBuilder};
pub use encode::{encode_node, encode_subtree, tree_snapshot};
pub use location::{resolve_counterpart, Span};
pub use mapping::encode_mappings;

/// Action type tags.
pub const INSERT_NODE_TAG: &str = "insert-node";
pub const INSERT_SUBTREE_TAG: &str = "insert-subtree";
pub const DELETE_NODE_TAG: &str = "delete-node";
pub const DELETE_SUBTREE_TAG: &str = "delete-subtree";
pub const MOVE_SUBTREE_TAG: &str = "move-subtree";
pub const UPDATE_NODE_TAG: &str = "update-node";

/// Top-level document keys.
pub const TOOL_INFO_KEY: &str = "tool-info";
pub const DIFF_KEY: &str = "diff";
pub const BEFORE_FILE_KEY: &str = "before-file";
pub const AFTER_FILE_KEY: &str = "after-file";
pub const MAPPING_KEY: &str = "mapping";

/// Action entry keys.
pub const TYPE_KEY: &str = "type";
pub const NODE_KEY: &str = "node";
pub const NODE_STR_KEY: &str = "node-str";
pub const META_KEY: &str = "meta";
pub const BEFORE_START_KEY: &str = "location-before-char-start";
pub const BEFORE_END_KEY: &str = "location-before-char-end";
pub const AFTER_START_KEY: &str = "location-after-char-start";
pub const AFTER_END_KEY: &str = "location-after-char-end";

/// Node and snapshot keys.
pub const LABEL_KEY: &str = "label";
pub const CHILDREN_KEY: &str = "children";
pub const PATH_KEY: &str = "path";
pub const AST_KEY: &str = "ast";

/// Mapping entry keys.
pub const SRC_KEY: &str = "src";
pub const DST_KEY: &str = "dst";
pub const START_KEY: &str = "start";
pub const END_KEY: &str = "end";
