//! Diff document assembly.
//!
//! `TreeDiffBuilder` orchestrates the encoders: tool metadata, the ordered
//! action array, the two tree snapshots, and the mapping array, assembled
//! into one JSON document. Builds are pure over their inputs; a build
//! either returns the complete document or fails with a single terminal
//! error, never a partial document.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diff::Diff;
use crate::error::Result;
use crate::tree::SourceTree;

use super::action::encode_action;
use super::encode::tree_snapshot;
use super::mapping::encode_mappings;
use super::{AFTER_FILE_KEY, BEFORE_FILE_KEY, DIFF_KEY, MAPPING_KEY, TOOL_INFO_KEY};

/// Options controlling document size.
///
/// Fixed for the lifetime of a builder; both flags are independent. When a
/// flag is off the corresponding document key is still present and holds
/// an empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include full before/after tree snapshots.
    pub store_trees: bool,
    /// Include the full correspondence table.
    pub store_mappings: bool,
}

impl FormatOptions {
    /// Creates options with the given flags.
    pub fn new(store_trees: bool, store_mappings: bool) -> Self {
        FormatOptions {
            store_trees,
            store_mappings,
        }
    }
}

/// Identification of the process that produced a diff.
///
/// Opaque caller-supplied metadata; the builder embeds it verbatim under
/// `tool-info`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Name of the producing tool.
    pub name: String,
    /// Version of the producing tool.
    pub version: String,
    /// Identifier of the matching algorithm.
    pub matcher: String,
    /// Identifier of the edit-script algorithm.
    #[serde(rename = "editscriptgenerator")]
    pub edit_script_generator: String,
}

impl ToolInfo {
    /// Creates tool metadata from its four identifiers.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        matcher: impl Into<String>,
        edit_script_generator: impl Into<String>,
    ) -> Self {
        ToolInfo {
            name: name.into(),
            version: version.into(),
            matcher: matcher.into(),
            edit_script_generator: edit_script_generator.into(),
        }
    }
}

/// Builder for the JSON diff document.
#[derive(Debug, Default)]
pub struct TreeDiffBuilder {
    /// Snapshot/mapping inclusion options.
    options: FormatOptions,
}

impl TreeDiffBuilder {
    /// Creates a builder with default options (no snapshots, no mapping).
    pub fn new() -> Self {
        TreeDiffBuilder::default()
    }

    /// Creates a builder with the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        TreeDiffBuilder { options }
    }

    /// Returns the builder's options.
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Builds the document from a diff alone, without tool metadata.
    ///
    /// `tool-info` is emitted as JSON null; snapshots use the trees' own
    /// paths.
    pub fn build(&self, diff: &Diff) -> Result<Value> {
        self.build_from_snapshots(
            self.snapshot_or_placeholder(&diff.src),
            self.snapshot_or_placeholder(&diff.dst),
            diff,
            Value::Null,
        )
    }

    /// Builds the document from a diff and caller tool metadata.
    pub fn build_with_tool_info(&self, diff: &Diff, tool_info: &ToolInfo) -> Result<Value> {
        self.build_from_snapshots(
            self.snapshot_or_placeholder(&diff.src),
            self.snapshot_or_placeholder(&diff.dst),
            diff,
            serde_json::to_value(tool_info).expect("tool info serialization cannot fail"),
        )
    }

    /// Canonical build over fully-resolved inputs.
    ///
    /// `before` and `after` must already be snapshots or placeholders; the
    /// other entry points derive them from the diff's trees and converge
    /// here, so every entry point produces the identical document shape.
    pub fn build_from_snapshots(
        &self,
        before: Value,
        after: Value,
        diff: &Diff,
        tool_info: Value,
    ) -> Result<Value> {
        let mut document = Map::new();
        document.insert(TOOL_INFO_KEY.to_string(), tool_info);

        let mut actions = Vec::with_capacity(diff.edit_script.len());
        for op in &diff.edit_script {
            actions.push(encode_action(op, &diff.mappings, &self.options)?);
        }
        document.insert(DIFF_KEY.to_string(), Value::Array(actions));

        document.insert(BEFORE_FILE_KEY.to_string(), before);
        document.insert(AFTER_FILE_KEY.to_string(), after);

        let mapping = if self.options.store_mappings {
            encode_mappings(&diff.mappings)
        } else {
            Value::Object(Map::new())
        };
        document.insert(MAPPING_KEY.to_string(), mapping);

        Ok(Value::Object(document))
    }

    /// Encodes a tree snapshot, or the empty placeholder when snapshots
    /// are disabled.
    fn snapshot_or_placeholder(&self, tree: &SourceTree) -> Value {
        if self.options.store_trees {
            tree_snapshot(tree.root(), tree.path())
        } else {
            Value::Object(Map::new())
        }
    }
}

/// Serializes a built document to a compact JSON string.
pub fn to_json_string(document: &Value) -> String {
    document.to_string()
}

/// Serializes a built document to a pretty-printed JSON string.
pub fn to_json_string_pretty(document: &Value) -> String {
    serde_json::to_string_pretty(document).expect("document serialization cannot fail")
}
