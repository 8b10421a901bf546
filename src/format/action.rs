//! Edit operation classification and encoding.
//!
//! Each operation variant maps to a canonical type tag and an exactly
//! specified field set. Insert and delete entries carry only one side's
//! location pair; move and update entries carry both, with the after side
//! resolved through the correspondence table.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::mapping::MappingStore;
use crate::script::EditOp;
use crate::tree::NodeRef;

use super::builder::FormatOptions;
use super::encode::{encode_node, encode_subtree};
use super::location::{resolve_counterpart, Span};
use super::{
    AFTER_END_KEY, AFTER_START_KEY, BEFORE_END_KEY, BEFORE_START_KEY, DELETE_NODE_TAG,
    DELETE_SUBTREE_TAG, INSERT_NODE_TAG, INSERT_SUBTREE_TAG, META_KEY, MOVE_SUBTREE_TAG,
    NODE_KEY, NODE_STR_KEY, TYPE_KEY, UPDATE_NODE_TAG,
};

/// Which location pair a one-sided operation emits.
enum Side {
    /// Before-tree span (deletes).
    Before,
    /// After-tree span (inserts).
    After,
}

/// Encodes one edit operation into its document entry.
///
/// The match is exhaustive over the known variant set; adding an operation
/// kind to [`EditOp`] will not compile until it is classified here.
pub fn encode_action(op: &EditOp, mappings: &MappingStore, options: &FormatOptions) -> Result<Value> {
    match op {
        EditOp::InsertNode(n) => Ok(one_sided(INSERT_NODE_TAG, n, Side::After, options)),
        EditOp::InsertSubtree(n) => Ok(one_sided(INSERT_SUBTREE_TAG, n, Side::After, options)),
        EditOp::DeleteNode(n) => Ok(one_sided(DELETE_NODE_TAG, n, Side::Before, options)),
        EditOp::DeleteSubtree(n) => Ok(one_sided(DELETE_SUBTREE_TAG, n, Side::Before, options)),
        EditOp::MoveSubtree(n) => mapped(MOVE_SUBTREE_TAG, n, mappings, options),
        EditOp::UpdateNode(n) => mapped(UPDATE_NODE_TAG, n, mappings, options),
    }
}

/// Builds an entry for an insert or delete: a single location pair, the
/// node's own label as `node-str`.
fn one_sided(tag: &str, node: &NodeRef, side: Side, options: &FormatOptions) -> Value {
    let mut entry = open_entry(tag, node, options);

    let span = Span::of(node);
    match side {
        Side::Before => insert_span(&mut entry, BEFORE_START_KEY, BEFORE_END_KEY, span),
        Side::After => insert_span(&mut entry, AFTER_START_KEY, AFTER_END_KEY, span),
    }

    close_entry(&mut entry, node.label());
    Value::Object(entry)
}

/// Builds an entry for a move or update: both location pairs, the after
/// side resolved through the mapping.
///
/// The serialized `node` stays the source-tree node while `node-str` takes
/// the counterpart's label. The asymmetry is part of the wire contract.
fn mapped(
    tag: &'static str,
    node: &NodeRef,
    mappings: &MappingStore,
    options: &FormatOptions,
) -> Result<Value> {
    let counterpart = resolve_counterpart(mappings, node, tag)?;

    let mut entry = open_entry(tag, node, options);
    insert_span(&mut entry, BEFORE_START_KEY, BEFORE_END_KEY, Span::of(node));
    insert_span(&mut entry, AFTER_START_KEY, AFTER_END_KEY, Span::of(counterpart));

    close_entry(&mut entry, counterpart.label());
    Ok(Value::Object(entry))
}

/// Starts an entry with its `type` tag and `node` encoding.
fn open_entry(tag: &str, node: &NodeRef, options: &FormatOptions) -> Map<String, Value> {
    let mut entry = Map::new();
    entry.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));

    let encoded = if options.store_trees {
        encode_subtree(node)
    } else {
        encode_node(node)
    };
    entry.insert(NODE_KEY.to_string(), encoded);
    entry
}

/// Finishes an entry with `node-str` and the reserved `meta` field.
fn close_entry(entry: &mut Map<String, Value>, node_str: &str) {
    entry.insert(NODE_STR_KEY.to_string(), Value::String(node_str.to_string()));
    entry.insert(META_KEY.to_string(), Value::Null);
}

/// Inserts one location pair.
fn insert_span(entry: &mut Map<String, Value>, start_key: &str, end_key: &str, span: Span) {
    entry.insert(start_key.to_string(), Value::from(span.start));
    entry.insert(end_key.to_string(), Value::from(span.end));
}

/// Builds an action entry from already-resolved spans and a label.
///
/// For producers that resolved locations themselves; emits both location
/// pairs and no `node` encoding.
pub fn simple_action(
    tag: &str,
    before: Span,
    after: Span,
    label: &str,
) -> Value {
    let mut entry = Map::new();
    entry.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));
    insert_span(&mut entry, BEFORE_START_KEY, BEFORE_END_KEY, before);
    insert_span(&mut entry, AFTER_START_KEY, AFTER_END_KEY, after);
    entry.insert(NODE_STR_KEY.to_string(), Value::String(label.to_string()));
    Value::Object(entry)
}
