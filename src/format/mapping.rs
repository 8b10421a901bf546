//! Correspondence table encoding.

use serde_json::{Map, Value};

use crate::mapping::MappingStore;
use crate::tree::Node;

use super::{DST_KEY, END_KEY, NODE_STR_KEY, SRC_KEY, START_KEY};

/// Encodes the full correspondence table as a JSON array.
///
/// One entry per (src, dst) pair, each side rendered as
/// `{node-str, start, end}`. The enumeration is total and duplicate-free;
/// entry order carries no meaning but follows the table's own order so
/// identical inputs serialize identically.
pub fn encode_mappings(mappings: &MappingStore) -> Value {
    let entries = mappings
        .iter()
        .map(|(src, dst)| {
            let mut pair = Map::new();
            pair.insert(SRC_KEY.to_string(), endpoint(src));
            pair.insert(DST_KEY.to_string(), endpoint(dst));
            Value::Object(pair)
        })
        .collect();
    Value::Array(entries)
}

/// Renders one side of a pair.
fn endpoint(node: &Node) -> Value {
    let mut obj = Map::new();
    obj.insert(
        NODE_STR_KEY.to_string(),
        Value::String(node.label().to_string()),
    );
    obj.insert(START_KEY.to_string(), Value::from(node.start()));
    obj.insert(END_KEY.to_string(), Value::from(node.end()));
    Value::Object(obj)
}
