//! Node and tree snapshot encoding.
//!
//! Encoders are pure functions from nodes to `serde_json` values. A node
//! encodes to `{label, type}`; a subtree adds a `children` array in source
//! order; a tree snapshot wraps the subtree with its file path.

use serde_json::{Map, Value};

use crate::tree::{Node, NodeRef};

use super::{AST_KEY, CHILDREN_KEY, LABEL_KEY, PATH_KEY, TYPE_KEY};

/// Encodes a single node without its children.
pub fn encode_node(node: &Node) -> Value {
    Value::Object(node_map(node))
}

/// Encodes a node and its full subtree, preserving child order.
///
/// Assembly runs over an explicit work stack in post-order; source trees
/// may be arbitrarily nested and call recursion would overflow on them.
pub fn encode_subtree(node: &NodeRef) -> Value {
    enum Frame<'a> {
        Visit(&'a NodeRef),
        Assemble(&'a Node),
    }

    let mut stack = vec![Frame::Visit(node)];
    let mut done: Vec<Value> = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(n) => {
                stack.push(Frame::Assemble(n.as_ref()));
                // Reversed so children are visited, and thus assembled,
                // in source order.
                for child in n.children().iter().rev() {
                    stack.push(Frame::Visit(child));
                }
            }
            Frame::Assemble(n) => {
                let children = done.split_off(done.len() - n.children().len());
                let mut obj = node_map(n);
                obj.insert(CHILDREN_KEY.to_string(), Value::Array(children));
                done.push(Value::Object(obj));
            }
        }
    }

    done.pop().expect("root value present after traversal")
}

/// Encodes a tree snapshot: the file path plus the full subtree.
pub fn tree_snapshot(root: &NodeRef, path: &str) -> Value {
    let mut snapshot = Map::new();
    snapshot.insert(PATH_KEY.to_string(), Value::String(path.to_string()));
    snapshot.insert(AST_KEY.to_string(), encode_subtree(root));
    Value::Object(snapshot)
}

/// The `{label, type}` map shared by shallow and subtree encodings.
fn node_map(node: &Node) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert(LABEL_KEY.to_string(), Value::String(node.label().to_string()));
    obj.insert(
        TYPE_KEY.to_string(),
        Value::String(node.node_type().to_string()),
    );
    obj
}
