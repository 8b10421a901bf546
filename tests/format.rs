//! Scenario tests for the diff document format.
//!
//! Trees here are built by hand with the character offsets an upstream
//! Java parser/matcher produces for the corresponding sources, so the
//! location fields can be asserted verbatim.

use serde_json::Value;

use treediff_format::{
    to_json_string, Diff, EditOp, EditScript, FormatOptions, MappingStore, Node, SourceTree,
    ToolInfo, TreeDiffBuilder,
};

/// Finds the first action entry with the given type tag.
fn find_action<'a>(document: &'a Value, tag: &str) -> &'a Value {
    document["diff"]
        .as_array()
        .expect("diff is an array")
        .iter()
        .find(|entry| entry["type"] == tag)
        .unwrap_or_else(|| panic!("no {} entry in document", tag))
}

fn diff_of(
    src_root: treediff_format::NodeRef,
    dst_root: treediff_format::NodeRef,
    mappings: MappingStore,
    ops: Vec<EditOp>,
) -> Diff {
    Diff::new(
        SourceTree::new(src_root, "before/Main.java"),
        SourceTree::new(dst_root, "after/Main.java"),
        mappings,
        EditScript::from(ops),
    )
}

// Before: `a.b();`  After: `a.b(1);` — the literal `1` appears at 56..57.
#[test]
fn insert_node_location() {
    let src_call = Node::leaf("b", "MethodInvocation", 52, 58);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 70, vec![src_call.clone()]);

    let inserted = Node::leaf("1", "NumberLiteral", 56, 57);
    let dst_call = Node::new("b", "MethodInvocation", 52, 59, vec![inserted.clone()]);
    let dst_root = Node::new("Main", "TypeDeclaration", 0, 70, vec![dst_call.clone()]);

    let mut mappings = MappingStore::new();
    mappings.link(src_call, dst_call);

    let diff = diff_of(src_root, dst_root, mappings, vec![EditOp::InsertNode(inserted)]);
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "insert-node");
    assert_eq!(entry["location-after-char-start"], 56);
    assert_eq!(entry["location-after-char-end"], 57);
    assert_eq!(entry["node-str"], "1");
    assert!(entry.get("location-before-char-start").is_none());
    assert!(entry.get("location-before-char-end").is_none());
}

// Before: `a.b();`  After: `a.b(a + 2);` — the expression spans 56..61.
#[test]
fn insert_subtree_location() {
    let src_root = Node::leaf("Main", "TypeDeclaration", 0, 70);

    let lhs = Node::leaf("a", "SimpleName", 56, 57);
    let rhs = Node::leaf("2", "NumberLiteral", 60, 61);
    let inserted = Node::new("+", "InfixExpression", 56, 61, vec![lhs, rhs]);
    let dst_root = Node::new("Main", "TypeDeclaration", 0, 75, vec![inserted.clone()]);

    let diff = diff_of(
        src_root,
        dst_root,
        MappingStore::new(),
        vec![EditOp::InsertSubtree(inserted)],
    );
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "insert-subtree");
    assert_eq!(entry["location-after-char-start"], 56);
    assert_eq!(entry["location-after-char-end"], 61);
}

// Before: `a.b();`  After: the call body is empty — the call spans 52..58.
#[test]
fn delete_node_location() {
    let deleted = Node::leaf("b", "MethodInvocation", 52, 58);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 70, vec![deleted.clone()]);
    let dst_root = Node::leaf("Main", "TypeDeclaration", 0, 64);

    let diff = diff_of(
        src_root,
        dst_root,
        MappingStore::new(),
        vec![EditOp::DeleteNode(deleted)],
    );
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "delete-node");
    assert_eq!(entry["location-before-char-start"], 52);
    assert_eq!(entry["location-before-char-end"], 58);
    assert!(entry.get("location-after-char-start").is_none());
    assert!(entry.get("location-after-char-end").is_none());
}

// Before: `a.b(a+2);`  After: `a.b();` — the argument spans 56..59.
#[test]
fn delete_subtree_location() {
    let lhs = Node::leaf("a", "SimpleName", 56, 57);
    let rhs = Node::leaf("2", "NumberLiteral", 58, 59);
    let deleted = Node::new("+", "InfixExpression", 56, 59, vec![lhs, rhs]);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 73, vec![deleted.clone()]);
    let dst_root = Node::leaf("Main", "TypeDeclaration", 0, 70);

    let diff = diff_of(
        src_root,
        dst_root,
        MappingStore::new(),
        vec![EditOp::DeleteSubtree(deleted)],
    );
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "delete-subtree");
    assert_eq!(entry["location-before-char-start"], 56);
    assert_eq!(entry["location-before-char-end"], 59);
}

// A call moved from one method body to another: 52..58 before, 118..124
// after. The after side must come from the mapping, not the moved node.
#[test]
fn move_subtree_locations() {
    let moved = Node::leaf("b", "MethodInvocation", 52, 58);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 130, vec![moved.clone()]);

    let counterpart = Node::leaf("b", "MethodInvocation", 118, 124);
    let dst_root = Node::new("Main", "TypeDeclaration", 0, 130, vec![counterpart.clone()]);

    let mut mappings = MappingStore::new();
    mappings.link(moved.clone(), counterpart);

    let diff = diff_of(src_root, dst_root, mappings, vec![EditOp::MoveSubtree(moved)]);
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "move-subtree");
    assert_eq!(entry["location-before-char-start"], 52);
    assert_eq!(entry["location-before-char-end"], 58);
    assert_eq!(entry["location-after-char-start"], 118);
    assert_eq!(entry["location-after-char-end"], 124);
}

// Before: `a.b(222333);`  After: `a.b(10);` — 56..62 becomes 56..58 and
// node-str carries the after-side label.
#[test]
fn update_node_locations_and_label() {
    let updated = Node::leaf("222333", "NumberLiteral", 56, 62);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 76, vec![updated.clone()]);

    let counterpart = Node::leaf("10", "NumberLiteral", 56, 58);
    let dst_root = Node::new("Main", "TypeDeclaration", 0, 72, vec![counterpart.clone()]);

    let mut mappings = MappingStore::new();
    mappings.link(updated.clone(), counterpart);

    let diff = diff_of(src_root, dst_root, mappings, vec![EditOp::UpdateNode(updated)]);
    let document = TreeDiffBuilder::new().build(&diff).expect("build succeeds");

    let entry = find_action(&document, "update-node");
    assert_eq!(entry["location-before-char-start"], 56);
    assert_eq!(entry["location-before-char-end"], 62);
    assert_eq!(entry["location-after-char-start"], 56);
    assert_eq!(entry["location-after-char-end"], 58);
    assert_eq!(entry["node-str"], "10");
    assert_eq!(entry["node"]["label"], "222333");
}

// Full-detail document: snapshots, mapping, tool metadata, and script
// order all present; serializing twice is byte-identical.
#[test]
fn full_document_round_trip() {
    let deleted = Node::leaf("old", "SimpleName", 20, 23);
    let kept_src = Node::leaf("foo", "SimpleName", 30, 33);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 40, vec![deleted.clone(), kept_src.clone()]);

    let kept_dst = Node::leaf("foo", "SimpleName", 27, 30);
    let inserted = Node::leaf("new", "SimpleName", 34, 37);
    let dst_root = Node::new("Main", "TypeDeclaration", 0, 40, vec![kept_dst.clone(), inserted.clone()]);

    let mut mappings = MappingStore::new();
    mappings.link(src_root.clone(), dst_root.clone());
    mappings.link(kept_src, kept_dst);

    let diff = diff_of(
        src_root,
        dst_root,
        mappings,
        vec![EditOp::DeleteNode(deleted), EditOp::InsertNode(inserted)],
    );

    let builder = TreeDiffBuilder::with_options(FormatOptions::new(true, true));
    let tool_info = ToolInfo::new("gumtree", "3.0.0", "SimpleGumtree", "SimplifiedChawathe");
    let document = builder
        .build_with_tool_info(&diff, &tool_info)
        .expect("build succeeds");

    // Script order is preserved verbatim.
    let tags: Vec<&str> = document["diff"]
        .as_array()
        .expect("diff is an array")
        .iter()
        .map(|e| e["type"].as_str().expect("type tag"))
        .collect();
    assert_eq!(tags, vec!["delete-node", "insert-node"]);

    assert_eq!(document["tool-info"]["name"], "gumtree");
    assert_eq!(document["before-file"]["path"], "before/Main.java");
    assert_eq!(document["before-file"]["ast"]["label"], "Main");
    assert_eq!(document["after-file"]["ast"]["children"][1]["label"], "new");
    assert_eq!(document["mapping"].as_array().expect("array").len(), 2);

    // Byte-identical across rebuilds, and parseable back to the same value.
    let rebuilt = builder
        .build_with_tool_info(&diff, &tool_info)
        .expect("build succeeds");
    let serialized = to_json_string(&document);
    assert_eq!(serialized, to_json_string(&rebuilt));

    let reparsed: Value = serde_json::from_str(&serialized).expect("document parses back");
    assert_eq!(reparsed, document);
}

// An unmapped move poisons the whole build; no partial document comes back.
#[test]
fn inconsistent_script_fails_whole_build() {
    let moved = Node::leaf("b", "MethodInvocation", 52, 58);
    let src_root = Node::new("Main", "TypeDeclaration", 0, 70, vec![moved.clone()]);
    let dst_root = Node::leaf("Main", "TypeDeclaration", 0, 70);

    let ok_insert = Node::leaf("1", "NumberLiteral", 56, 57);
    let diff = diff_of(
        src_root,
        dst_root,
        MappingStore::new(),
        vec![EditOp::InsertNode(ok_insert), EditOp::MoveSubtree(moved)],
    );

    let err = TreeDiffBuilder::new()
        .build(&diff)
        .expect_err("unmapped move must fail the build");
    assert!(err.to_string().contains("no counterpart"));
}
