//! The diff input record.

use crate::mapping::MappingStore;
use crate::script::EditScript;
use crate::tree::SourceTree;

/// A complete structural diff between two versions of a parsed file.
///
/// Bundles everything an upstream matcher/script-generator pipeline
/// produced: the two trees, the node correspondence table between them,
/// and the edit script derived from that correspondence. All fields are
/// immutable inputs to the serializer.
#[derive(Debug)]
pub struct Diff {
    /// The before-tree with its originating path.
    pub src: SourceTree,
    /// The after-tree with its originating path.
    pub dst: SourceTree,
    /// The src↔dst node correspondence table.
    pub mappings: MappingStore,
    /// The ordered edit script.
    pub edit_script: EditScript,
}

impl Diff {
    /// Creates a diff from its four parts.
    pub fn new(
        src: SourceTree,
        dst: SourceTree,
        mappings: MappingStore,
        edit_script: EditScript,
    ) -> Self {
        Diff {
            src,
            dst,
            mappings,
            edit_script,
        }
    }
}
