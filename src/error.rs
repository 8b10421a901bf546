//! Error types for tree diff serialization.

use thiserror::Error;

/// Result type alias for serialization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a diff document.
#[derive(Error, Debug)]
pub enum Error {
    /// A move or update operation references a node with no counterpart in
    /// the correspondence table. The edit script and the mapping are
    /// contractually consistent, so a miss here means corrupt upstream
    /// input and aborts the whole build.
    #[error("no counterpart in mapping for {operation} node {id} (`{label}`)")]
    MissingCounterpart {
        /// Canonical type tag of the offending operation.
        operation: &'static str,
        /// Id of the source-tree node that has no mapping entry.
        id: u64,
        /// Label of the source-tree node, for diagnostics.
        label: String,
    },
}
