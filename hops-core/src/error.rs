//! Error types for hops-core.

use thiserror::Error;

/// Result type alias for hops-core operations.
pub type Result<T> = std::result::Result<T, HopsError>;

/// Errors that can occur while loading data or answering a query.
///
/// `DeadEnd` and `Unreachable` are not errors: they are ordinary outcomes of
/// a distance query and live in [`crate::distance::HopDistance`].
#[derive(Error, Debug)]
pub enum HopsError {
    /// Input file could not be read.
    #[error("Unable to open file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A non-blank input line did not carry two tokens.
    #[error("{source_name}:{line}: expected two whitespace-separated tokens, got {content:?}")]
    Parse {
        /// Name of the input (file path or "<edges>"/"<labels>").
        source_name: String,
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The same label was bound to two different nodes.
    #[error("Label '{label}' is bound to both {first} and {second}")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
        /// Node it was first bound to.
        first: String,
        /// Node it was bound to again.
        second: String,
    },

    /// The same node was given two different labels.
    #[error("Node {node} is labelled both '{first}' and '{second}'")]
    DuplicateNode {
        /// The repeated node identifier.
        node: String,
        /// First label seen.
        first: String,
        /// Second label seen.
        second: String,
    },

    /// Edge data references nodes the label data never names.
    #[error("{} node(s) in the edge list have no label (first: {})", .nodes.len(), .nodes.first().map(String::as_str).unwrap_or("-"))]
    UnlabeledNodes {
        /// The unlabelled node identifiers, in graph insertion order.
        nodes: Vec<String>,
    },

    /// A query referenced a label absent from the index.
    #[error("Name does not exist: '{label}'")]
    LabelNotFound {
        /// The label as looked up.
        label: String,
    },

    /// A node on a materialized path has no label to display.
    #[error("Node {node} has no label")]
    MissingLabel {
        /// The node identifier.
        node: String,
    },

    /// No directed path exists between the two nodes.
    #[error("No path from {from} to {to}")]
    NoPath {
        /// Source node identifier.
        from: String,
        /// Target node identifier.
        to: String,
    },
}

impl HopsError {
    /// Whether this error is a per-query problem the caller may recover from
    /// (as opposed to a construction-time failure).
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            HopsError::LabelNotFound { .. }
                | HopsError::MissingLabel { .. }
                | HopsError::NoPath { .. }
        )
    }
}
