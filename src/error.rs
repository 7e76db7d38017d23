//! Error type shared by every fallible graph operation.

/// Failures raised by [`DiGraph`](crate::DiGraph) operations.
///
/// Expected "nothing to do" outcomes (adding an existing node or edge,
/// renaming onto a taken value) are reported as `false`, not as errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node the operation requires as a precondition is not in the graph.
    #[error("node not found in the graph")]
    NodeNotFound,

    /// Writing a listing to its sink failed.
    #[error("failed to write graph listing")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Returns `true` for [`GraphError::NodeNotFound`].
    pub fn is_node_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound)
    }
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
