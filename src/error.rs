/*!
# Errors

Every fallible operation of this crate returns [`Result<T>`] with a [`GraphError`].
Errors are raised at the point of violation and before any structural change, so a failed
mutation leaves the graph exactly as it was.

Keys are rendered into the error with their `Debug` representation.
*/

use std::fmt::Debug;

use thiserror::Error;

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A referenced vertex key is not part of the graph
    #[error("vertex {0} not found")]
    VertexNotFound(String),

    /// `add_vertex` was called with a key that is already present
    #[error("vertex {0} already exists")]
    DuplicateVertex(String),

    /// `add_edge` was called for an edge that is already present
    #[error("edge ({0}, {1}) already exists")]
    DuplicateEdge(String, String),

    /// `remove_edge` was called for an edge that does not exist
    #[error("edge ({0}, {1}) not found")]
    EdgeNotFound(String, String),

    /// Source or sink of a flow computation is missing from the graph
    #[error("invalid flow endpoints: source {0}, sink {1}")]
    InvalidEndpoints(String, String),

    /// Weight arithmetic left the representable range
    #[error("weight arithmetic overflowed")]
    Overflow,
}

impl GraphError {
    pub(crate) fn vertex_not_found<K: Debug>(key: &K) -> Self {
        Self::VertexNotFound(format!("{key:?}"))
    }

    pub(crate) fn duplicate_vertex<K: Debug>(key: &K) -> Self {
        Self::DuplicateVertex(format!("{key:?}"))
    }

    pub(crate) fn duplicate_edge<K: Debug>(source: &K, target: &K) -> Self {
        Self::DuplicateEdge(format!("{source:?}"), format!("{target:?}"))
    }

    pub(crate) fn edge_not_found<K: Debug>(source: &K, target: &K) -> Self {
        Self::EdgeNotFound(format!("{source:?}"), format!("{target:?}"))
    }

    pub(crate) fn invalid_endpoints<K: Debug>(source: &K, sink: &K) -> Self {
        Self::InvalidEndpoints(format!("{source:?}"), format!("{sink:?}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_render_keys() {
        assert_eq!(
            GraphError::vertex_not_found(&"A").to_string(),
            "vertex \"A\" not found"
        );
        assert_eq!(
            GraphError::duplicate_edge(&1, &2).to_string(),
            "edge (1, 2) already exists"
        );
        assert_eq!(
            GraphError::Overflow.to_string(),
            "weight arithmetic overflowed"
        );
    }
}
