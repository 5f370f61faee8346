use std::fmt::{Debug, Display};

use crate::Node;

/// Index of an edge record in the arena of a graph
pub type EdgeId = u32;

/// Edge-Value that is considered invalid
pub const INVALID_EDGE: EdgeId = EdgeId::MAX;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge between two arena indices.
/// It is up to the context whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }
}

/// A single stored edge half.
///
/// For directed graphs every logical edge is exactly one record. For undirected graphs a
/// logical edge `{u, v}` is stored as the two records `u -> v` and `v -> u` which reference each
/// other through `twin`. A self-loop is a single record that is its own twin.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EdgeRecord<W> {
    pub(crate) source: Node,
    pub(crate) target: Node,
    pub(crate) weight: Option<W>,
    pub(crate) twin: EdgeId,
}

/// Borrowed view of an edge as seen through the keyed interface of a graph
pub struct EdgeRef<'a, K, W> {
    pub(crate) source: &'a K,
    pub(crate) target: &'a K,
    pub(crate) weight: Option<&'a W>,
}

impl<K, W> Clone for EdgeRef<'_, K, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, W> Copy for EdgeRef<'_, K, W> {}

impl<K: Debug, W: Debug> Debug for EdgeRef<'_, K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{:?} -> {:?} [{:?}]", self.source, self.target, w),
            None => write!(f, "{:?} -> {:?}", self.source, self.target),
        }
    }
}

impl<'a, K, W> EdgeRef<'a, K, W> {
    /// Key of the vertex the edge starts at
    pub fn source(&self) -> &'a K {
        self.source
    }

    /// Key of the vertex the edge points to
    pub fn target(&self) -> &'a K {
        self.target
    }

    /// Weight attached to the edge, if any
    pub fn weight(&self) -> Option<&'a W> {
        self.weight
    }
}
