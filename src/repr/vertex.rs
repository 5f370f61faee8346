use crate::*;

/// A vertex of a [`Graph`](super::Graph), as returned by
/// [`Graph::vertex`](super::Graph::vertex).
///
/// The vertex owns the indices of its outgoing edge records and, in directed graphs, of its
/// incoming edge records. Undirected graphs keep only the outgoing list since every incident
/// edge has a half starting at this vertex.
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    pub(crate) key: K,
    pub(crate) out_edges: Vec<EdgeId>,
    pub(crate) in_edges: Vec<EdgeId>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }

    /// The key identifying this vertex
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of outgoing edges; for undirected graphs the number of incident edges
    pub fn degree(&self) -> NumNodes {
        self.out_edges.len() as NumNodes
    }

    /// Number of incoming edges.
    /// Undirected graphs do not track incoming edges separately and always report `0`;
    /// use [`Vertex::degree`] there.
    pub fn in_degree(&self) -> NumNodes {
        self.in_edges.len() as NumNodes
    }

    pub(crate) fn detach_out(&mut self, edge: EdgeId) {
        if let Some(pos) = self.out_edges.iter().position(|&e| e == edge) {
            // keep insertion order of the remaining edges
            self.out_edges.remove(pos);
        }
    }

    pub(crate) fn detach_in(&mut self, edge: EdgeId) {
        if let Some(pos) = self.in_edges.iter().position(|&e| e == edge) {
            self.in_edges.remove(pos);
        }
    }
}
