/*!
# Graph Operations

Index-level traits that all algorithms in [`crate::algo`] are generic over.
The keyed public interface of the graph store lives on [`Graph`](crate::repr::Graph) itself;
these traits expose the underlying arena indices so that traversals can use flat
per-node arrays instead of hash maps.

All index-level methods **panic** if passed a node that is not live in the graph.
*/

use std::{fmt::Debug, hash::Hash};

use crate::*;

/// Orientation of the edges of a graph, fixed at construction via a type parameter
pub trait Direction: Copy + Default + Debug + Send + Sync + 'static {
    /// *true* for directed graphs
    const DIRECTED: bool;
}

/// Marker for graphs whose edges have an orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for graphs whose edges are traversable from both endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

/// Associates a graph with its edge orientation
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if the edges of the graph are directed
    fn is_directed(&self) -> bool {
        Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of live nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an exclusive upper bound on the index of any live node.
    /// Working arrays indexed by [`Node`] must have at least this length.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live nodes in arena order
    fn nodes(&self) -> impl Iterator<Item = Node> + '_;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (logical) edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open, outgoing) neighborhood of a given vertex
    /// in insertion order of the edges.
    /// ** Panics if `u` is not live **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u` is not live **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the ith (outgoing) neighbor (0-indexed) of a given vertex
    /// ** Panics if `u` is not live or `i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;

    /// Returns all nodes adjacent to `u` regardless of orientation.
    /// For undirected graphs this equals [`AdjacencyList::neighbors_of`], for directed graphs
    /// out-neighbors are followed by in-neighbors.
    /// ** Panics if `u` is not live **
    fn incident_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;
}

/// Adjacency getters that only make sense for directed graphs
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(u, v)`
    #[inline]
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u` is not live **
    fn in_degree_of(&self, u: Node) -> NumNodes;
}

/// Access to edge weights next to the adjacency structure
pub trait WeightedAdjacencyList: AdjacencyList + GraphEdgeOrder {
    type Weight;

    /// Returns the outgoing neighbors of `u` together with the weight of the connecting edge
    /// ** Panics if `u` is not live **
    fn weighted_neighbors_of(
        &self,
        u: Node,
    ) -> impl Iterator<Item = (Node, Option<&Self::Weight>)> + '_;
}

/// Translation between arena indices and user-supplied vertex keys
pub trait KeyedGraph: GraphNodeOrder {
    type Key: Eq + Hash + Clone + Debug;

    /// Returns the key of a live node
    /// ** Panics if `u` is not live **
    fn key_of(&self, u: Node) -> &Self::Key;

    /// Returns the node currently holding `key`, if any
    fn node_of(&self, key: &Self::Key) -> Option<Node>;

    /// Translates a sequence of nodes into owned keys
    fn keys_of<I>(&self, nodes: I) -> Vec<Self::Key>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes.into_iter().map(|u| self.key_of(u).clone()).collect()
    }
}
