/*!
# Minimum Spanning Tree

Prim's algorithm on undirected weighted graphs. Starting at a root vertex, the cheapest edge
crossing from the tree to a non-tree vertex is accepted until no crossing edge remains.
Candidate edges are kept in a [`PriorityQueue`] keyed by weight; among edges of equal weight
the one that became a candidate first is accepted first, which makes the result deterministic.

Only the component of the root is spanned. For a connected graph the tree has exactly
`vertices_count() - 1` edges.

```
use wgraphs::{prelude::*, algo::*};

let graph: UnGraph<char, u32> = UnGraph::from_weighted_edges(
    ['a', 'b', 'c'],
    [('a', 'b', 4), ('b', 'c', 1), ('a', 'c', 2)],
).unwrap();

let tree = graph.minimum_spanning_tree().unwrap();
assert_eq!(tree.edges(), &[('a', 'c', 2), ('c', 'b', 1)]);
assert_eq!(*tree.total_weight(), 3);
```
*/

use super::*;
use crate::{
    error::{GraphError, Result},
    utils::PriorityQueue,
    weight::{CheckedWeights, WeightOps},
};
use tracing::{debug, warn};

/// Edges of a spanning tree in the order they were accepted, with their total weight
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<K, W> {
    edges: Vec<(K, K, W)>,
    total_weight: W,
}

impl<K, W> SpanningTree<K, W> {
    /// Tree edges as `(tree endpoint, new endpoint, weight)`
    pub fn edges(&self) -> &[(K, K, W)] {
        &self.edges
    }

    /// Sum of all tree edge weights
    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }

    /// Number of tree edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the tree has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the tree and returns its edges
    pub fn into_edges(self) -> Vec<(K, K, W)> {
        self.edges
    }
}

/// Configurable Prim solver.
///
/// By default the search starts at the first vertex in enumeration order and uses
/// [`CheckedWeights`] to sum up the tree weight.
pub struct PrimMst<'a, G>
where
    G: KeyedGraph + WeightedAdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    root: Option<G::Key>,
    ops: &'a dyn WeightOps<G::Weight>,
}

impl<'a, G> PrimMst<'a, G>
where
    G: KeyedGraph + WeightedAdjacencyList + GraphType<Dir = Undirected>,
    G::Weight: Clone + PartialOrd,
{
    /// Creates a solver using [`CheckedWeights`]
    pub fn new(graph: &'a G) -> Self
    where
        CheckedWeights: WeightOps<G::Weight>,
    {
        Self::with_weight_ops(graph, &CheckedWeights)
    }

    /// Creates a solver using a custom capability, e.g. [`FloatWeights`](crate::weight::FloatWeights)
    pub fn with_weight_ops(graph: &'a G, ops: &'a dyn WeightOps<G::Weight>) -> Self {
        Self {
            graph,
            root: None,
            ops,
        }
    }

    /// Sets the vertex the tree is grown from
    pub fn set_root(&mut self, root: &G::Key) {
        self.root = Some(root.clone());
    }

    /// Chainable version of [`Self::set_root`]
    pub fn root(mut self, root: &G::Key) -> Self {
        self.set_root(root);
        self
    }

    /// Sets the capability used to sum up the tree weight
    pub fn set_weight_ops(&mut self, ops: &'a dyn WeightOps<G::Weight>) {
        self.ops = ops;
    }

    /// Chainable version of [`Self::set_weight_ops`]
    pub fn weight_ops(mut self, ops: &'a dyn WeightOps<G::Weight>) -> Self {
        self.set_weight_ops(ops);
        self
    }

    /// Computes the minimum spanning tree of the root's component.
    /// An empty graph yields an empty tree.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if a configured root is not part of the graph,
    /// - [`GraphError::Overflow`] if the total weight leaves the range of the weight type.
    pub fn run(&self) -> Result<SpanningTree<G::Key, G::Weight>> {
        let root = match &self.root {
            Some(key) => self
                .graph
                .node_of(key)
                .ok_or_else(|| GraphError::vertex_not_found(key))?,
            None => match self.graph.nodes().next() {
                Some(u) => u,
                None => {
                    return Ok(SpanningTree {
                        edges: Vec::new(),
                        total_weight: self.ops.zero(),
                    });
                }
            },
        };

        let mut in_tree = NodeBitSet::new(self.graph.node_bound() as NumNodes);
        let mut queue = PriorityQueue::new();
        let mut edges = Vec::with_capacity(self.graph.len().saturating_sub(1));
        let mut total_weight = self.ops.zero();

        in_tree.set_bit(root);
        self.push_candidates(root, &in_tree, &mut queue);

        while let Some((weight, (u, v))) = queue.pop() {
            if in_tree.set_bit(v) {
                continue;
            }

            total_weight = self.ops.checked_add(&total_weight, &weight)?;
            edges.push((
                self.graph.key_of(u).clone(),
                self.graph.key_of(v).clone(),
                weight,
            ));

            self.push_candidates(v, &in_tree, &mut queue);
        }

        if edges.len() + 1 < self.graph.len() {
            warn!(
                spanned = edges.len() + 1,
                vertices = self.graph.len(),
                "graph is disconnected; spanning only the component of the root"
            );
        }
        debug!(edges = edges.len(), "computed minimum spanning tree");

        Ok(SpanningTree {
            edges,
            total_weight,
        })
    }

    fn push_candidates(
        &self,
        u: Node,
        in_tree: &NodeBitSet,
        queue: &mut PriorityQueue<G::Weight, (Node, Node)>,
    ) {
        for (v, weight) in self.graph.weighted_neighbors_of(u) {
            if !in_tree.get_bit(v) {
                let weight = weight.cloned().unwrap_or_else(|| self.ops.one());
                queue.push(weight, (u, v));
            }
        }
    }
}

/// Minimum spanning trees exposed directly on undirected weighted graphs
pub trait MinimumSpanningTree:
    KeyedGraph + WeightedAdjacencyList + GraphType<Dir = Undirected>
{
    /// Runs [`PrimMst`] from the first vertex with [`CheckedWeights`]
    fn minimum_spanning_tree(&self) -> Result<SpanningTree<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd,
        CheckedWeights: WeightOps<Self::Weight>;
}

impl<G> MinimumSpanningTree for G
where
    G: KeyedGraph + WeightedAdjacencyList + GraphType<Dir = Undirected>,
{
    fn minimum_spanning_tree(&self) -> Result<SpanningTree<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd,
        CheckedWeights: WeightOps<Self::Weight>,
    {
        PrimMst::new(self).run()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{testing::*, weight::FloatWeights};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn example_graph() -> UnGraph<&'static str, u32> {
        Graph::from_weighted_edges(
            ["S", "A", "B", "C", "D", "T"],
            [
                ("S", "A", 7),
                ("S", "C", 8),
                ("A", "C", 3),
                ("A", "B", 6),
                ("C", "B", 4),
                ("C", "D", 3),
                ("B", "D", 2),
                ("B", "T", 5),
                ("D", "T", 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn prim_in_example() {
        let graph = example_graph();
        let tree = graph.minimum_spanning_tree().unwrap();

        assert_eq!(tree.len(), graph.vertices_count() - 1);
        assert_eq!(*tree.total_weight(), 17);
        assert_eq!(
            tree.edges(),
            &[
                ("S", "A", 7),
                ("A", "C", 3),
                ("C", "D", 3),
                ("D", "B", 2),
                ("D", "T", 2)
            ]
        );
    }

    #[test]
    fn configured_root() {
        let graph = example_graph();
        let tree = PrimMst::new(&graph).root(&"T").run().unwrap();

        assert_eq!(tree.edges()[0], ("T", "D", 2));
        assert_eq!(*tree.total_weight(), 17);

        assert_eq!(
            PrimMst::new(&graph).root(&"X").run(),
            Err(GraphError::VertexNotFound("\"X\"".into()))
        );
    }

    #[test]
    fn ties_follow_insertion_order() {
        let graph: UnGraph<u32, u32> =
            Graph::from_weighted_edges(0..3, [(0, 1, 1), (0, 2, 1), (1, 2, 1)]).unwrap();
        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.into_edges(), vec![(0, 1, 1), (0, 2, 1)]);
    }

    #[test]
    fn disconnected_graph_spans_root_component() {
        let graph: UnGraph<u32, u32> =
            Graph::from_weighted_edges(0..5, [(0, 1, 3), (1, 2, 1), (3, 4, 1)]).unwrap();

        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(*tree.total_weight(), 4);

        let tree = PrimMst::new(&graph).root(&4).run().unwrap();
        assert_eq!(tree.into_edges(), vec![(4, 3, 1)]);
    }

    #[test]
    fn empty_and_unweighted_graphs() {
        let graph: UnGraph<u32, u32> = Graph::new();
        assert!(graph.minimum_spanning_tree().unwrap().is_empty());

        let graph: UnGraph<u32, u32> =
            Graph::from_edges(0..4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(*graph.minimum_spanning_tree().unwrap().total_weight(), 3);
    }

    #[test]
    fn overflow_is_reported() {
        let graph: UnGraph<u32, u8> =
            Graph::from_weighted_edges(0..3, [(0, 1, 200), (1, 2, 100)]).unwrap();
        assert_eq!(graph.minimum_spanning_tree(), Err(GraphError::Overflow));
    }

    #[test]
    fn float_weights() {
        let graph: UnGraph<char, f64> = Graph::from_weighted_edges(
            ['x', 'y', 'z'],
            [('x', 'y', 0.25), ('y', 'z', 0.5), ('x', 'z', 0.125)],
        )
        .unwrap();

        let tree = PrimMst::with_weight_ops(&graph, &FloatWeights).run().unwrap();
        assert_eq!(*tree.total_weight(), 0.375);
    }

    #[test]
    fn minimal_among_all_spanning_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in 2..=8u32 {
            for _ in 0..20 {
                let m = (2 * n).min(12);
                let graph = random_weighted_connected_graph(rng, n, m, 10);
                let tree = graph.minimum_spanning_tree().unwrap();

                assert_eq!(tree.len() as u32, n - 1);
                assert_eq!(Some(*tree.total_weight()), brute_force_mst_weight(&graph));
            }
        }
    }
}
