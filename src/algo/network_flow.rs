/*!
# Maximum Flow

Edmonds–Karp augmenting-path algorithm for the maximum `s`-`t` flow in a weighted graph.

Every edge `(u, v)` with weight `w` becomes a forward arc `u -> v` with residual capacity `w`
and a paired backward arc `v -> u` with residual capacity zero; edges without a weight have
capacity [`WeightOps::one`]. Arcs are stored in flat arrays where the partner of arc `i` is
`i ^ 1`. Each round runs a BFS over arcs with positive residual capacity, so the augmenting path
found is a shortest one, which bounds the number of rounds by `O(V·E)`.

All arithmetic goes through a [`WeightOps`] capability and is checked: an overflowing flow value
is reported as [`GraphError::Overflow`](crate::error::GraphError::Overflow).
Undirected graphs are accepted; each edge half is treated as an arc of its own.

After the last round, the nodes still reachable from the source form the source side of a
minimum cut, whose crossing edges are reported in [`FlowResult::min_cut_edges`].

```
use wgraphs::{prelude::*, algo::*};

let graph: DiGraph<&str, u32> = DiGraph::from_weighted_edges(
    ["s", "a", "b", "t"],
    [("s", "a", 3), ("s", "b", 2), ("a", "b", 5), ("a", "t", 2), ("b", "t", 3)],
).unwrap();

let flow = graph.max_flow(&"s", &"t").unwrap();
assert_eq!(*flow.value(), 5);
assert_eq!(flow.min_cut_edges(), &[("s", "a"), ("s", "b")]);
```
*/

use std::collections::VecDeque;

use super::*;
use crate::{
    error::{GraphError, Result},
    weight::{CheckedWeights, WeightOps},
};
use tracing::{debug, trace};

/// Value of a maximum flow together with a minimum cut certifying it
#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult<K, W> {
    value: W,
    source_side: Vec<K>,
    cut_edges: Vec<(K, K)>,
    augmentations: usize,
}

impl<K, W> FlowResult<K, W> {
    /// Value of the maximum flow
    pub fn value(&self) -> &W {
        &self.value
    }

    /// Consumes the result and returns the value of the maximum flow
    pub fn into_value(self) -> W {
        self.value
    }

    /// Vertices reachable from the source in the final residual network, in enumeration order
    pub fn source_side(&self) -> &[K] {
        &self.source_side
    }

    /// Edges from the source side to the sink side; their total capacity equals the flow value
    pub fn min_cut_edges(&self) -> &[(K, K)] {
        &self.cut_edges
    }

    /// Number of augmenting paths used
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }
}

/// Residual network over flat arc arrays
struct ResidualNetwork<W> {
    heads: Vec<Node>,
    residual: Vec<W>,
    arcs_of: Vec<Vec<EdgeId>>,
}

impl<W> ResidualNetwork<W>
where
    W: Clone,
{
    fn new<G>(graph: &G, ops: &dyn WeightOps<W>) -> Self
    where
        G: WeightedAdjacencyList<Weight = W>,
    {
        // every stored edge yields a forward and a backward arc
        let arcs = 2 * graph.number_of_edges() as usize;
        let mut network = Self {
            heads: Vec::with_capacity(arcs),
            residual: Vec::with_capacity(arcs),
            arcs_of: vec![Vec::new(); graph.node_bound()],
        };

        for u in graph.nodes() {
            for (v, weight) in graph.weighted_neighbors_of(u) {
                // a loop never lies on a shortest augmenting path
                if u == v {
                    continue;
                }
                let capacity = weight.cloned().unwrap_or_else(|| ops.one());
                network.add_arc(u, v, capacity, ops.zero());
            }
        }

        network
    }

    fn add_arc(&mut self, u: Node, v: Node, capacity: W, zero: W) {
        let forward = self.heads.len() as EdgeId;
        self.heads.extend([v, u]);
        self.residual.extend([capacity, zero]);
        self.arcs_of[u as usize].push(forward);
        self.arcs_of[v as usize].push(forward ^ 1);
    }

    fn tail(&self, arc: EdgeId) -> Node {
        self.heads[(arc ^ 1) as usize]
    }
}

/// Configurable Edmonds–Karp solver.
///
/// Weights are combined with [`CheckedWeights`] unless another capability is configured via
/// [`EdmondsKarp::weight_ops`].
pub struct EdmondsKarp<'a, G>
where
    G: KeyedGraph + WeightedAdjacencyList,
{
    graph: &'a G,
    source: G::Key,
    sink: G::Key,
    ops: &'a dyn WeightOps<G::Weight>,
}

impl<'a, G> EdmondsKarp<'a, G>
where
    G: KeyedGraph + WeightedAdjacencyList,
    G::Weight: Clone + PartialOrd,
{
    /// Creates a solver for the flow from `source` to `sink` using [`CheckedWeights`]
    pub fn new(graph: &'a G, source: &G::Key, sink: &G::Key) -> Self
    where
        CheckedWeights: WeightOps<G::Weight>,
    {
        Self::with_weight_ops(graph, source, sink, &CheckedWeights)
    }

    /// Creates a solver for the flow from `source` to `sink` using a custom capability,
    /// e.g. [`FloatWeights`](crate::weight::FloatWeights) for floating point capacities
    pub fn with_weight_ops(
        graph: &'a G,
        source: &G::Key,
        sink: &G::Key,
        ops: &'a dyn WeightOps<G::Weight>,
    ) -> Self {
        Self {
            graph,
            source: source.clone(),
            sink: sink.clone(),
            ops,
        }
    }

    /// Sets the capability used for all weight arithmetic
    pub fn set_weight_ops(&mut self, ops: &'a dyn WeightOps<G::Weight>) {
        self.ops = ops;
    }

    /// Chainable version of [`Self::set_weight_ops`]
    pub fn weight_ops(mut self, ops: &'a dyn WeightOps<G::Weight>) -> Self {
        self.set_weight_ops(ops);
        self
    }

    /// Computes a maximum flow and a minimum cut.
    ///
    /// # Errors
    /// - [`GraphError::InvalidEndpoints`] if source or sink is not part of the graph,
    /// - [`GraphError::Overflow`] if the flow value leaves the range of the weight type.
    pub fn run(&self) -> Result<FlowResult<G::Key, G::Weight>> {
        let (s, t) = match (self.graph.node_of(&self.source), self.graph.node_of(&self.sink)) {
            (Some(s), Some(t)) => (s, t),
            _ => return Err(GraphError::invalid_endpoints(&self.source, &self.sink)),
        };

        if s == t {
            return Ok(FlowResult {
                value: self.ops.zero(),
                source_side: vec![self.source.clone()],
                cut_edges: Vec::new(),
                augmentations: 0,
            });
        }

        let mut network = ResidualNetwork::new(self.graph, self.ops);
        let mut predecessor = vec![INVALID_EDGE; self.graph.node_bound()];
        let mut total = self.ops.zero();
        let mut augmentations = 0;

        loop {
            let visited = self.bfs(&network, s, t, &mut predecessor);
            if !visited.get_bit(t) {
                let result = self.extract_cut(&network, visited, total, augmentations);
                debug!(augmentations, "computed maximum flow");
                return Ok(result);
            }

            let mut bottleneck = self.ops.max_value();
            let mut v = t;
            while v != s {
                let arc = predecessor[v as usize];
                if network.residual[arc as usize] < bottleneck {
                    bottleneck = network.residual[arc as usize].clone();
                }
                v = network.tail(arc);
            }

            let mut v = t;
            while v != s {
                let arc = predecessor[v as usize];
                let (fwd, bwd) = (arc as usize, (arc ^ 1) as usize);
                network.residual[fwd] = self.ops.checked_sub(&network.residual[fwd], &bottleneck)?;
                network.residual[bwd] = self.ops.checked_add(&network.residual[bwd], &bottleneck)?;
                v = network.tail(arc);
            }

            total = self.ops.checked_add(&total, &bottleneck)?;
            augmentations += 1;
            trace!(augmentations, "augmented along shortest path");
        }
    }

    /// Breadth-first search over arcs with positive residual capacity.
    /// Returns the set of reached nodes and stores the arc each node was reached by.
    fn bfs(
        &self,
        network: &ResidualNetwork<G::Weight>,
        s: Node,
        t: Node,
        predecessor: &mut [EdgeId],
    ) -> NodeBitSet {
        let zero = self.ops.zero();
        let mut visited = NodeBitSet::new(self.graph.node_bound() as NumNodes);
        let mut queue = VecDeque::from([s]);
        visited.set_bit(s);

        while let Some(u) = queue.pop_front() {
            for &arc in &network.arcs_of[u as usize] {
                let v = network.heads[arc as usize];
                if network.residual[arc as usize] <= zero || visited.set_bit(v) {
                    continue;
                }

                predecessor[v as usize] = arc;
                if v == t {
                    return visited;
                }
                queue.push_back(v);
            }
        }

        visited
    }

    fn extract_cut(
        &self,
        network: &ResidualNetwork<G::Weight>,
        source_side: NodeBitSet,
        value: G::Weight,
        augmentations: usize,
    ) -> FlowResult<G::Key, G::Weight> {
        let cut_edges = (0..network.heads.len() as EdgeId)
            .step_by(2)
            .filter_map(|arc| {
                let (u, v) = (network.tail(arc), network.heads[arc as usize]);
                (source_side.get_bit(u) && !source_side.get_bit(v))
                    .then(|| (self.graph.key_of(u).clone(), self.graph.key_of(v).clone()))
            })
            .collect();

        FlowResult {
            value,
            source_side: self.graph.keys_of(source_side.iter_set_bits()),
            cut_edges,
            augmentations,
        }
    }
}

/// Maximum flow exposed directly on weighted keyed graphs
pub trait MaxFlow: KeyedGraph + WeightedAdjacencyList {
    /// Computes the maximum flow from `source` to `sink` with [`CheckedWeights`].
    /// See [`EdmondsKarp::run`] for errors.
    fn max_flow(
        &self,
        source: &Self::Key,
        sink: &Self::Key,
    ) -> Result<FlowResult<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd,
        CheckedWeights: WeightOps<Self::Weight>;

    /// Computes the maximum flow from `source` to `sink` with a custom capability.
    /// See [`EdmondsKarp::run`] for errors.
    fn max_flow_with(
        &self,
        source: &Self::Key,
        sink: &Self::Key,
        ops: &dyn WeightOps<Self::Weight>,
    ) -> Result<FlowResult<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd;
}

impl<G> MaxFlow for G
where
    G: KeyedGraph + WeightedAdjacencyList,
{
    fn max_flow(
        &self,
        source: &Self::Key,
        sink: &Self::Key,
    ) -> Result<FlowResult<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd,
        CheckedWeights: WeightOps<Self::Weight>,
    {
        EdmondsKarp::new(self, source, sink).run()
    }

    fn max_flow_with(
        &self,
        source: &Self::Key,
        sink: &Self::Key,
        ops: &dyn WeightOps<Self::Weight>,
    ) -> Result<FlowResult<Self::Key, Self::Weight>>
    where
        Self::Weight: Clone + PartialOrd,
    {
        EdmondsKarp::with_weight_ops(self, source, sink, ops).run()
    }
}
