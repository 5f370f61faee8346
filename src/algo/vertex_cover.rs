/*!
# Vertex Cover

Greedy 2-approximation of a minimum vertex cover. A depth-first search inspects every edge
`(u, v)` once from its source; if neither endpoint is covered yet, both are added.
The edges that triggered an insertion form a matching, so the cover is at most twice as large
as an optimal one.

```
use wgraphs::{prelude::*, algo::*};

let graph: UnGraph<u32> = UnGraph::from_edges(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
assert_eq!(graph.approx_vertex_cover(), vec![0, 1, 2, 3]);
```
*/

use super::*;
use tracing::debug;

/// Iterative depth-first search computing the greedy cover on node level
pub struct GreedyVertexCover<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    in_cover: NodeBitSet,
    cover: Vec<Node>,
    stack: Vec<(Node, NumNodes)>,
}

impl<'a, G> GreedyVertexCover<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let n = graph.node_bound();
        Self {
            graph,
            visited: NodeBitSet::new(n as NumNodes),
            in_cover: NodeBitSet::new(n as NumNodes),
            cover: Vec::new(),
            stack: Vec::with_capacity(32),
        }
    }

    fn cover_edge(&mut self, u: Node, v: Node) {
        if self.in_cover.get_bit(u) || self.in_cover.get_bit(v) {
            return;
        }

        self.in_cover.set_bit(u);
        self.cover.push(u);
        if !self.in_cover.set_bit(v) {
            self.cover.push(v);
        }
    }

    /// Returns the cover in the order vertices were added
    pub fn compute(mut self) -> Vec<Node> {
        let graph = self.graph;
        for root in graph.nodes() {
            if self.visited.set_bit(root) {
                continue;
            }

            self.stack.push((root, 0));

            while let Some(frame) = self.stack.last_mut() {
                let u = frame.0;
                if frame.1 == self.graph.degree_of(u) {
                    self.stack.pop();
                    continue;
                }

                let v = self.graph.ith_neighbor(u, frame.1);
                frame.1 += 1;

                self.cover_edge(u, v);
                if !self.visited.set_bit(v) {
                    self.stack.push((v, 0));
                }
            }
        }

        self.cover
    }
}

/// Approximate vertex covers of keyed graphs
pub trait VertexCover: KeyedGraph + AdjacencyList {
    /// Returns a vertex cover of at most twice the minimum size, in the order vertices were
    /// added. For directed graphs edge orientation is irrelevant for being covered.
    fn approx_vertex_cover(&self) -> Vec<Self::Key>;
}

impl<G> VertexCover for G
where
    G: KeyedGraph + AdjacencyList,
{
    fn approx_vertex_cover(&self) -> Vec<Self::Key> {
        let cover = GreedyVertexCover::new(self).compute();
        debug!(size = cover.len(), "computed approximate vertex cover");
        self.keys_of(cover)
    }
}
