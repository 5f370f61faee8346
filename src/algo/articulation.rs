/*!
# Articulation Points

Tarjan's low-link search for undirected graphs. A single depth-first search assigns every node
a discovery time `disc` and a low-link value `low`, the smallest discovery time reachable from
its DFS subtree using at most one back edge. From these,
- a non-root node `u` is an *articulation point* iff it has a DFS child `v` with `low[v] >= disc[u]`,
- a DFS root is an articulation point iff it has more than one DFS child,
- a tree edge `(u, v)` is a *bridge* iff `low[v] > disc[u]` (see [`Bridges`](super::Bridges)).

The search restarts at every undiscovered node, so disconnected graphs are handled component
by component and the results are united.

```
use wgraphs::{prelude::*, algo::*};

//  a - b - c
//   \ /
//    d
let graph: UnGraph<char> = UnGraph::from_edges(
    ['a', 'b', 'c', 'd'],
    [('a', 'b'), ('b', 'c'), ('a', 'd'), ('d', 'b')],
).unwrap();

assert_eq!(graph.articulation_points(), vec!['b']);
assert!(!graph.is_biconnected());
```
*/

use super::*;
use tracing::debug;

/// Result of a [`LowLinkSearch`] on node level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LowLinks {
    /// Articulation points in arena order
    pub(crate) articulation_points: Vec<Node>,
    /// Bridges as `(parent, child)` tree edges in the order they were closed
    pub(crate) bridges: Vec<Edge>,
}

struct StackFrame {
    node: Node,
    parent: Node,
    next: NumNodes,
    children: NumNodes,
}

/// Iterative implementation of Tarjan's low-link search.
///
/// Discovery times start at `1`; a discovery time of `0` marks an undiscovered node.
pub(crate) struct LowLinkSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    discovery: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    is_cut: NodeBitSet,
    bridges: Vec<Edge>,
    stack: Vec<StackFrame>,
}

impl<'a, G> LowLinkSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub(crate) fn new(graph: &'a G) -> Self {
        let n = graph.node_bound();
        Self {
            graph,
            discovery: vec![0; n],
            low: vec![0; n],
            time: 0,
            is_cut: NodeBitSet::new(n as NumNodes),
            bridges: Vec::new(),
            stack: Vec::with_capacity(32),
        }
    }

    fn discover(&mut self, u: Node, parent: Node) {
        self.time += 1;
        self.discovery[u as usize] = self.time;
        self.low[u as usize] = self.time;
        self.stack.push(StackFrame {
            node: u,
            parent,
            next: 0,
            children: 0,
        });
    }

    pub(crate) fn compute(mut self) -> LowLinks {
        let graph = self.graph;
        for root in graph.nodes() {
            if self.discovery[root as usize] == 0 {
                self.discover(root, INVALID_NODE);
                self.search();
            }
        }

        LowLinks {
            articulation_points: self.is_cut.iter_set_bits().collect(),
            bridges: self.bridges,
        }
    }

    fn search(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;

            if frame.next < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next);
                frame.next += 1;

                if self.discovery[v as usize] == 0 {
                    frame.children += 1;
                    self.discover(v, u);
                } else if v != frame.parent {
                    // back edge
                    self.low[u as usize] = self.low[u as usize].min(self.discovery[v as usize]);
                }
                continue;
            }

            let children = frame.children;
            let parent = frame.parent;
            self.stack.pop();

            if parent == INVALID_NODE {
                if children > 1 {
                    self.is_cut.set_bit(u);
                }
                continue;
            }

            let (p, low_u) = (parent as usize, self.low[u as usize]);
            self.low[p] = self.low[p].min(low_u);

            if low_u > self.discovery[p] {
                self.bridges.push(Edge(parent, u));
            }

            let parent_is_root = self.stack.last().is_some_and(|f| f.parent == INVALID_NODE);
            if !parent_is_root && low_u >= self.discovery[p] {
                self.is_cut.set_bit(parent);
            }
        }
    }
}

/// Articulation points of undirected keyed graphs
pub trait ArticulationPoints: KeyedGraph + AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns all vertices whose removal increases the number of connected components,
    /// in vertex enumeration order
    fn articulation_points(&self) -> Vec<Self::Key>;

    /// Returns *true* if the graph has no articulation point.
    ///
    /// The graph is **not** checked for connectivity: a disconnected graph whose components are
    /// biconnected is reported as biconnected. Callers combine this with
    /// [`Connectivity::number_of_connected_components`](super::Connectivity::number_of_connected_components)
    /// if connectivity is not known.
    fn is_biconnected(&self) -> bool;
}

impl<G> ArticulationPoints for G
where
    G: KeyedGraph + AdjacencyList + GraphType<Dir = Undirected>,
{
    fn articulation_points(&self) -> Vec<Self::Key> {
        let cut = LowLinkSearch::new(self).compute().articulation_points;
        debug!(count = cut.len(), "computed articulation points");
        self.keys_of(cut)
    }

    fn is_biconnected(&self) -> bool {
        LowLinkSearch::new(self)
            .compute()
            .articulation_points
            .is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn articulation_points_in_example() {
        let graph: UnGraph<char> = Graph::from_edges(
            'A'..='H',
            [
                ('A', 'B'),
                ('A', 'C'),
                ('B', 'C'),
                ('C', 'D'),
                ('D', 'E'),
                ('E', 'F'),
                ('F', 'G'),
                ('G', 'E'),
                ('F', 'H'),
            ],
        )
        .unwrap();

        assert_eq!(graph.articulation_points(), vec!['C', 'D', 'E', 'F']);
        assert!(!graph.is_biconnected());
    }

    #[test]
    fn cycles_and_cliques_are_biconnected() {
        for n in 3..10u32 {
            let cycle: UnGraph<u32> =
                Graph::from_edges(0..n, (0..n).map(|u| (u, (u + 1) % n))).unwrap();
            assert!(cycle.articulation_points().is_empty());
            assert!(cycle.is_biconnected());

            let clique: UnGraph<u32> =
                Graph::from_edges(0..n, (0..n).tuple_combinations()).unwrap();
            assert!(clique.is_biconnected());
        }
    }

    #[test]
    fn inner_nodes_of_path() {
        for n in [1u32, 2, 3, 10] {
            let path: UnGraph<u32> =
                Graph::from_edges(0..n, (1..n).map(|u| (u - 1, u))).unwrap();
            assert_eq!(
                path.articulation_points(),
                (1..n.saturating_sub(1)).collect_vec()
            );
        }
    }

    #[test]
    fn self_loops_are_ignored() {
        let graph: UnGraph<u32> = Graph::from_edges(0..3, [(0, 0), (0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(graph.is_biconnected());
    }

    #[test]
    fn biconnectivity_ignores_connectivity() {
        // two disjoint triangles
        let graph: UnGraph<u32> = Graph::from_edges(
            0..6,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();

        assert!(graph.articulation_points().is_empty());
        assert!(graph.is_biconnected());
        assert_eq!(graph.number_of_connected_components(), 2);
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let n = 200_000u32;
        let graph: UnGraph<u32> =
            Graph::from_edges(0..n, (1..n).map(|u| (u - 1, u))).unwrap();

        let cut = graph.articulation_points();
        assert_eq!(cut.len(), (n - 2) as usize);
        assert_eq!(cut.first(), Some(&1));
        assert_eq!(cut.last(), Some(&(n - 2)));
        assert_eq!(graph.compute_bridges().len(), (n - 1) as usize);
    }

    #[test]
    fn root_with_two_children() {
        // star centered at the first vertex
        let graph: UnGraph<u32> = Graph::from_edges(0..4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(graph.articulation_points(), vec![0]);
    }

    #[test]
    fn removal_increases_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [4u32, 8, 16, 30] {
            for m in [n, 3 * n / 2, 2 * n] {
                for _ in 0..10 {
                    let graph = random_undirected_graph(rng, n, m);
                    let before = count_components(&graph);
                    let cut = graph.articulation_points();

                    for u in 0..n {
                        let mut reduced = graph.clone();
                        reduced.remove_vertex(&u).unwrap();

                        // an isolated vertex removes its own component
                        let isolated = graph.vertex(&u).unwrap().degree() == 0;
                        let after = count_components(&reduced) + usize::from(isolated);

                        assert_eq!(cut.contains(&u), after > before, "vertex {u}");
                    }
                }
            }
        }
    }
}
