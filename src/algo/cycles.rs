/*!
# Cycle Detection

Cycle detection and topological ordering for directed graphs.

[`CycleDetection::has_cycle`] runs a depth-first search with three states per node
(unvisited, in progress, done) and reports a cycle as soon as an outgoing edge reaches a node
that is still in progress. Every unvisited node is used as a root, so all components are
covered. Self-loops are cycles.

[`CycleDetection::topological_order`] uses Kahn's algorithm and returns `None` exactly for
cyclic graphs.

```
use wgraphs::{prelude::*, algo::*};

let mut graph: DiGraph<&str> =
    DiGraph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
assert!(!graph.has_cycle());
assert_eq!(graph.topological_order(), Some(vec!["a", "b", "c"]));

graph.add_edge(&"c", &"a").unwrap();
assert!(graph.has_cycle());
assert_eq!(graph.topological_order(), None);
```
*/

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum VisitState {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Iterative three-state depth-first search for directed cycles
struct CycleSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    states: Vec<VisitState>,
    stack: Vec<(Node, NumNodes)>,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            states: vec![VisitState::Unvisited; graph.node_bound()],
            stack: Vec::with_capacity(32),
        }
    }

    fn has_cycle(mut self) -> bool {
        let graph = self.graph;
        for root in graph.nodes() {
            if self.states[root as usize] == VisitState::Unvisited && self.search_from(root) {
                return true;
            }
        }
        false
    }

    /// Returns *true* as soon as a back edge is found
    fn search_from(&mut self, root: Node) -> bool {
        self.states[root as usize] = VisitState::InProgress;
        self.stack.push((root, 0));

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.0;
            if frame.1 == self.graph.degree_of(u) {
                self.states[u as usize] = VisitState::Done;
                self.stack.pop();
                continue;
            }

            let v = self.graph.ith_neighbor(u, frame.1);
            frame.1 += 1;

            match self.states[v as usize] {
                VisitState::InProgress => return true,
                VisitState::Unvisited => {
                    self.states[v as usize] = VisitState::InProgress;
                    self.stack.push((v, 0));
                }
                VisitState::Done => {}
            }
        }

        false
    }
}

/// Iterator implementing Kahn's algorithm.
///
/// Repeatedly emits a node whose predecessors were all emitted already. On a cyclic graph the
/// iterator ends before every node was returned.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let mut in_degs = vec![0; graph.node_bound()];
        for u in graph.nodes() {
            in_degs[u as usize] = graph.in_degree_of(u);
        }

        // reversed so that sources are emitted in arena order
        let stack: Vec<Node> = graph
            .nodes()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

/// Cycle detection on directed graphs
pub trait CycleDetection: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns *true* if the graph contains a directed cycle (including self-loops)
    fn has_cycle(&self) -> bool;

    /// Returns the vertices in an order where every edge points forward, or `None` if the
    /// graph is cyclic
    fn topological_order(&self) -> Option<Vec<<Self as KeyedGraph>::Key>>
    where
        Self: KeyedGraph + DirectedAdjacencyList,
    {
        let order: Vec<Node> = TopoSearch::new(self).collect();
        (order.len() == self.len()).then(|| self.keys_of(order))
    }
}

impl<G> CycleDetection for G
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    fn has_cycle(&self) -> bool {
        CycleSearch::new(self).has_cycle()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn small_graphs() {
        let empty: DiGraph<u32> = Graph::new();
        assert!(!empty.has_cycle());
        assert_eq!(empty.topological_order(), Some(vec![]));

        let self_loop: DiGraph<u32> = Graph::from_edges(0..2, [(0, 1), (1, 1)]).unwrap();
        assert!(self_loop.has_cycle());
        assert_eq!(self_loop.topological_order(), None);

        // diamond with a cycle hanging off a separate component
        let graph: DiGraph<u32> =
            Graph::from_edges(0..7, [(0, 1), (0, 2), (1, 3), (2, 3), (4, 5), (5, 6), (6, 4)])
                .unwrap();
        assert!(graph.has_cycle());

        let dag: DiGraph<u32> =
            Graph::from_edges(0..4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert!(!dag.has_cycle());
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let n = 200_000u32;
        let mut graph: DiGraph<u32> =
            Graph::from_edges(0..n, (1..n).map(|u| (u - 1, u))).unwrap();

        assert!(!graph.has_cycle());
        assert_eq!(graph.topological_order().map(|order| order.len()), Some(n as usize));

        graph.add_edge(&(n - 1), &0).unwrap();
        assert!(graph.has_cycle());
    }

    #[test]
    fn cross_edges_are_no_cycles() {
        // 0 -> 1 -> 2 and 0 -> 2 reach an already finished node
        let graph: DiGraph<u32> = Graph::from_edges(0..3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(!graph.has_cycle());
        assert_eq!(graph.topological_order(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn topological_order_respects_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5u32, 10, 30] {
            for _ in 0..20 {
                let graph = random_dag(rng, n, 2 * n);
                assert!(!graph.has_cycle());

                let order = graph.topological_order().unwrap();
                let rank: Vec<usize> = (0..n)
                    .map(|u| order.iter().position(|&x| x == u).unwrap())
                    .collect();

                for e in graph.all_edges() {
                    assert!(rank[*e.source() as usize] < rank[*e.target() as usize]);
                }
            }
        }
    }

    #[test]
    fn invariant_under_permutation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [3u32, 8, 20] {
            for m in [n / 2, n, 2 * n] {
                for _ in 0..20 {
                    let graph = random_digraph(rng, n, m);
                    let expected = graph.has_cycle();
                    assert_eq!(graph.topological_order().is_none(), expected);

                    let mut vertices = graph.vertices().copied().collect_vec();
                    let mut edges = graph
                        .all_edges()
                        .map(|e| (*e.source(), *e.target()))
                        .collect_vec();
                    vertices.shuffle(rng);
                    edges.shuffle(rng);

                    let permuted: DiGraph<u32> = Graph::from_edges(vertices, edges).unwrap();
                    assert_eq!(permuted.has_cycle(), expected);
                }
            }
        }
    }
}
