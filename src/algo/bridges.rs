use super::{articulation::LowLinkSearch, *};
use tracing::debug;

/// Bridges of undirected graphs, computed by the same low-link search as
/// [`ArticulationPoints`](super::ArticulationPoints)
pub trait Bridges: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns all bridges as `(parent, child)` edges of the DFS forest
    fn compute_bridges(&self) -> Vec<Edge>;

    /// Returns the keys of all edges whose removal increases the number of connected components.
    /// Each bridge is reported once, oriented from its endpoint discovered first.
    fn bridges(&self) -> Vec<(<Self as KeyedGraph>::Key, <Self as KeyedGraph>::Key)>
    where
        Self: KeyedGraph,
    {
        self.compute_bridges()
            .into_iter()
            .map(|Edge(u, v)| (self.key_of(u).clone(), self.key_of(v).clone()))
            .collect()
    }
}

impl<G> Bridges for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        let bridges = LowLinkSearch::new(self).compute().bridges;
        debug!(count = bridges.len(), "computed bridges");
        bridges
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
    fn bridges_in_path() {
        for n in [1u32, 5, 10, 15] {
            let graph: UnGraph<u32> =
                Graph::from_edges(0..n, (1..n).map(|u| (u - 1, u))).unwrap();

            let mut bridges = graph.bridges();
            bridges.sort();

            assert_eq!(bridges, (1..n).map(|u| (u - 1, u)).collect_vec());
        }
    }

    #[test]
    fn bridge_in_example() {
        let graph: UnGraph<u32> = Graph::from_edges(
            0..6,
            [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
        assert_eq!(graph.bridges(), vec![(1, 3)]);
    }

    #[test]
    fn removing_bridges_splits_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [4u32, 8, 16, 30] {
            for m in [n / 2, n, 3 * n / 2] {
                for _ in 0..10 {
                    let graph = random_undirected_graph(rng, n, m);
                    let before = count_components(&graph);
                    let bridges = graph.bridges();

                    for e in graph.all_edges() {
                        let (u, v) = (*e.source(), *e.target());
                        let mut reduced = graph.clone();
                        reduced.remove_edge(&u, &v).unwrap();

                        let is_bridge = bridges.contains(&(u, v)) || bridges.contains(&(v, u));
                        assert_eq!(
                            count_components(&reduced) > before,
                            is_bridge,
                            "edge ({u}, {v})"
                        );
                    }
                }
            }
        }
    }
}
