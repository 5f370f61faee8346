/*!
# Greedy Coloring

Colors the vertices of a graph with colors from a given palette such that no two adjacent
vertices share a color. Vertices are processed in depth-first preorder (see
[`DepthFirstOrder`](super::DepthFirstOrder)); each receives the first palette color that no
already colored neighbor uses. For directed graphs both in- and out-neighbors count.

A vertex for which the palette is exhausted stays uncolored and the search continues;
earlier assignments are never revised. Hence the result may report failure although another
processing order would succeed, i.e. this is *not* a decision procedure for colorability.
It always succeeds if the palette has more colors than the maximum degree.
Self-loops are ignored.

```
use wgraphs::{prelude::*, algo::*};

let graph: UnGraph<u32> =
    UnGraph::from_edges(0..4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]).unwrap();

let coloring = graph.color_with(["red", "green", "blue"]);
assert!(coloring.can_color());
assert_eq!(coloring.color_of(&0), Some(&"red"));
assert_eq!(coloring.color_of(&2), Some(&"blue"));
```
*/

use std::hash::Hash;

use fxhash::FxHashMap;
use tracing::debug;

use super::*;

/// Outcome of a greedy coloring
#[derive(Debug, Clone, PartialEq)]
pub struct ColoringResult<K, C>
where
    K: Eq + Hash,
{
    colors: FxHashMap<K, C>,
    uncolored: Vec<K>,
}

impl<K, C> ColoringResult<K, C>
where
    K: Eq + Hash,
{
    /// Returns *true* if every vertex received a color
    pub fn can_color(&self) -> bool {
        self.uncolored.is_empty()
    }

    /// Returns the color assigned to `key`, if any
    pub fn color_of(&self, key: &K) -> Option<&C> {
        self.colors.get(key)
    }

    /// All assigned colors
    pub fn colors(&self) -> &FxHashMap<K, C> {
        &self.colors
    }

    /// Vertices for which no color was left, in processing order
    pub fn uncolored(&self) -> &[K] {
        &self.uncolored
    }
}

/// Configurable greedy coloring
pub struct GreedyColoring<'a, G, C> {
    graph: &'a G,
    palette: Vec<C>,
}

impl<'a, G, C> GreedyColoring<'a, G, C>
where
    G: KeyedGraph + AdjacencyList,
    C: Clone,
{
    /// Creates a coloring of `graph` using the colors of `palette` in the given order
    pub fn new<P>(graph: &'a G, palette: P) -> Self
    where
        P: IntoIterator<Item = C>,
    {
        Self {
            graph,
            palette: palette.into_iter().collect(),
        }
    }

    /// Replaces the palette; colors are tried in the given order
    pub fn set_palette<P>(&mut self, palette: P)
    where
        P: IntoIterator<Item = C>,
    {
        self.palette = palette.into_iter().collect();
    }

    /// Chainable version of [`Self::set_palette`]
    pub fn palette<P>(mut self, palette: P) -> Self
    where
        P: IntoIterator<Item = C>,
    {
        self.set_palette(palette);
        self
    }

    /// Assigns palette indices on node level; `None` marks an uncolored node
    fn assign(&self) -> (Vec<Node>, Vec<Option<usize>>) {
        let mut assigned: Vec<Option<usize>> = vec![None; self.graph.node_bound()];
        let mut in_use = vec![false; self.palette.len()];
        let order: Vec<Node> = self.graph.dfs_order().collect();

        for &u in &order {
            in_use.iter_mut().for_each(|x| *x = false);
            for v in self.graph.incident_neighbors_of(u) {
                if let Some(c) = assigned[v as usize] {
                    in_use[c] = true;
                }
            }
            assigned[u as usize] = in_use.iter().position(|&used| !used);
        }

        (order, assigned)
    }

    /// Colors all vertices in depth-first preorder; see the module documentation
    pub fn run(&self) -> ColoringResult<G::Key, C> {
        let (order, assigned) = self.assign();

        let mut colors = FxHashMap::default();
        let mut uncolored = Vec::new();
        for u in order {
            let key = self.graph.key_of(u).clone();
            match assigned[u as usize] {
                Some(c) => {
                    colors.insert(key, self.palette[c].clone());
                }
                None => uncolored.push(key),
            }
        }

        debug!(
            colored = colors.len(),
            uncolored = uncolored.len(),
            "computed greedy coloring"
        );
        ColoringResult { colors, uncolored }
    }
}

/// Greedy coloring exposed directly on keyed graphs
pub trait Coloring: KeyedGraph + AdjacencyList {
    /// Runs [`GreedyColoring`] with the given palette
    fn color_with<C, P>(&self, palette: P) -> ColoringResult<Self::Key, C>
    where
        C: Clone,
        P: IntoIterator<Item = C>;
}

impl<G> Coloring for G
where
    G: KeyedGraph + AdjacencyList,
{
    fn color_with<C, P>(&self, palette: P) -> ColoringResult<Self::Key, C>
    where
        C: Clone,
        P: IntoIterator<Item = C>,
    {
        GreedyColoring::new(self, palette).run()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_proper<W, D>(graph: &Graph<u32, W, D>, coloring: &ColoringResult<u32, usize>)
    where
        W: Clone,
        D: Direction,
    {
        for e in graph.all_edges() {
            if e.source() == e.target() {
                continue;
            }
            if let (Some(a), Some(b)) = (
                coloring.color_of(e.source()),
                coloring.color_of(e.target()),
            ) {
                assert_ne!(a, b, "edge {:?} -> {:?}", e.source(), e.target());
            }
        }
    }

    #[test]
    fn colors_example() {
        let graph: UnGraph<u32> =
            Graph::from_edges(0..4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]).unwrap();

        let coloring = graph.color_with(["red", "green", "blue"]);
        assert!(coloring.can_color());
        assert_eq!(coloring.colors().len(), 4);
        assert_eq!(coloring.color_of(&1), Some(&"green"));
        assert_eq!(coloring.color_of(&3), Some(&"green"));
    }

    #[test]
    fn odd_cycle_needs_three_colors() {
        let graph: UnGraph<u32> =
            Graph::from_edges(0..5, (0..5).map(|u| (u, (u + 1) % 5))).unwrap();

        let coloring = graph.color_with(0..2usize);
        assert!(!coloring.can_color());
        assert_eq!(coloring.uncolored(), &[4]);
        assert_proper(&graph, &coloring);

        assert!(GreedyColoring::new(&graph, 0..2usize).palette(0..3).run().can_color());
    }

    #[test]
    fn failures_are_not_unwound() {
        // K4 with three colors: the last vertex in DFS order stays uncolored
        let graph: UnGraph<u32> =
            Graph::from_edges(0..4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();

        let coloring = graph.color_with(0..3usize);
        assert_eq!(coloring.uncolored(), &[3]);
        assert_eq!(coloring.color_of(&0), Some(&0));
        assert_eq!(coloring.color_of(&1), Some(&1));
        assert_eq!(coloring.color_of(&2), Some(&2));
    }

    #[test]
    fn directed_edges_count_both_ways() {
        let graph: DiGraph<u32> = Graph::from_edges(0..3, [(1, 0), (2, 1)]).unwrap();
        let coloring = graph.color_with(0..2usize);

        assert!(coloring.can_color());
        assert_proper(&graph, &coloring);
    }

    #[test]
    fn empty_palette() {
        let graph: UnGraph<u32> = Graph::from_edges(0..2, []).unwrap();
        let coloring = graph.color_with(Vec::<usize>::new());
        assert_eq!(coloring.uncolored(), &[0, 1]);
    }

    #[test]
    fn degree_plus_one_colors_suffice() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for n in [5u32, 10, 30] {
            for m in [n, 2 * n, 4 * n] {
                for _ in 0..10 {
                    let graph = random_undirected_graph(rng, n, m);
                    let max_degree = (0..n)
                        .map(|u| graph.vertex(&u).unwrap().degree())
                        .max()
                        .unwrap_or(0) as usize;

                    let coloring = graph.color_with(0..max_degree + 1);
                    assert!(coloring.can_color());
                    assert_proper(&graph, &coloring);

                    let coloring = graph.color_with(0..2usize);
                    assert_proper(&graph, &coloring);
                }
            }
        }
    }
}
