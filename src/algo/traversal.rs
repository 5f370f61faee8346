/*!
Depth-first traversal helpers shared by the structural algorithms, and connected components.

All traversals keep their state in explicit frames on a heap-allocated stack, so the depth of
a search is not limited by the call stack. Every live node is used as a root in arena order,
which makes the visiting order deterministic for a given construction sequence.

```
use wgraphs::{prelude::*, algo::*};

let graph: UnGraph<char> =
    UnGraph::from_edges(['a', 'b', 'c', 'd'], [('a', 'b'), ('c', 'd')]).unwrap();

assert_eq!(graph.number_of_connected_components(), 2);
assert_eq!(graph.connected_components(), vec![vec!['a', 'b'], vec!['c', 'd']]);
```
*/

use super::*;

/// Iterator over all nodes of a graph in depth-first preorder.
///
/// The neighbors of a node are explored in adjacency order (following outgoing edges in
/// directed graphs). Whenever a search exhausts, it restarts at the next unvisited node in
/// arena order, so every live node is yielded exactly once.
pub struct DepthFirstOrder<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<(Node, NumNodes)>,
    roots: std::vec::IntoIter<Node>,
}

impl<'a, G> DepthFirstOrder<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let roots: Vec<Node> = graph.nodes().collect();
        Self {
            graph,
            visited: NodeBitSet::new(graph.node_bound() as NumNodes),
            stack: Vec::with_capacity(32),
            roots: roots.into_iter(),
        }
    }
}

impl<G> DepthFirstOrder<'_, G>
where
    G: AdjacencyList,
{
    /// Returns the next node of the current search, or `None` if it is exhausted.
    /// Never restarts at a new root.
    fn advance(&mut self) -> Option<Node> {
        while let Some(frame) = self.stack.last_mut() {
            let u = frame.0;
            if frame.1 == self.graph.degree_of(u) {
                self.stack.pop();
                continue;
            }

            let v = self.graph.ith_neighbor(u, frame.1);
            frame.1 += 1;

            if !self.visited.set_bit(v) {
                self.stack.push((v, 0));
                return Some(v);
            }
        }
        None
    }

    /// Starts a new search at the next unvisited node in arena order
    fn restart(&mut self) -> Option<Node> {
        let root = self.roots.find(|&r| !self.visited.set_bit(r))?;
        self.stack.push((root, 0));
        Some(root)
    }
}

impl<G> Iterator for DepthFirstOrder<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        self.advance().or_else(|| self.restart())
    }
}

/// Iterator over the connected components of an undirected graph.
/// Each component is emitted as a list of nodes in depth-first preorder.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    dfs: DepthFirstOrder<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: DepthFirstOrder::new(graph),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.dfs.restart()?;
        let mut component = vec![root];
        while let Some(u) = self.dfs.advance() {
            component.push(u);
        }
        Some(component)
    }
}

/// Depth-first traversals exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over all nodes in depth-first preorder, see [`DepthFirstOrder`]
    fn dfs_order(&self) -> DepthFirstOrder<'_, Self> {
        DepthFirstOrder::new(self)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Connected components of undirected keyed graphs
pub trait Connectivity: KeyedGraph + AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns the keys of each connected component.
    /// Components are ordered by their first vertex in enumeration order, vertices within a
    /// component by depth-first preorder.
    fn connected_components(&self) -> Vec<Vec<Self::Key>>;

    /// Returns the number of connected components; isolated vertices count as components
    fn number_of_connected_components(&self) -> usize;
}

impl<G> Connectivity for G
where
    G: KeyedGraph + AdjacencyList + GraphType<Dir = Undirected>,
{
    fn connected_components(&self) -> Vec<Vec<Self::Key>> {
        ConnectedComponents::new(self)
            .map(|cc| self.keys_of(cc))
            .collect()
    }

    fn number_of_connected_components(&self) -> usize {
        ConnectedComponents::new(self).count()
    }
}
