/*!
`wgraphs` is a graph store with a small suite of classical algorithms for graphs that are
- **keyed** : vertices are identified by arbitrary user-supplied keys,
- **w**eighted : edges optionally carry a weight of a user-chosen type,
- directed or undirected : the orientation is fixed at construction via a type parameter.

# Representation

Internally every vertex lives in a flat arena and is addressed by its slot index
[`Node`](crate::node::Node) `= u32`; slots of removed vertices are recycled.
Edges are stored as records in a second arena. An undirected edge consists of two twin records,
one per endpoint, so that every incident edge can be traversed in `O(degree)` from either side.

The public surface of [`Graph`](crate::repr::Graph) speaks in keys; the index-level traits in
[`ops`] expose arena indices so that algorithms can use flat per-node arrays.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
either the *Builder* / *Setter* pattern before running them on a provided graph.
The commonly used functionalities are also implemented via traits on the graph itself, making
them usable without configuring the algorithm beforehand.

Every fallible operation returns a [`Result`](crate::error::Result) with a
[`GraphError`](crate::error::GraphError); failed mutations leave the graph untouched.
Weighted algorithms perform arithmetic through a [`WeightOps`](crate::weight::WeightOps)
capability that reports overflow instead of wrapping.

All traversals use explicit stacks, so deep graphs never exhaust the call stack.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, weight capabilities, basic graph
  operations and the graph store,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as
  `graph.articulation_points()`, `graph.has_cycle()`, `graph.max_flow(&s, &t)`, ...
- [`utils`] includes helper structures such as a stable [`PriorityQueue`](crate::utils::PriorityQueue).

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut graph: UnGraph<&str, u32> = UnGraph::new();
graph.add_vertices(["a", "b", "c", "d"]).unwrap();
graph
    .add_weighted_edges([("a", "b", 1), ("b", "c", 2), ("c", "a", 3), ("c", "d", 1)])
    .unwrap();

assert_eq!(graph.articulation_points(), vec!["c"]);
assert_eq!(graph.minimum_spanning_tree().unwrap().total_weight(), &4);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod weight;

pub(crate) use {edge::*, node::*};

/// `wgraphs::prelude` includes definitions for nodes and edges, errors, weight capabilities,
/// all basic graph operation traits as well as the graph store.
pub mod prelude {
    pub use super::{
        edge::*,
        error::GraphError,
        node::*,
        ops::*,
        repr::*,
        weight::*,
    };
}
