/*!
# Graph Representation

The crate ships a single mutable representation, [`Graph`], generic over
- the vertex key `K`,
- the edge weight `W` (defaults to `()`),
- the orientation `D` ([`Directed`](crate::ops::Directed) or [`Undirected`](crate::ops::Undirected)).

[`DiGraph`] and [`UnGraph`] are shorthands for both orientations.

```
use wgraphs::prelude::*;

let mut graph: UnGraph<&str, u32> = UnGraph::new();
graph.add_vertices(["A", "B", "C"]).unwrap();
graph.add_weighted_edge(&"A", &"B", 4).unwrap();
graph.add_weighted_edge(&"B", &"C", 2).unwrap();

assert!(graph.has_edge(&"B", &"A"));
assert_eq!(graph.edges_count(), 2);
assert_eq!(
    graph.add_edge(&"C", &"B"),
    Err(GraphError::DuplicateEdge("\"C\"".into(), "\"B\"".into()))
);
```
*/

mod graph;
mod vertex;

pub use graph::*;
pub use vertex::*;
