/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph store in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, articulation points, bridges, cycle detection, flows,
spanning trees, vertex covers and colorings.

Every algorithm works on arena indices internally and reports results in vertex keys.
Depth-first searches keep explicit stacks instead of recursing.
*/

mod articulation;
mod bridges;
mod coloring;
mod cycles;
mod mst;
mod network_flow;
mod traversal;
mod vertex_cover;

use crate::prelude::*;

pub use articulation::*;
pub use bridges::*;
pub use coloring::*;
pub use cycles::*;
pub use mst::*;
pub use network_flow::*;
pub use traversal::*;
pub use vertex_cover::*;
