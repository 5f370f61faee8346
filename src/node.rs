/*!
# Node Representation

Vertices are addressed by their user-supplied key at the public surface, but internally every
vertex lives in a flat arena and is addressed by its slot index `Node = u32`.
Algorithms work exclusively on these indices and translate back to keys when reporting results.

Slots of removed vertices are recycled, so the set of live nodes is not necessarily `0..n`.
Per-node working arrays of algorithms are therefore sized by
[`GraphNodeOrder::node_bound`](crate::ops::GraphNodeOrder::node_bound).
*/

use stream_bitset::bitset::BitSetImpl;

/// Index of a vertex slot in the arena of a graph
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, sized by [`GraphNodeOrder::node_bound`](crate::ops::GraphNodeOrder::node_bound)
pub type NodeBitSet = BitSetImpl<Node>;
