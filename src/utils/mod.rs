/*!
# Utilities

Helper structures shared by the algorithms in [`crate::algo`].
Currently this is only the [`PriorityQueue`] used by [`PrimMst`](crate::algo::PrimMst).
*/

pub mod priority_queue;

pub use priority_queue::PriorityQueue;
