/*!
# Priority Queue

A min-priority queue over a [`BinaryHeap`] that only requires `PartialOrd` priorities (so that
floating point weights can be used) and breaks ties between equal priorities in insertion order.

```
use wgraphs::utils::PriorityQueue;

let mut queue = PriorityQueue::new();
queue.push(3.0, 'a');
queue.push(1.0, 'b');
queue.push(1.0, 'c');

assert_eq!(queue.pop(), Some((1.0, 'b')));
assert_eq!(queue.pop(), Some((1.0, 'c')));
assert_eq!(queue.pop(), Some((3.0, 'a')));
assert!(queue.is_empty());
```
*/

use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<P: PartialOrd, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd, T> Eq for Entry<P, T> {}

impl<P: PartialOrd, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd, T> Ord for Entry<P, T> {
    // reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue with FIFO order among equal priorities.
/// Incomparable priorities (e.g. `NaN`) are treated as equal.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T> {
    heap: BinaryHeap<Entry<P, T>>,
    sequence: u64,
}

impl<P: PartialOrd, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<P: PartialOrd, T> PriorityQueue<P, T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with space for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Inserts `item` with priority `priority`
    pub fn push(&mut self, priority: P, item: T) {
        self.heap.push(Entry {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    /// Removes and returns the element with smallest priority
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Returns the element with smallest priority without removing it
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.heap.peek().map(|e| (&e.priority, &e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn pops_sorted_and_stable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let items = (0..100)
                .map(|i| (rng.random_range(0..10u32), i))
                .collect_vec();

            let mut queue = PriorityQueue::with_capacity(items.len());
            for &(p, i) in &items {
                queue.push(p, i);
            }
            assert_eq!(queue.len(), items.len());
            assert_eq!(queue.peek().map(|(p, _)| *p), items.iter().map(|x| x.0).min());

            let popped = std::iter::from_fn(|| queue.pop()).collect_vec();

            let mut expected = items.clone();
            expected.sort_by_key(|&(p, _)| p);
            assert_eq!(popped, expected);
        }
    }

    #[test]
    fn float_priorities() {
        let mut queue = PriorityQueue::new();
        queue.push(2.5f64, "x");
        queue.push(-1.0, "y");
        queue.push(0.0, "z");

        assert_eq!(queue.pop(), Some((-1.0, "y")));
        assert_eq!(queue.pop(), Some((0.0, "z")));
        assert_eq!(queue.pop(), Some((2.5, "x")));
        assert_eq!(queue.pop(), None);
    }
}
