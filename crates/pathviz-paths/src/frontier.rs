//! Frontier containers.
//!
//! [`RankedQueue`] is a min-heap keyed by `(rank, insertion_order)`: lower
//! ranks pop first and ties are broken FIFO by a monotonically increasing
//! counter, which keeps priority-driven searches reproducible. Plain
//! [`VecDeque`] and [`Vec`] serve as FIFO and LIFO frontiers.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Point;

/// An entry in the ranked queue.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    rank: i32,
    /// Lower = inserted earlier = popped first among equal ranks.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller rank first, then
        // smaller seq.
        self.rank.cmp(&other.rank).then(self.seq.cmp(&other.seq))
    }
}

/// A priority queue with FIFO tie-breaking.
///
/// Duplicate items are allowed; callers that re-insert an item with a better
/// rank are responsible for skipping the stale copy when it surfaces.
#[derive(Debug)]
pub struct RankedQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> RankedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item at the given rank.
    pub fn push(&mut self, item: T, rank: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    /// Pop the item with the lowest rank (ties broken FIFO).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries in the queue, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for RankedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A frontier for searches that mark nodes visited on insertion.
pub(crate) trait Frontier {
    fn push(&mut self, p: Point, rank: i32);
    fn pop(&mut self) -> Option<Point>;
}

impl Frontier for VecDeque<Point> {
    fn push(&mut self, p: Point, _rank: i32) {
        self.push_back(p);
    }

    fn pop(&mut self) -> Option<Point> {
        self.pop_front()
    }
}

impl Frontier for Vec<Point> {
    fn push(&mut self, p: Point, _rank: i32) {
        Vec::push(self, p);
    }

    fn pop(&mut self) -> Option<Point> {
        Vec::pop(self)
    }
}

impl Frontier for RankedQueue<Point> {
    fn push(&mut self, p: Point, rank: i32) {
        RankedQueue::push(self, p, rank);
    }

    fn pop(&mut self) -> Option<Point> {
        RankedQueue::pop(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_rank_first() {
        let mut q = RankedQueue::new();
        q.push("a", 3);
        q.push("b", 1);
        q.push("c", 2);

        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn fifo_within_rank() {
        let mut q = RankedQueue::new();
        q.push("first", 1);
        q.push("second", 1);
        q.push("early-low", 0);
        q.push("third", 1);

        assert_eq!(q.pop(), Some("early-low"));
        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut q = RankedQueue::new();
        q.push('x', 5);
        q.push('x', 2);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some('x'));
        assert_eq!(q.pop(), Some('x'));
        assert!(q.is_empty());
    }

    #[test]
    fn fifo_and_lifo_frontiers() {
        let (a, b) = (Point::new(0, 0), Point::new(0, 1));
        let mut fifo: VecDeque<Point> = VecDeque::new();
        Frontier::push(&mut fifo, a, 9);
        Frontier::push(&mut fifo, b, 0);
        assert_eq!(Frontier::pop(&mut fifo), Some(a));

        let mut lifo: Vec<Point> = Vec::new();
        Frontier::push(&mut lifo, a, 0);
        Frontier::push(&mut lifo, b, 9);
        assert_eq!(Frontier::pop(&mut lifo), Some(b));
    }
}
