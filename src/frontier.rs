//! Exploration orders. Every frontier stores [Entry]s which point into the search's predecessor
//! map; only the order in which they come back out differs.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A pending expansion: the index of the cell in the predecessor map and the cost it was
/// discovered with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Entry<C> {
    pub index: usize,
    pub cost: C,
}

pub trait Frontier<C> {
    /// Adds an entry. `estimate` is the full ordering key (cost plus heuristic); frontiers that
    /// do not order by cost ignore it.
    fn push(&mut self, entry: Entry<C>, estimate: C);
    fn pop(&mut self) -> Option<Entry<C>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct SmallestCostHolder<C> {
    estimated_cost: C,
    counter: u64,
    entry: Entry<C>,
}

impl<C: PartialEq> Eq for SmallestCostHolder<C> {}

impl<C: PartialEq> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.counter == other.counter
    }
}

impl<C: Ord> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimate wins, then the oldest insertion.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.counter.cmp(&self.counter),
            s => s,
        }
    }
}

/// Min-heap keyed by `(estimate, insertion order)`, used by A*, Dijkstra and UCS.
pub struct PriorityFrontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
    counter: u64,
}

impl<C: Ord> PriorityFrontier<C> {
    pub fn new() -> PriorityFrontier<C> {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<C: Ord> Default for PriorityFrontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Ord> Frontier<C> for PriorityFrontier<C> {
    fn push(&mut self, entry: Entry<C>, estimate: C) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: estimate,
            counter: self.counter,
            entry,
        });
        self.counter += 1;
    }
    fn pop(&mut self) -> Option<Entry<C>> {
        self.heap.pop().map(|holder| holder.entry)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// First in, first out. Breadth-first search.
#[derive(Default)]
pub struct FifoFrontier<C> {
    queue: VecDeque<Entry<C>>,
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, entry: Entry<C>, _: C) {
        self.queue.push_back(entry);
    }
    fn pop(&mut self) -> Option<Entry<C>> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Depth-first search.
#[derive(Default)]
pub struct LifoFrontier<C> {
    stack: Vec<Entry<C>>,
}

impl<C> Frontier<C> for LifoFrontier<C> {
    fn push(&mut self, entry: Entry<C>, _: C) {
        self.stack.push(entry);
    }
    fn pop(&mut self) -> Option<Entry<C>> {
        self.stack.pop()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize) -> Entry<u32> {
        Entry { index, cost: 0 }
    }

    fn drain<F: Frontier<u32>>(mut frontier: F) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop().map(|e| e.index)).collect()
    }

    #[test]
    fn priority_pops_smallest_estimate_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(entry(0), 5);
        frontier.push(entry(1), 2);
        frontier.push(entry(2), 9);
        frontier.push(entry(3), 2);
        assert_eq!(frontier.len(), 4);
        // Equal estimates come out in insertion order.
        assert_eq!(drain(frontier), vec![1, 3, 0, 2]);
    }

    #[test]
    fn queue_and_stack_ignore_estimates() {
        let mut fifo = FifoFrontier::default();
        let mut lifo = LifoFrontier::default();
        for (ix, estimate) in [(0, 9), (1, 1), (2, 5)] {
            fifo.push(entry(ix), estimate);
            lifo.push(entry(ix), estimate);
        }
        assert_eq!(drain(fifo), vec![0, 1, 2]);
        assert_eq!(drain(lifo), vec![2, 1, 0]);
    }
}
