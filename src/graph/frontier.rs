//! Frontier containers driving the traversals: LIFO, FIFO and min-priority.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Last-in, first-out frontier used by depth-first walks.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pop the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// First-in, first-out frontier used by breadth-first walks.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add an item at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the oldest item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Min-priority queue over a binary heap. Pops the smallest item first.
///
/// There is no decrease-key: callers push a fresh entry per improvement and
/// skip stale entries when they surface.
#[derive(Debug, Clone)]
pub struct MinQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert an item.
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove the smallest item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Number of pending items, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A container the generic walk can feed and drain.
pub trait Frontier<T> {
    /// Add one item.
    fn put(&mut self, item: T);

    /// Remove the next item to explore.
    fn take(&mut self) -> Option<T>;

    /// Add a batch given in preference order, so that the first item of the
    /// batch is the first one of the batch taken back out.
    fn put_preferred(&mut self, items: Vec<T>) {
        for item in items {
            self.put(item);
        }
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn put_preferred(&mut self, items: Vec<T>) {
        // Reversed so the most preferred item ends up on top.
        for item in items.into_iter().rev() {
            self.push(item);
        }
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn put(&mut self, item: T) {
        self.enqueue(item);
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }
}
