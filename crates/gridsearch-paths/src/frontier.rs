//! Frontier structures: which discovered cell is expanded next.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridsearch_core::Cell;

/// A "next node to expand" policy.
pub trait Frontier {
    type Item;

    /// Add an element.
    fn push(&mut self, item: Self::Item);

    /// Remove the next element according to the policy.
    fn pop(&mut self) -> Option<Self::Item>;

    /// Number of pending elements.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// FIFO / LIFO
// ---------------------------------------------------------------------------

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Frontier for FifoQueue<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Clone)]
pub struct LifoStack<T> {
    items: Vec<T>,
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LifoStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Frontier for LifoStack<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// Priority queue
// ---------------------------------------------------------------------------

/// How [`PriorityQueue`] orders entries whose `f` and `g` are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Smallest cell first, lexicographic on `(row, col)`.
    #[default]
    CellOrder,
    /// Earliest inserted first.
    Insertion,
}

/// A cell queued for A* with its scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// `g + h`.
    pub f: i32,
    /// Cost from the start.
    pub g: i32,
    pub cell: Cell,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Entry {
    item: Scored,
    seq: u64,
    tie: TieBreak,
}

impl Entry {
    fn key(&self, other: &Self) -> Ordering {
        let a = &self.item;
        let b = &other.item;
        let primary = a.f.cmp(&b.f).then(a.g.cmp(&b.g));
        match self.tie {
            TieBreak::CellOrder => primary.then(a.cell.cmp(&b.cell)).then(self.seq.cmp(&other.seq)),
            TieBreak::Insertion => primary.then(self.seq.cmp(&other.seq)),
        }
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key(self)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue keyed by `(f, g, tie-break)`. Drives A*.
///
/// Every pushed entry gets a sequence number so the order is total and
/// repeatable even under [`TieBreak::CellOrder`].
#[derive(Clone)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    seq: u64,
    tie: TieBreak,
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl PriorityQueue {
    pub fn new(tie: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            tie,
        }
    }

    /// The tie-break policy in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie
    }
}

impl Frontier for PriorityQueue {
    type Item = Scored;

    fn push(&mut self, item: Scored) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            item,
            seq,
            tie: self.tie,
        });
    }

    fn pop(&mut self) -> Option<Scored> {
        self.heap.pop().map(|e| e.item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
