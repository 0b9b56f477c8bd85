//! Search frontier: a priority queue with a FIFO tie-break.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

/// One entry in the search frontier.
///
/// Entries are immutable once pushed. A cheaper route to the same node is
/// handled by pushing a fresh entry and letting the stale one be skipped
/// when popped (the searcher's closed set suppresses it), never by mutating
/// an entry already inside the heap: in-place cost edits would silently
/// break the heap invariant.
#[derive(Clone, Copy, Debug)]
pub struct SearchEntry {
    /// The node this entry would expand.
    pub node: NodeId,
    /// Node this entry was reached from; `None` for the seed entry.
    pub parent: Option<NodeId>,
    /// Cumulative cost from the start node.
    pub g: f32,
    /// Heuristic estimate to the target.
    pub h: f32,
    /// Insertion sequence number; breaks priority ties first-in-first-out.
    seq: u64,
}

impl SearchEntry {
    /// Ordering key: `f = g + h`.
    #[inline]
    pub fn priority(&self) -> f32 {
        self.g + self.h
    }
}

impl PartialEq for SearchEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for SearchEntry {}

impl Ord for SearchEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; equal priorities fall through to
        // the sequence number so extraction order matches insertion order.
        other
            .priority()
            .partial_cmp(&self.priority())
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier ordered by `f = g + h`, FIFO among equal priorities.
///
/// The FIFO tie-break is a contract, not an accident: search results must
/// be reproducible, and equal-cost frontiers are common on uniform-cost
/// meshes.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<SearchEntry>,
    seq: u64,
}

impl OpenList {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for `node` reached from `parent` with costs `g`/`h`.
    pub fn push(&mut self, node: NodeId, parent: Option<NodeId>, g: f32, h: f32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(SearchEntry {
            node,
            parent,
            g,
            h,
            seq,
        });
    }

    /// Extract the minimum-priority entry, or `None` when the frontier is
    /// empty.
    pub fn pop(&mut self) -> Option<SearchEntry> {
        self.heap.pop()
    }

    /// Number of live entries (including stale duplicates not yet popped).
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no entries remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
