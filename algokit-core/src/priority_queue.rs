//! Keyed min-heap with O(log n) upsert and removal
//!
//! Updating or removing a key does not repair the heap in place. Instead
//! every pushed entry carries a sequence stamp, and a side table records
//! the stamp of the one live entry per key; anything else that surfaces at
//! the top during `pop` is stale and gets discarded. This emulates
//! decrease-key on a plain binary heap without a position index.

use alloc::collections::BinaryHeap;
use core::cmp::Ordering;
use core::hash::Hash;
use hashbrown::HashMap;

use crate::error::{AlgoError, Result};

struct Entry<K, P> {
    priority: P,
    seq: u64,
    key: K,
}

// Ordering is by (priority, seq) only, inverted so that BinaryHeap pops
// the minimum; the key never participates in comparisons.
impl<K, P: Ord> Ord for Entry<K, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K, P: Ord> PartialOrd for Entry<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, P: Ord> PartialEq for Entry<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<K, P: Ord> Eq for Entry<K, P> {}

/// Min-heap keyed by priority with upsert and removal by key
///
/// Equal priorities pop in insertion order.
pub struct PriorityQueue<K, P> {
    heap: BinaryHeap<Entry<K, P>>,
    // Sequence stamp of the live heap entry for each present key.
    live: HashMap<K, u64>,
    next_seq: u64,
}

impl<K: Eq + Hash + Clone, P: Ord> PriorityQueue<K, P> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live key remains
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether `key` is currently queued
    pub fn contains_key(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Insert `key` with `priority`, or update its priority if present
    ///
    /// An update orphans the key's previous heap entry; the stale entry is
    /// skipped lazily when it reaches the top.
    pub fn set(&mut self, key: K, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(key.clone(), seq);
        self.heap.push(Entry { priority, seq, key });
    }

    /// Remove `key` from the queue
    ///
    /// The heap entry is only marked dead (by dropping its stamp); it is
    /// physically discarded during a later `pop`.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        match self.live.remove(key) {
            Some(_) => Ok(()),
            None => Err(AlgoError::KeyNotFound),
        }
    }

    /// Remove and return the key with the lowest priority
    pub fn pop(&mut self) -> Result<(K, P)> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                self.live.remove(&entry.key);
                return Ok((entry.key, entry.priority));
            }
            // Stale: superseded by a later set() or removed.
        }
        Err(AlgoError::EmptyQueue)
    }

    /// Key and priority that the next `pop` would return
    ///
    /// Takes `&mut self` because stale entries at the top are discarded on
    /// the way.
    pub fn peek(&mut self) -> Option<(&K, &P)> {
        while let Some(entry) = self.heap.peek() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                break;
            }
            self.heap.pop();
        }
        self.heap.peek().map(|entry| (&entry.key, &entry.priority))
    }
}

impl<K: Eq + Hash + Clone, P: Ord> Default for PriorityQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}
