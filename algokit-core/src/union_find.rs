//! Disjoint-set union with a pluggable merge strategy
//!
//! Sets are arena-indexed: `make_set` hands out a dense `usize` id, and
//! every id stays valid for the life of the structure. Each set carries a
//! caller-defined state value; when two sets are united the winning root
//! absorbs the loser's state through the merge closure supplied at
//! construction. That replaces the "subclass and override `merge`" pattern
//! with an explicit capability.

use alloc::vec::Vec;

use crate::error::{AlgoError, Result};

/// Disjoint sets with path compression, union by rank and per-set state
///
/// With `state = 1` per element and an additive merge this tracks set
/// sizes; any other associative aggregation plugs in the same way.
pub struct UnionFind<S, M> {
    parent: Vec<usize>,
    rank: Vec<u8>,
    // Roots hold Some(state); absorbed elements are drained.
    state: Vec<Option<S>>,
    merge: M,
}

impl<S, M: FnMut(&mut S, S)> UnionFind<S, M> {
    /// Create an empty structure with the given merge strategy
    ///
    /// `merge(root_state, absorbed_state)` is called once per successful
    /// union, after the loser has been linked under the winner.
    pub fn new(merge: M) -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
            state: Vec::new(),
            merge,
        }
    }

    /// Number of elements ever created
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no element has been created yet
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Create a fresh singleton set and return its id
    pub fn make_set(&mut self, state: S) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.state.push(Some(state));
        id
    }

    /// Representative of the set containing `x`, with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            return Err(AlgoError::IndexOutOfBounds {
                index: x,
                size: self.parent.len(),
            });
        }

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point the whole chain at the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        Ok(root)
    }

    /// Unite the sets containing `x` and `y`; returns the surviving root
    ///
    /// A no-op (still returning the root) when both are already in the
    /// same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(root_x);
        }

        let (winner, loser) = if self.rank[root_x] < self.rank[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[loser] = winner;
        if self.rank[winner] == self.rank[loser] {
            self.rank[winner] += 1;
        }

        if let Some(absorbed) = self.state[loser].take() {
            if let Some(kept) = self.state[winner].as_mut() {
                (self.merge)(kept, absorbed);
            }
        }
        Ok(winner)
    }

    /// Whether `x` and `y` belong to the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Aggregated state of the set containing `x`
    pub fn state_of(&mut self, x: usize) -> Result<&S> {
        let root = self.find(x)?;
        self.state[root].as_ref().ok_or(AlgoError::KeyNotFound)
    }
}

fn merge_sizes(kept: &mut usize, absorbed: usize) {
    *kept += absorbed;
}

impl UnionFind<usize, fn(&mut usize, usize)> {
    /// `n` singleton sets whose state tracks the set size
    pub fn with_set_sizes(n: usize) -> Self {
        let mut sets = Self::new(merge_sizes as fn(&mut usize, usize));
        for _ in 0..n {
            sets.make_set(1);
        }
        sets
    }
}
