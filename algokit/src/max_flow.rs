//! Edmonds-Karp maximum flow
//!
//! Ford-Fulkerson with BFS augmenting paths, so each augmentation uses a
//! path with the fewest edges and the algorithm runs in O(V * E^2). Nodes
//! are interned to dense indices on `add_edge`; every edge is stored next
//! to its residual twin, ids `2k` and `2k + 1`.

use core::hash::Hash;
use std::collections::VecDeque;

use algokit_core::error::{AlgoError, Result};
use hashbrown::HashMap;

use crate::traits::Capacity;

struct FlowEdge<C> {
    to: usize,
    capacity: C,
    initial: C,
}

/// Flow network over generic nodes and capacities
///
/// Parallel edges between the same pair of nodes are allowed; each
/// `add_edge` call creates an independent edge.
pub struct EdmondsKarp<N, C> {
    zero: C,
    index: HashMap<N, usize>,
    // Outgoing edge ids per interned node.
    adjacency: Vec<Vec<usize>>,
    edges: Vec<FlowEdge<C>>,
}

impl<N: Eq + Hash + Clone, C: Capacity> EdmondsKarp<N, C> {
    /// Create an empty network; `zero` is the capacity of residual twins
    pub fn new(zero: C) -> Self {
        Self {
            zero,
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a directed edge from `u` to `v` with the given capacity
    pub fn add_edge(&mut self, u: N, v: N, capacity: C) {
        let u = self.intern(u);
        let v = self.intern(v);
        self.adjacency[u].push(self.edges.len());
        self.edges.push(FlowEdge {
            to: v,
            capacity: capacity.clone(),
            initial: capacity,
        });
        self.adjacency[v].push(self.edges.len());
        self.edges.push(FlowEdge {
            to: u,
            capacity: self.zero.clone(),
            initial: self.zero.clone(),
        });
    }

    /// Push as much flow as the residual network admits from `source` to
    /// `sink` and return the amount
    ///
    /// On a network with fresh or reset flows this is the maximum flow.
    /// Residual capacities persist, so call [`Self::reset_flows`] before
    /// solving for a different source/sink pair.
    pub fn max_flow(&mut self, source: &N, sink: &N) -> Result<C> {
        let s = self.lookup(source)?;
        let t = self.lookup(sink)?;

        let mut total = self.zero.clone();
        if s == t {
            return Ok(total);
        }
        while let Some(path) = self.augmenting_path(s, t) {
            let mut bottleneck = self.edges[path[0]].capacity.clone();
            for &edge in &path[1..] {
                bottleneck = bottleneck.min(self.edges[edge].capacity.clone());
            }
            for &edge in &path {
                self.edges[edge].capacity =
                    self.edges[edge].capacity.clone() - bottleneck.clone();
                self.edges[edge ^ 1].capacity =
                    self.edges[edge ^ 1].capacity.clone() + bottleneck.clone();
            }
            total = total + bottleneck;
        }
        Ok(total)
    }

    /// Net flow currently carried by the `u -> v` edges
    ///
    /// Zero when either node is unknown or no such edge exists.
    pub fn flow(&self, u: &N, v: &N) -> C {
        let mut total = self.zero.clone();
        let (Some(&u), Some(&v)) = (self.index.get(u), self.index.get(v)) else {
            return total;
        };
        for &edge in &self.adjacency[u] {
            // Odd ids are residual twins, not input edges.
            if edge % 2 == 0 && self.edges[edge].to == v {
                total = total + (self.edges[edge].initial.clone()
                    - self.edges[edge].capacity.clone());
            }
        }
        total
    }

    /// Restore every edge to its initial capacity, discarding all flow
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.capacity = edge.initial.clone();
        }
    }

    fn intern(&mut self, node: N) -> usize {
        let next = self.adjacency.len();
        match self.index.entry(node) {
            hashbrown::hash_map::Entry::Occupied(entry) => *entry.get(),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.adjacency.push(Vec::new());
                next
            }
        }
    }

    fn lookup(&self, node: &N) -> Result<usize> {
        self.index.get(node).copied().ok_or(AlgoError::KeyNotFound)
    }

    // BFS in the residual network; returns the edge ids of a shortest
    // augmenting path, source first.
    fn augmenting_path(&self, s: usize, t: usize) -> Option<Vec<usize>> {
        let mut incoming = vec![usize::MAX; self.adjacency.len()];
        let mut seen = vec![false; self.adjacency.len()];
        seen[s] = true;

        let mut queue = VecDeque::new();
        queue.push_back(s);
        'bfs: while let Some(node) = queue.pop_front() {
            for &edge in &self.adjacency[node] {
                let next = self.edges[edge].to;
                if seen[next] || self.edges[edge].capacity == self.zero {
                    continue;
                }
                seen[next] = true;
                incoming[next] = edge;
                if next == t {
                    break 'bfs;
                }
                queue.push_back(next);
            }
        }

        if !seen[t] {
            return None;
        }
        let mut path = Vec::new();
        let mut node = t;
        while node != s {
            let edge = incoming[node];
            path.push(edge);
            node = self.edges[edge ^ 1].to;
        }
        path.reverse();
        Some(path)
    }
}
