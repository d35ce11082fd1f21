//! Dijkstra's algorithm for single-source shortest paths
//!
//! Non-negative edge weights only; a binary heap picks the closest frontier
//! vertex, O((V + E) log V). Negative weights silently produce wrong
//! answers here, use [`crate::BellmanFord`] for those.

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use crate::traits::Weight;

// Heap entry ordered by distance alone, inverted for min-heap behavior.
struct Visit<N, W> {
    dist: W,
    node: N,
}

impl<N, W: Ord> Ord for Visit<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.cmp(&self.dist)
    }
}

impl<N, W: Ord> PartialOrd for Visit<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Ord> PartialEq for Visit<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl<N, W: Ord> Eq for Visit<N, W> {}

/// Directed weighted graph queried for shortest paths from one source
pub struct Dijkstra<N, W> {
    zero: W,
    graph: HashMap<N, Vec<(N, W)>>,
}

impl<N: Eq + Hash + Clone, W: Weight> Dijkstra<N, W> {
    /// Create an empty graph; `zero` is the distance of the source to itself
    pub fn new(zero: W) -> Self {
        Self {
            zero,
            graph: HashMap::new(),
        }
    }

    /// Add a directed edge from `u` to `v`
    pub fn add_edge(&mut self, u: N, v: N, weight: W) {
        self.graph.entry(u).or_default().push((v, weight));
    }

    /// Distances and predecessors for every vertex reachable from `source`
    ///
    /// A vertex absent from the distance map is unreachable. The source maps
    /// to predecessor `None`.
    pub fn shortest_paths(&self, source: &N) -> (HashMap<N, W>, HashMap<N, Option<N>>) {
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        distances.insert(source.clone(), self.zero.clone());
        predecessors.insert(source.clone(), None);

        let mut heap = BinaryHeap::new();
        heap.push(Visit {
            dist: self.zero.clone(),
            node: source.clone(),
        });

        while let Some(Visit { dist, node }) = heap.pop() {
            // Entries left behind by earlier relaxations are stale.
            if distances.get(&node).map_or(true, |best| dist > *best) {
                continue;
            }

            let Some(neighbors) = self.graph.get(&node) else {
                continue;
            };
            for (next, weight) in neighbors {
                let candidate = dist.clone() + weight.clone();
                let improved = distances
                    .get(next)
                    .map_or(true, |current| candidate < *current);
                if improved {
                    distances.insert(next.clone(), candidate.clone());
                    predecessors.insert(next.clone(), Some(node.clone()));
                    heap.push(Visit {
                        dist: candidate,
                        node: next.clone(),
                    });
                }
            }
        }

        (distances, predecessors)
    }

    /// Vertex sequence of a shortest `source -> target` path
    ///
    /// `None` when `target` is unreachable.
    pub fn shortest_path(&self, source: &N, target: &N) -> Option<Vec<N>> {
        let (_, predecessors) = self.shortest_paths(source);
        reconstruct_path(&predecessors, target)
    }
}

/// Walk a predecessor map back from `target` to the source
pub(crate) fn reconstruct_path<N: Eq + Hash + Clone>(
    predecessors: &HashMap<N, Option<N>>,
    target: &N,
) -> Option<Vec<N>> {
    if !predecessors.contains_key(target) {
        return None;
    }
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(Some(prev)) = predecessors.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    Some(path)
}
