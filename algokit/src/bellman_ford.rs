//! Bellman-Ford shortest paths with negative edge weights
//!
//! Relaxes every edge V-1 times, then one more sweep to detect a negative
//! cycle reachable from the source. O(VE). Unreached vertices simply stay
//! out of the distance map, so no infinity sentinel is needed.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::dijkstra::reconstruct_path;
use crate::traits::Weight;

/// Directed weighted graph supporting negative edges
pub struct BellmanFord<N, W> {
    zero: W,
    edges: Vec<(N, N, W)>,
    nodes: HashSet<N>,
}

impl<N: Eq + Hash + Clone, W: Weight> BellmanFord<N, W> {
    /// Create an empty graph; `zero` is the distance of the source to itself
    pub fn new(zero: W) -> Self {
        Self {
            zero,
            edges: Vec::new(),
            nodes: HashSet::new(),
        }
    }

    /// Add a directed edge from `u` to `v`; `weight` may be negative
    pub fn add_edge(&mut self, u: N, v: N, weight: W) {
        self.nodes.insert(u.clone());
        self.nodes.insert(v.clone());
        self.edges.push((u, v, weight));
    }

    /// Distances and predecessors for every vertex reachable from `source`
    ///
    /// `None` when a negative cycle is reachable from the source. Vertices
    /// absent from the distance map are unreachable.
    pub fn shortest_paths(
        &self,
        source: &N,
    ) -> Option<(HashMap<N, W>, HashMap<N, Option<N>>)> {
        let mut distances = HashMap::new();
        let mut predecessors = HashMap::new();
        distances.insert(source.clone(), self.zero.clone());
        predecessors.insert(source.clone(), None);

        let rounds = self.nodes.len().saturating_sub(1);
        for _ in 0..rounds {
            let mut changed = false;
            for (u, v, weight) in &self.edges {
                let Some(du) = distances.get(u) else { continue };
                let candidate = du.clone() + weight.clone();
                if distances.get(v).map_or(true, |dv| candidate < *dv) {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Any edge still relaxable means a reachable negative cycle.
        for (u, v, weight) in &self.edges {
            let Some(du) = distances.get(u) else { continue };
            let candidate = du.clone() + weight.clone();
            if distances.get(v).map_or(true, |dv| candidate < *dv) {
                return None;
            }
        }

        Some((distances, predecessors))
    }

    /// Vertex sequence of a shortest `source -> target` path
    ///
    /// `None` when `target` is unreachable or a negative cycle is reachable
    /// from the source.
    pub fn shortest_path(&self, source: &N, target: &N) -> Option<Vec<N>> {
        let (_, predecessors) = self.shortest_paths(source)?;
        reconstruct_path(&predecessors, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_edge_shortcut() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge("a", "b", 4);
        bf.add_edge("a", "c", 2);
        bf.add_edge("b", "c", -3);
        bf.add_edge("c", "d", 2);
        bf.add_edge("d", "b", 1);

        let (distances, _) = bf.shortest_paths(&"a").unwrap();
        assert_eq!(distances[&"c"], 1);
        assert_eq!(distances[&"d"], 3);

        let path = bf.shortest_path(&"a", &"d").unwrap();
        assert_eq!(path.first(), Some(&"a"));
        assert_eq!(path.last(), Some(&"d"));
    }

    #[test]
    fn test_negative_cycle() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge(0, 1, 1);
        bf.add_edge(1, 2, -3);
        bf.add_edge(2, 0, 1);

        assert!(bf.shortest_paths(&0).is_none());
        assert!(bf.shortest_path(&0, &2).is_none());
    }

    #[test]
    fn test_single_node() {
        let bf: BellmanFord<&str, i64> = BellmanFord::new(0);
        let (distances, predecessors) = bf.shortest_paths(&"a").unwrap();
        assert_eq!(distances[&"a"], 0);
        assert_eq!(predecessors[&"a"], None);
    }

    #[test]
    fn test_unreachable_nodes_absent() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge(1, 2, 5);
        bf.add_edge(3, 4, 3);

        let (distances, _) = bf.shortest_paths(&1).unwrap();
        assert_eq!(distances[&2], 5);
        assert!(!distances.contains_key(&3));
        assert!(!distances.contains_key(&4));
        assert!(bf.shortest_path(&1, &4).is_none());
    }

    #[test]
    fn test_all_negative_edges() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge("a", "b", -1);
        bf.add_edge("b", "c", -2);
        bf.add_edge("c", "d", -3);

        let (distances, _) = bf.shortest_paths(&"a").unwrap();
        assert_eq!(distances[&"d"], -6);
    }

    #[test]
    fn test_path_reconstruction() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge(0, 1, 5);
        bf.add_edge(1, 2, 3);
        bf.add_edge(0, 2, 10);

        assert_eq!(bf.shortest_path(&0, &2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_negative_edge_relaxation() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge(0, 1, 10);
        bf.add_edge(0, 2, 5);
        bf.add_edge(2, 1, -8);

        let (distances, _) = bf.shortest_paths(&0).unwrap();
        assert_eq!(distances[&1], -3);
    }

    #[test]
    fn test_negative_self_loop() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge(0, 0, -1);
        assert!(bf.shortest_paths(&0).is_none());
    }

    #[test]
    fn test_complex_graph() {
        let mut bf = BellmanFord::new(0i64);
        bf.add_edge("s", "a", 10);
        bf.add_edge("s", "e", 8);
        bf.add_edge("a", "c", 2);
        bf.add_edge("c", "d", 5);
        bf.add_edge("d", "b", 3);
        bf.add_edge("e", "d", 1);

        let (distances, _) = bf.shortest_paths(&"s").unwrap();
        assert_eq!(distances[&"d"], 9);
        assert_eq!(distances[&"b"], 12);
    }

    #[test]
    fn test_agrees_with_dijkstra_on_nonnegative_graphs() {
        use crate::Dijkstra;
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..20 {
            let nodes = rng.gen_range(2..12usize);
            let mut d = Dijkstra::new(0i64);
            let mut bf = BellmanFord::new(0i64);
            for _ in 0..rng.gen_range(1..40) {
                let u = rng.gen_range(0..nodes);
                let v = rng.gen_range(0..nodes);
                let w = rng.gen_range(0..100i64);
                d.add_edge(u, v, w);
                bf.add_edge(u, v, w);
            }

            let (dd, _) = d.shortest_paths(&0);
            let (bd, _) = bf.shortest_paths(&0).unwrap();
            assert_eq!(dd.len(), bd.len());
            for (node, dist) in &dd {
                assert_eq!(bd.get(node), Some(dist));
            }
        }
    }
}
