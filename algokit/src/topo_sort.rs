//! Topological ordering of directed acyclic graphs
//!
//! Kahn's algorithm (BFS over in-degrees) and an iterative three-color
//! DFS, both O(V + E). A cyclic graph has no ordering, reported as `None`
//! rather than an error since it is an answer about the input.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashMap;

const WHITE: u8 = 0;
const GRAY: u8 = 1;
const BLACK: u8 = 2;

/// Directed graph queried for a topological ordering
pub struct TopologicalSort<N> {
    index: HashMap<N, usize>,
    // Interned names in first-seen order; ties break deterministically.
    nodes: Vec<N>,
    graph: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
}

impl<N: Eq + Hash + Clone> TopologicalSort<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            graph: Vec::new(),
            in_degree: Vec::new(),
        }
    }

    /// Register `node` even if no edge touches it
    pub fn add_node(&mut self, node: N) {
        self.intern(node);
    }

    /// Add a directed edge from `u` to `v` (u must come before v)
    pub fn add_edge(&mut self, u: N, v: N) {
        let u = self.intern(u);
        let v = self.intern(v);
        self.graph[u].push(v);
        self.in_degree[v] += 1;
    }

    /// Topological ordering via Kahn's algorithm, `None` on a cycle
    pub fn kahn_sort(&self) -> Option<Vec<N>> {
        let mut in_degree = self.in_degree.clone();
        let mut queue: VecDeque<usize> = (0..self.nodes.len())
            .filter(|&node| in_degree[node] == 0)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.graph[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() != self.nodes.len() {
            return None;
        }
        Some(order.into_iter().map(|i| self.nodes[i].clone()).collect())
    }

    /// Topological ordering via depth-first search, `None` on a cycle
    ///
    /// Iterative with a gray/black coloring; a gray node reached again is
    /// a back edge.
    pub fn dfs_sort(&self) -> Option<Vec<N>> {
        let mut color = vec![WHITE; self.nodes.len()];
        let mut finish_order = Vec::with_capacity(self.nodes.len());

        for start in 0..self.nodes.len() {
            if color[start] != WHITE {
                continue;
            }
            color[start] = GRAY;
            let mut stack = vec![(start, 0usize)];
            while let Some((node, cursor)) = stack.last_mut() {
                if let Some(&next) = self.graph[*node].get(*cursor) {
                    *cursor += 1;
                    match color[next] {
                        GRAY => return None,
                        WHITE => {
                            color[next] = GRAY;
                            stack.push((next, 0));
                        }
                        _ => {}
                    }
                } else {
                    color[*node] = BLACK;
                    finish_order.push(*node);
                    stack.pop();
                }
            }
        }

        Some(
            finish_order
                .into_iter()
                .rev()
                .map(|i| self.nodes[i].clone())
                .collect(),
        )
    }

    /// Whether the graph contains a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.kahn_sort().is_none()
    }

    /// Longest path length (in edges) ending at each node, `None` on a cycle
    pub fn longest_path(&self) -> Option<HashMap<N, usize>> {
        let order = self.kahn_order_indices()?;
        let mut dist = vec![0usize; self.nodes.len()];
        for node in order {
            for &next in &self.graph[node] {
                dist[next] = dist[next].max(dist[node] + 1);
            }
        }
        Some(
            dist.into_iter()
                .enumerate()
                .map(|(i, d)| (self.nodes[i].clone(), d))
                .collect(),
        )
    }

    fn kahn_order_indices(&self) -> Option<Vec<usize>> {
        let mut in_degree = self.in_degree.clone();
        let mut queue: VecDeque<usize> = (0..self.nodes.len())
            .filter(|&node| in_degree[node] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.graph[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }
        (order.len() == self.nodes.len()).then_some(order)
    }

    fn intern(&mut self, node: N) -> usize {
        let next = self.nodes.len();
        match self.index.entry(node.clone()) {
            hashbrown::hash_map::Entry::Occupied(entry) => *entry.get(),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.nodes.push(node);
                self.graph.push(Vec::new());
                self.in_degree.push(0);
                next
            }
        }
    }
}

impl<N: Eq + Hash + Clone> Default for TopologicalSort<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position<N: PartialEq>(order: &[N], node: N) -> usize {
        order.iter().position(|n| *n == node).unwrap()
    }

    fn assert_respects<N: PartialEq + Clone>(order: &[N], constraints: &[(N, N)]) {
        for (u, v) in constraints {
            assert!(position(order, u.clone()) < position(order, v.clone()));
        }
    }

    #[test]
    fn test_both_algorithms_agree_on_validity() {
        let mut ts = TopologicalSort::new();
        for (u, v) in [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)] {
            ts.add_edge(u, v);
        }
        assert!(ts.kahn_sort().is_some());
        assert!(ts.dfs_sort().is_some());
        assert!(!ts.has_cycle());

        let mut cyclic = TopologicalSort::new();
        cyclic.add_edge(1, 2);
        cyclic.add_edge(2, 3);
        cyclic.add_edge(3, 1);
        assert!(cyclic.has_cycle());
        assert!(cyclic.kahn_sort().is_none());
        assert!(cyclic.dfs_sort().is_none());
    }

    #[test]
    fn test_empty_graph() {
        let ts: TopologicalSort<i32> = TopologicalSort::new();
        assert_eq!(ts.kahn_sort(), Some(vec![]));
        assert_eq!(ts.dfs_sort(), Some(vec![]));
        assert!(!ts.has_cycle());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut ts = TopologicalSort::new();
        ts.add_edge("a", "a");
        assert!(ts.has_cycle());

        let mut single = TopologicalSort::new();
        single.add_node("a");
        assert_eq!(single.kahn_sort(), Some(vec!["a"]));
        assert!(!single.has_cycle());
    }

    #[test]
    fn test_chain() {
        let mut ts = TopologicalSort::new();
        for (u, v) in [("a", "b"), ("b", "c"), ("c", "d")] {
            ts.add_edge(u, v);
        }
        assert_eq!(ts.kahn_sort(), Some(vec!["a", "b", "c", "d"]));
        assert_eq!(ts.dfs_sort(), Some(vec!["a", "b", "c", "d"]));
    }

    #[test]
    fn test_disconnected_components() {
        let mut ts = TopologicalSort::new();
        ts.add_edge("a", "b");
        ts.add_edge("c", "d");

        let constraints = [("a", "b"), ("c", "d")];
        for order in [ts.kahn_sort().unwrap(), ts.dfs_sort().unwrap()] {
            assert_eq!(order.len(), 4);
            assert_respects(&order, &constraints);
        }
    }

    #[test]
    fn test_diamond() {
        let mut ts = TopologicalSort::new();
        let edges = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")];
        for (u, v) in edges {
            ts.add_edge(u, v);
        }
        for order in [ts.kahn_sort().unwrap(), ts.dfs_sort().unwrap()] {
            assert_respects(&order, &edges);
        }
    }

    #[test]
    fn test_complex_dag() {
        let mut ts = TopologicalSort::new();
        let edges = [(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 6), (5, 6)];
        for (u, v) in edges {
            ts.add_edge(u, v);
        }
        for order in [ts.kahn_sort().unwrap(), ts.dfs_sort().unwrap()] {
            assert_respects(&order, &edges);
        }
    }

    #[test]
    fn test_large_cycle() {
        let mut ts = TopologicalSort::new();
        let n = 100;
        for i in 0..n {
            ts.add_edge(i, (i + 1) % n);
        }
        assert!(ts.has_cycle());
        assert!(ts.kahn_sort().is_none());
        assert!(ts.dfs_sort().is_none());
    }

    #[test]
    fn test_longest_path() {
        let mut ts = TopologicalSort::new();
        for (u, v) in [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e")] {
            ts.add_edge(u, v);
        }

        let longest = ts.longest_path().unwrap();
        assert_eq!(longest[&"a"], 0);
        assert_eq!(longest[&"b"], 1);
        assert_eq!(longest[&"c"], 1);
        assert_eq!(longest[&"d"], 2);
        assert_eq!(longest[&"e"], 3);
    }

    #[test]
    fn test_longest_path_with_cycle() {
        let mut ts = TopologicalSort::new();
        for (u, v) in [(1, 2), (2, 3), (3, 1)] {
            ts.add_edge(u, v);
        }
        assert!(ts.longest_path().is_none());
    }

    #[test]
    fn test_multiple_sources() {
        let mut ts = TopologicalSort::new();
        let edges = [(1, 3), (2, 3), (3, 4), (5, 6)];
        for (u, v) in edges {
            ts.add_edge(u, v);
        }
        for order in [ts.kahn_sort().unwrap(), ts.dfs_sort().unwrap()] {
            assert_respects(&order, &edges);
        }
    }

    #[test]
    fn test_layered_dag() {
        let mut ts = TopologicalSort::new();
        let layers = 10;
        let width = 10;
        for layer in 0..layers - 1 {
            for i in 0..width {
                for j in 0..width {
                    ts.add_edge(layer * width + i, (layer + 1) * width + j);
                }
            }
        }

        let order = ts.kahn_sort().unwrap();
        assert_eq!(order.len(), layers * width);
        assert!(!ts.has_cycle());
        assert!(ts.dfs_sort().is_some());
    }
}
