//! Kosaraju's strongly connected components
//!
//! Two DFS passes, O(V + E): the first computes a finish order on the
//! graph, the second collects components on the transpose in reverse
//! finish order. Both passes use an explicit stack so deep graphs cannot
//! overflow the call stack.

use core::hash::Hash;

use hashbrown::HashMap;

/// Directed graph queried for its strongly connected components
pub struct SccGraph<N> {
    index: HashMap<N, usize>,
    // Interned names in first-seen order; iteration order is deterministic.
    nodes: Vec<N>,
    graph: Vec<Vec<usize>>,
    transpose: Vec<Vec<usize>>,
}

impl<N: Eq + Hash + Clone> SccGraph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            graph: Vec::new(),
            transpose: Vec::new(),
        }
    }

    /// Register `node` even if no edge touches it
    pub fn add_node(&mut self, node: N) {
        self.intern(node);
    }

    /// Add a directed edge from `u` to `v`
    pub fn add_edge(&mut self, u: N, v: N) {
        let u = self.intern(u);
        let v = self.intern(v);
        self.graph[u].push(v);
        self.transpose[v].push(u);
    }

    /// All strongly connected components
    ///
    /// Components come out in reverse topological order of the
    /// condensation: if any edge leads from component A to component B,
    /// then A appears before B.
    pub fn find_sccs(&self) -> Vec<Vec<N>> {
        let n = self.nodes.len();
        let mut visited = vec![false; n];
        let mut finish_order = Vec::with_capacity(n);

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack = vec![(start, 0usize)];
            while let Some((node, cursor)) = stack.last_mut() {
                if let Some(&next) = self.graph[*node].get(*cursor) {
                    *cursor += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                } else {
                    finish_order.push(*node);
                    stack.pop();
                }
            }
        }

        let mut assigned = vec![false; n];
        let mut sccs = Vec::new();
        for &root in finish_order.iter().rev() {
            if assigned[root] {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![root];
            assigned[root] = true;
            while let Some(node) = stack.pop() {
                component.push(self.nodes[node].clone());
                for &prev in &self.transpose[node] {
                    if !assigned[prev] {
                        assigned[prev] = true;
                        stack.push(prev);
                    }
                }
            }
            sccs.push(component);
        }
        sccs
    }

    fn intern(&mut self, node: N) -> usize {
        let next = self.nodes.len();
        match self.index.entry(node.clone()) {
            hashbrown::hash_map::Entry::Occupied(entry) => *entry.get(),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.nodes.push(node);
                self.graph.push(Vec::new());
                self.transpose.push(Vec::new());
                next
            }
        }
    }
}

impl<N: Eq + Hash + Clone> Default for SccGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
