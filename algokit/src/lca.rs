//! Lowest common ancestor via binary lifting
//!
//! After O(n log n) preprocessing the table holds each node's ancestor at
//! every power-of-two distance, so an LCA query walks at most log n
//! levels. Tree traversal is iterative.

use core::hash::Hash;

use algokit_core::error::{AlgoError, Result};
use hashbrown::HashMap;

/// Rooted tree answering ancestor and distance queries
pub struct Lca<N> {
    root: N,
    index: HashMap<N, usize>,
    nodes: Vec<N>,
    graph: Vec<Vec<usize>>,
    depth: Vec<usize>,
    // In-tree flag; nodes never reached from the root stay out.
    reached: Vec<bool>,
    // up[j][node] = 2^j-th ancestor, None past the root.
    up: Vec<Vec<Option<usize>>>,
    max_log: usize,
}

impl<N: Eq + Hash + Clone> Lca<N> {
    /// Create a tree with the given root
    pub fn new(root: N) -> Self {
        let mut lca = Self {
            root: root.clone(),
            index: HashMap::new(),
            nodes: Vec::new(),
            graph: Vec::new(),
            depth: Vec::new(),
            reached: Vec::new(),
            up: Vec::new(),
            max_log: 0,
        };
        lca.intern(root);
        lca
    }

    /// Add an undirected tree edge between `u` and `v`
    pub fn add_edge(&mut self, u: N, v: N) {
        let u = self.intern(u);
        let v = self.intern(v);
        self.graph[u].push(v);
        self.graph[v].push(u);
    }

    /// Build the lifting table; call once after all edges are added
    pub fn preprocess(&mut self) {
        let n = self.nodes.len();
        self.depth = vec![0; n];
        self.reached = vec![false; n];
        self.max_log = (usize::BITS - n.leading_zeros()) as usize;
        self.up = vec![vec![None; n]; self.max_log];

        // Iterative DFS from the root fills depths and direct parents.
        let root = self.index[&self.root];
        self.reached[root] = true;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for i in 0..self.graph[node].len() {
                let next = self.graph[node][i];
                if self.reached[next] {
                    continue;
                }
                self.reached[next] = true;
                self.depth[next] = self.depth[node] + 1;
                self.up[0][next] = Some(node);
                stack.push(next);
            }
        }

        for j in 1..self.max_log {
            for node in 0..n {
                self.up[j][node] = self.up[j - 1][node].and_then(|mid| self.up[j - 1][mid]);
            }
        }
    }

    /// Lowest common ancestor of `u` and `v`
    ///
    /// `KeyNotFound` when either node is unknown, not connected to the
    /// root, or `preprocess` has not been called.
    pub fn lca(&self, u: &N, v: &N) -> Result<N> {
        let mut u = self.lookup(u)?;
        let mut v = self.lookup(v)?;

        if self.depth[u] < self.depth[v] {
            core::mem::swap(&mut u, &mut v);
        }

        let diff = self.depth[u] - self.depth[v];
        for i in 0..self.max_log {
            if (diff >> i) & 1 == 1 {
                if let Some(parent) = self.up[i][u] {
                    u = parent;
                }
            }
        }

        if u == v {
            return Ok(self.nodes[u].clone());
        }

        for i in (0..self.max_log).rev() {
            if self.up[i][u] != self.up[i][v] {
                if let (Some(pu), Some(pv)) = (self.up[i][u], self.up[i][v]) {
                    u = pu;
                    v = pv;
                }
            }
        }

        match self.up[0][u] {
            Some(ancestor) => Ok(self.nodes[ancestor].clone()),
            None => Err(AlgoError::KeyNotFound),
        }
    }

    /// Number of edges on the `u` to `v` path
    pub fn distance(&self, u: &N, v: &N) -> Result<usize> {
        let ancestor = self.lca(u, v)?;
        let u = self.lookup(u)?;
        let v = self.lookup(v)?;
        let a = self.lookup(&ancestor)?;
        Ok(self.depth[u] + self.depth[v] - 2 * self.depth[a])
    }

    fn lookup(&self, node: &N) -> Result<usize> {
        match self.index.get(node) {
            Some(&i) if self.reached.get(i).copied().unwrap_or(false) => Ok(i),
            _ => Err(AlgoError::KeyNotFound),
        }
    }

    fn intern(&mut self, node: N) -> usize {
        let next = self.nodes.len();
        match self.index.entry(node.clone()) {
            hashbrown::hash_map::Entry::Occupied(entry) => *entry.get(),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(next);
                self.nodes.push(node);
                self.graph.push(Vec::new());
                next
            }
        }
    }
}
