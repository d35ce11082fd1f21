//! 2-SAT solver over the implication graph
//!
//! A clause (a OR b) yields the implications NOT a -> b and NOT b -> a.
//! The formula is satisfiable iff no variable shares a strongly connected
//! component with its negation; the assignment reads off component ids.
//! O(n + m) via two iterative Kosaraju passes.

use algokit_core::error::{AlgoError, Result};

/// Boolean satisfiability with two literals per clause
///
/// Variables are indexed `0..n`. Literal node `2i` stands for `x_i`,
/// `2i + 1` for its negation.
pub struct TwoSat {
    n: usize,
    graph: Vec<Vec<usize>>,
    transpose: Vec<Vec<usize>>,
}

impl TwoSat {
    /// Solver for `n` boolean variables
    pub fn new(n: usize) -> Self {
        Self {
            n,
            graph: vec![Vec::new(); 2 * n],
            transpose: vec![Vec::new(); 2 * n],
        }
    }

    /// Add the clause `(a OR b)`, with either side optionally negated
    pub fn add_clause(&mut self, a: usize, a_neg: bool, b: usize, b_neg: bool) -> Result<()> {
        if a >= self.n {
            return Err(AlgoError::IndexOutOfBounds {
                index: a,
                size: self.n,
            });
        }
        if b >= self.n {
            return Err(AlgoError::IndexOutOfBounds {
                index: b,
                size: self.n,
            });
        }

        let a_node = 2 * a + usize::from(a_neg);
        let b_node = 2 * b + usize::from(b_neg);
        let not_a = a_node ^ 1;
        let not_b = b_node ^ 1;

        self.graph[not_a].push(b_node);
        self.graph[not_b].push(a_node);
        self.transpose[b_node].push(not_a);
        self.transpose[a_node].push(not_b);
        Ok(())
    }

    /// Satisfying assignment for `x_0 .. x_{n-1}`, `None` when unsatisfiable
    pub fn solve(&self) -> Option<Vec<bool>> {
        let size = 2 * self.n;
        let mut visited = vec![false; size];
        let mut finish_order = Vec::with_capacity(size);

        for start in 0..size {
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

        let mut component = vec![usize::MAX; size];
        let mut current = 0;
        for &root in finish_order.iter().rev() {
            if component[root] != usize::MAX {
                continue;
            }
            let mut stack = vec![root];
            component[root] = current;
            while let Some(node) = stack.pop() {
                for &prev in &self.transpose[node] {
                    if component[prev] == usize::MAX {
                        component[prev] = current;
                        stack.push(prev);
                    }
                }
            }
            current += 1;
        }

        // x_i forced true when its positive literal sits later in the
        // condensation order than its negation.
        let mut assignment = Vec::with_capacity(self.n);
        for i in 0..self.n {
            if component[2 * i] == component[2 * i + 1] {
                return None;
            }
            assignment.push(component[2 * i] > component[2 * i + 1]);
        }
        Some(assignment)
    }
}
