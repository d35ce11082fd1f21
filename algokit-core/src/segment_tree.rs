//! Segment tree for range sums with point assignment
//!
//! Classic recursive divide-and-conquer over a fixed binary tree stored in
//! a 4n array; node 1 is the root, node `2k`/`2k+1` its children. Swap the
//! combining operator to get range minimum/maximum variants.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{AlgoError, Result};
use crate::traits::Summable;

/// Range-reduce structure with O(log n) point update and range query
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentTree<T> {
    n: usize,
    zero: T,
    tree: Vec<T>,
}

impl<T: Summable> SegmentTree<T> {
    /// Build a tree over `values` in O(n)
    pub fn from_slice(values: &[T], zero: T) -> Self {
        let n = values.len();
        let mut result = Self {
            n,
            zero: zero.clone(),
            tree: vec![zero; if n == 0 { 0 } else { 4 * n }],
        };
        if n > 0 {
            result.build(values, 1, 0, n - 1);
        }
        result
    }

    /// Number of logical elements
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the tree holds no elements
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Assign `value` to the element at `index`
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.n {
            return Err(AlgoError::IndexOutOfBounds {
                index,
                size: self.n,
            });
        }
        self.update_node(1, 0, self.n - 1, index, value);
        Ok(())
    }

    /// Sum of the elements in `[left, right]`
    ///
    /// Strict bounds policy: an inverted or out-of-range interval fails,
    /// in contrast to the Fenwick tree's permissive `range_query`.
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        if left > right || right >= self.n {
            return Err(AlgoError::InvalidRange {
                left,
                right,
                size: self.n,
            });
        }
        Ok(self.query_node(1, 0, self.n - 1, left, right))
    }

    fn build(&mut self, values: &[T], node: usize, start: usize, end: usize) {
        if start == end {
            self.tree[node] = values[start].clone();
        } else {
            let mid = (start + end) / 2;
            self.build(values, 2 * node, start, mid);
            self.build(values, 2 * node + 1, mid + 1, end);
            self.tree[node] = self.tree[2 * node].clone() + self.tree[2 * node + 1].clone();
        }
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, index: usize, value: T) {
        if start == end {
            self.tree[node] = value;
        } else {
            let mid = (start + end) / 2;
            if index <= mid {
                self.update_node(2 * node, start, mid, index, value);
            } else {
                self.update_node(2 * node + 1, mid + 1, end, index, value);
            }
            self.tree[node] = self.tree[2 * node].clone() + self.tree[2 * node + 1].clone();
        }
    }

    fn query_node(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> T {
        if right < start || left > end {
            return self.zero.clone();
        }
        if left <= start && end <= right {
            return self.tree[node].clone();
        }
        let mid = (start + end) / 2;
        self.query_node(2 * node, start, mid, left, right)
            + self.query_node(2 * node + 1, mid + 1, end, left, right)
    }
}
