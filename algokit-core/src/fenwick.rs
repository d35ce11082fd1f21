//! Fenwick tree (binary indexed tree) for prefix sums with point updates
//!
//! Cell `i` of the one-indexed tree array holds the sum of the logical
//! elements in `(i - lowbit(i), i]`, so both `update` and `query` finish
//! in O(log n) by walking the lowest set bit of the index.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{AlgoError, Result};
use crate::traits::GroupElement;

/// Lowest set bit of `i`
const fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Largest power of two `<= n`; `n` must be non-zero
fn highest_one_bit(n: usize) -> usize {
    1 << (usize::BITS - 1 - n.leading_zeros())
}

/// Prefix-sum array with O(log n) point update and query
///
/// Generic over the accumulated value; the identity element is supplied at
/// construction so non-numeric sums work too.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FenwickTree<T> {
    size: usize,
    zero: T,
    // One-indexed; tree[0] is unused padding.
    tree: Vec<T>,
}

impl<T: GroupElement> FenwickTree<T> {
    /// Create a tree of `size` logical elements, all equal to `zero`
    pub fn new(size: usize, zero: T) -> Self {
        Self {
            size,
            zero: zero.clone(),
            tree: vec![zero; size + 1],
        }
    }

    /// Build a tree over `values` in O(n)
    ///
    /// Each cell is the difference of two prefix sums at the binary-indexed
    /// boundaries, which yields exactly the state that one `update` per
    /// element would produce.
    pub fn from_slice(values: &[T], zero: T) -> Self {
        let n = values.len();
        let mut prefix = vec![zero.clone(); n + 1];
        for i in 0..n {
            prefix[i + 1] = prefix[i].clone() + values[i].clone();
        }

        let mut result = Self::new(n, zero);
        for i in 1..=n {
            let range_start = i - lowbit(i) + 1;
            result.tree[i] = prefix[i].clone() - prefix[range_start - 1].clone();
        }
        result
    }

    /// Number of logical elements
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Add `delta` to the element at `index`
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        if index >= self.size {
            return Err(AlgoError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }

        let mut i = index + 1;
        while i <= self.size {
            self.tree[i] = self.tree[i].clone() + delta.clone();
            i += lowbit(i);
        }
        Ok(())
    }

    /// Sum of the elements in `[0, index]`
    pub fn query(&self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(AlgoError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(self.prefix_sum(index))
    }

    /// Sum of the elements in `[left, right]`
    ///
    /// Unlike `query`, an empty or out-of-range interval is a normal query
    /// outcome here and returns the zero element instead of failing.
    pub fn range_query(&self, left: usize, right: usize) -> T {
        if left > right || right >= self.size {
            return self.zero.clone();
        }
        if left == 0 {
            return self.prefix_sum(right);
        }
        self.prefix_sum(right) - self.prefix_sum(left - 1)
    }

    /// Current value of the single element at `index`
    pub fn get_value(&self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(AlgoError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        if index == 0 {
            return Ok(self.prefix_sum(0));
        }
        Ok(self.prefix_sum(index) - self.prefix_sum(index - 1))
    }

    // Unchecked prefix sum over [0, index]; callers validate bounds.
    fn prefix_sum(&self, index: usize) -> T {
        let mut i = index + 1;
        let mut sum = self.zero.clone();
        while i > 0 {
            sum = sum + self.tree[i].clone();
            i -= lowbit(i);
        }
        sum
    }
}

impl<T: GroupElement + PartialOrd> FenwickTree<T> {
    /// Smallest index `>= start_index` whose element is strictly positive,
    /// or `None` if every element from `start_index` on is zero
    ///
    /// Runs one greedy bit-by-bit descent over the tree levels, O(log n)
    /// with no scanning: starting from the highest power of two `<= size`,
    /// a step is taken whenever the accumulated prefix stays `<=` the
    /// prefix sum just before `start_index`. The final one-based cursor is
    /// the zero-based answer.
    ///
    /// Requires that every delta ever passed to `update` was non-negative;
    /// with mixed signs the descent can settle on an arbitrary index. This
    /// precondition is documented, not checked.
    pub fn first_nonzero_index(&self, start_index: usize) -> Option<usize> {
        if start_index >= self.size {
            return None;
        }

        let prefix_before = if start_index > 0 {
            self.prefix_sum(start_index - 1)
        } else {
            self.zero.clone()
        };
        if self.prefix_sum(self.size - 1) == prefix_before {
            return None;
        }

        // Find the largest one-based position whose prefix sum is still
        // <= prefix_before; the answer sits right after it.
        let mut idx = 0usize;
        let mut sum = self.zero.clone();
        let mut bit = highest_one_bit(self.size);
        while bit > 0 {
            let next = idx + bit;
            if next <= self.size {
                let candidate = sum.clone() + self.tree[next].clone();
                if candidate <= prefix_before {
                    sum = candidate;
                    idx = next;
                }
            }
            bit >>= 1;
        }

        Some(idx)
    }
}
