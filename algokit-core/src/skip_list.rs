//! Skip list: probabilistic sorted collection with O(log n) operations
//!
//! Multiple levels of forward links form express lanes over a sorted
//! singly-linked base level. Node heights are drawn from a geometric
//! distribution (promotion probability 1/2). Nodes live in an arena and
//! link by index; removed slots go on a free list for reuse, so there is
//! no manual pointer management anywhere.

use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const MAX_LEVEL: usize = 16;

// The head occupies arena slot 0 and stores no value.
const HEAD: usize = 0;

#[derive(Debug, Clone)]
struct SkipNode<T> {
    value: Option<T>,
    forward: Vec<Option<usize>>,
}

/// Sorted multiset with probabilistic balancing
///
/// Duplicates are kept. `new` uses a fixed RNG seed so runs are
/// reproducible; use `with_seed` to vary the level coin flips.
#[derive(Debug, Clone)]
pub struct SkipList<T> {
    nodes: Vec<SkipNode<T>>,
    free: Vec<usize>,
    level: usize,
    len: usize,
    rng: SmallRng,
}

impl<T: Ord> SkipList<T> {
    /// Create an empty list with the default level seed
    pub fn new() -> Self {
        Self::with_seed(0x5EED_1157)
    }

    /// Create an empty list whose level choices derive from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: vec![SkipNode {
                value: None,
                forward: vec![None; MAX_LEVEL + 1],
            }],
            free: Vec::new(),
            level: 0,
            len: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list stores no values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value`, keeping duplicates
    pub fn insert(&mut self, value: T) {
        let mut update = [HEAD; MAX_LEVEL + 1];
        let mut current = HEAD;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.nodes[current].forward[i] {
                if self.value_less_than(next, &value) {
                    current = next;
                } else {
                    break;
                }
            }
            update[i] = current;
        }

        let new_level = self.random_level();
        if new_level > self.level {
            for slot in update.iter_mut().take(new_level + 1).skip(self.level + 1) {
                *slot = HEAD;
            }
            self.level = new_level;
        }

        let node = self.alloc_node(value, new_level);
        for i in 0..=new_level {
            self.nodes[node].forward[i] = self.nodes[update[i]].forward[i];
            self.nodes[update[i]].forward[i] = Some(node);
        }
        self.len += 1;
    }

    /// Whether `value` is present
    pub fn contains(&self, value: &T) -> bool {
        let mut current = HEAD;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.nodes[current].forward[i] {
                if self.value_less_than(next, value) {
                    current = next;
                } else {
                    break;
                }
            }
        }
        match self.nodes[current].forward[0] {
            Some(candidate) => self.nodes[candidate].value.as_ref() == Some(value),
            None => false,
        }
    }

    /// Remove one occurrence of `value`; false when it was absent
    ///
    /// Absence is an expected outcome, not an error.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut update = [HEAD; MAX_LEVEL + 1];
        let mut current = HEAD;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.nodes[current].forward[i] {
                if self.value_less_than(next, value) {
                    current = next;
                } else {
                    break;
                }
            }
            update[i] = current;
        }

        let target = match self.nodes[current].forward[0] {
            Some(candidate) if self.nodes[candidate].value.as_ref() == Some(value) => candidate,
            _ => return false,
        };

        for i in 0..=self.level {
            if self.nodes[update[i]].forward[i] != Some(target) {
                break;
            }
            self.nodes[update[i]].forward[i] = self.nodes[target].forward[i];
        }

        while self.level > 0 && self.nodes[HEAD].forward[self.level].is_none() {
            self.level -= 1;
        }

        self.nodes[target].value = None;
        self.free.push(target);
        self.len -= 1;
        true
    }

    /// Values in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.nodes[HEAD].forward[0],
        }
    }

    fn value_less_than(&self, node: usize, value: &T) -> bool {
        match self.nodes[node].value.as_ref() {
            Some(v) => v < value,
            None => false,
        }
    }

    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while self.rng.gen::<bool>() && level < MAX_LEVEL {
            level += 1;
        }
        level
    }

    fn alloc_node(&mut self, value: T, level: usize) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot].value = Some(value);
                self.nodes[slot].forward.clear();
                self.nodes[slot].forward.resize(level + 1, None);
                slot
            }
            None => {
                self.nodes.push(SkipNode {
                    value: Some(value),
                    forward: vec![None; level + 1],
                });
                self.nodes.len() - 1
            }
        }
    }
}

impl<T: Ord + Clone> SkipList<T> {
    /// Collect the values in ascending order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending iterator over a [`SkipList`]
pub struct Iter<'a, T> {
    list: &'a SkipList<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = self.list.nodes[node].forward[0];
        self.list.nodes[node].value.as_ref()
    }
}
