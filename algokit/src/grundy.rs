//! Sprague-Grundy values for impartial games
//!
//! For finite acyclic normal-play games the Grundy value of a position is
//! the mex of its successors' values, and a sum of independent subgames
//! is winning iff the XOR of their values is non-zero. The engine wraps a
//! caller-supplied move function and memoizes per state.
//!
//! States must be canonical (a sorted tuple of heap sizes, say) and the
//! move function must never produce a cycle.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Minimum excludant: smallest non-negative integer not in `values`
pub fn mex(values: impl IntoIterator<Item = u64>) -> u64 {
    let seen: HashSet<u64> = values.into_iter().collect();
    let mut g = 0;
    while seen.contains(&g) {
        g += 1;
    }
    g
}

/// Memoized Grundy evaluation over a caller-supplied move function
pub struct GrundyEngine<S, F> {
    moves: F,
    memo: HashMap<S, u64>,
}

impl<S, F> GrundyEngine<S, F>
where
    S: Eq + Hash + Clone,
    F: Fn(&S) -> Vec<S>,
{
    /// Wrap `moves`, which lists the positions reachable in one move
    pub fn new(moves: F) -> Self {
        Self {
            moves,
            memo: HashMap::new(),
        }
    }

    /// Grundy value (nimber) of `state`; a position with no moves is 0
    pub fn grundy(&mut self, state: &S) -> u64 {
        if let Some(&g) = self.memo.get(state) {
            return g;
        }
        let successors = (self.moves)(state);
        let g = mex(
            successors
                .iter()
                .map(|next| self.grundy(next))
                .collect::<Vec<_>>(),
        );
        self.memo.insert(state.clone(), g);
        g
    }

    /// XOR of the Grundy values of independent subgames
    pub fn grundy_multi(&mut self, states: &[S]) -> u64 {
        states.iter().fold(0, |acc, s| acc ^ self.grundy(s))
    }

    /// Whether the player to move wins the sum of `states`
    pub fn is_winning_position(&mut self, states: &[S]) -> bool {
        self.grundy_multi(states) != 0
    }
}
