//! Maximum bipartite matching via augmenting paths
//!
//! Kuhn's algorithm, O(V * E): for each free source, depth-first search
//! for an alternating path ending in a free sink, flipping the matched
//! edges along it. Sources are processed in sorted order so the result is
//! deterministic for a given edge list.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Largest pairing between two disjoint vertex sets
///
/// `edges` lists `(source, sink)` pairs; the returned map pairs each
/// matched source with its sink, and no vertex appears twice.
pub fn max_bipartite_matching<S, T>(edges: &[(S, T)]) -> HashMap<S, T>
where
    S: Ord + Eq + Hash + Clone,
    T: Eq + Hash + Clone,
{
    let mut adjacency: HashMap<S, Vec<T>> = HashMap::new();
    for (source, sink) in edges {
        adjacency
            .entry(source.clone())
            .or_default()
            .push(sink.clone());
    }

    let mut sources: Vec<&S> = adjacency.keys().collect();
    sources.sort();

    let mut matched_sinks: HashMap<T, S> = HashMap::new();
    for source in sources {
        let mut visited = HashSet::new();
        augment(source, &adjacency, &mut visited, &mut matched_sinks);
    }

    matched_sinks
        .into_iter()
        .map(|(sink, source)| (source, sink))
        .collect()
}

// Try to match `source`, evicting already-matched sources onto their
// alternative sinks; `visited` keeps one sink from being considered twice
// per augmentation attempt.
fn augment<S, T>(
    source: &S,
    adjacency: &HashMap<S, Vec<T>>,
    visited: &mut HashSet<T>,
    matched_sinks: &mut HashMap<T, S>,
) -> bool
where
    S: Ord + Eq + Hash + Clone,
    T: Eq + Hash + Clone,
{
    let Some(sinks) = adjacency.get(source) else {
        return false;
    };
    for sink in sinks {
        if !visited.insert(sink.clone()) {
            continue;
        }
        let free = match matched_sinks.get(sink) {
            None => true,
            Some(holder) => {
                let holder = holder.clone();
                augment(&holder, adjacency, visited, matched_sinks)
            }
        };
        if free {
            matched_sinks.insert(sink.clone(), source.clone());
            return true;
        }
    }
    false
}
