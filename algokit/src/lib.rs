//! Algokit - Contest Algorithm Reference Library
//!
//! Self-contained implementations of the classical algorithms that come up
//! in programming contests, built on the data structures in `algokit-core`.
//!
//! ## Architecture
//!
//! The workspace follows a clean structure/algorithm separation:
//!
//! - **algokit-core**: pure in-memory data structures (`no_std` + `alloc`)
//! - **algokit**: standalone graph, string, geometry and game algorithms
//!
//! Graphs are assembled per problem instance over generic node types; any
//! `Eq + Hash + Clone` value works as a vertex, and weights are generic over
//! ordered additive types.
//!
//! ## Quick Start
//!
//! ```rust
//! use algokit::Dijkstra;
//!
//! let mut d = Dijkstra::new(0i64);
//! d.add_edge("a", "b", 4);
//! d.add_edge("a", "c", 2);
//! d.add_edge("c", "b", 1);
//!
//! let (distances, _) = d.shortest_paths(&"a");
//! assert_eq!(distances[&"b"], 3);
//! ```

// Re-export the data structure layer so a single dependency suffices.
pub use algokit_core::{
    AlgoError, FenwickTree, GroupElement, PrefixTree, PriorityQueue, Result, SegmentTree,
    SkipList, Summable, UnionFind,
};

pub mod bellman_ford;
pub mod convex_hull;
pub mod dijkstra;
pub mod grundy;
pub mod kmp;
pub mod lca;
pub mod matching;
pub mod max_flow;
pub mod polygon;
pub mod scc;
pub mod suffix_array;
pub mod topo_sort;
pub mod traits;
pub mod two_sat;

pub use bellman_ford::BellmanFord;
pub use convex_hull::{convex_hull, cross, Point};
pub use dijkstra::Dijkstra;
pub use grundy::{mex, GrundyEngine};
pub use kmp::{failure_function, kmp_count, kmp_search};
pub use lca::Lca;
pub use matching::max_bipartite_matching;
pub use max_flow::EdmondsKarp;
pub use polygon::{is_clockwise, polygon_area, polygon_signed_area};
pub use scc::SccGraph;
pub use suffix_array::SuffixArray;
pub use topo_sort::TopologicalSort;
pub use traits::{Capacity, Weight};
pub use two_sat::TwoSat;
