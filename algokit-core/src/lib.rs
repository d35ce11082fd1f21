#![no_std]

//! Algokit Core - Data Structure Building Blocks
//!
//! This crate provides the data structures that the algorithm layer builds
//! on: indexable prefix-sum trees, disjoint sets, keyed heaps and string
//! containers. Everything here is `no_std` + `alloc`.

extern crate alloc;

pub mod error;
pub mod fenwick;
pub mod priority_queue;
pub mod segment_tree;
pub mod skip_list;
pub mod traits;
pub mod trie;
pub mod union_find;

pub use error::*;
pub use fenwick::*;
pub use priority_queue::*;
pub use segment_tree::*;
pub use skip_list::*;
pub use traits::*;
pub use trie::*;
pub use union_find::*;
