//! Write-only compressed prefix tree (radix trie)
//!
//! Stores strings and answers one query: which stored strings are a
//! prefix of a given text, and where do they end. Edges carry string
//! fragments and are kept sorted, so lookup descends with a binary search
//! per node. Nodes live in an arena and refer to children by index; an
//! edge without a child marks the end of a stored string, as does an
//! empty-label edge inside a node.
//!
//! All positions are byte offsets into the query string.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, Clone)]
struct Edge {
    label: String,
    // None marks a terminal: a stored string ends with this label.
    child: Option<usize>,
}

#[derive(Debug, Clone, Default)]
struct Node {
    // Sorted by label.
    edges: Vec<Edge>,
}

/// Prefix tree over arena-indexed nodes
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
}

impl PrefixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Add a string to the tree
    pub fn insert(&mut self, s: &str) {
        self.insert_at(0, s);
    }

    /// Byte end-positions of every stored string that prefixes `s[offset..]`
    ///
    /// Positions are absolute (counted from the start of `s`), ascending.
    pub fn prefix_matches(&self, s: &str, offset: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_matches(0, s, offset, &mut out);
        out
    }

    /// Byte length of the longest stored string
    pub fn max_len(&self) -> usize {
        self.max_len_at(0)
    }

    fn insert_at(&mut self, node: usize, s: &str) {
        if s.is_empty() || self.nodes[node].edges.is_empty() {
            // Empty labels sort first, so position 0 keeps the order.
            self.nodes[node].edges.insert(
                0,
                Edge {
                    label: String::from(s),
                    child: None,
                },
            );
            return;
        }

        let mut pos = self.nodes[node]
            .edges
            .partition_point(|e| e.label.as_str() < s);
        if pos > 0 {
            let prev = &self.nodes[node].edges[pos - 1].label;
            if !prev.is_empty() && prev.chars().next() == s.chars().next() {
                pos -= 1;
            }
        }

        let shares_first_char = pos < self.nodes[node].edges.len()
            && self.nodes[node].edges[pos].label.chars().next() == s.chars().next();
        if !shares_first_char {
            self.nodes[node].edges.insert(
                pos,
                Edge {
                    label: String::from(s),
                    child: None,
                },
            );
            return;
        }

        let label = self.nodes[node].edges[pos].label.clone();
        if let Some(rest) = s.strip_prefix(label.as_str()) {
            // The whole edge label is consumed; descend, creating an
            // intermediate node that preserves the existing terminal.
            let child = match self.nodes[node].edges[pos].child {
                Some(child) => child,
                None => {
                    let child = self.push_terminal_node();
                    self.nodes[node].edges[pos].child = Some(child);
                    child
                }
            };
            self.insert_at(child, rest);
        } else if let Some(tail) = label.strip_prefix(s) {
            // The new string stops inside the edge; split it and mark the
            // split point as a terminal.
            let old_child = self.nodes[node].edges[pos].child;
            let child = self.push_node(vec![
                Edge {
                    label: String::new(),
                    child: None,
                },
                Edge {
                    label: String::from(tail),
                    child: old_child,
                },
            ]);
            let edge = &mut self.nodes[node].edges[pos];
            edge.label = String::from(s);
            edge.child = Some(child);
        } else {
            // Proper divergence after a shared prefix of at least one char.
            let split = common_prefix_bytes(s, &label);
            let s_tail = Edge {
                label: String::from(&s[split..]),
                child: None,
            };
            let label_tail = Edge {
                label: String::from(&label[split..]),
                child: self.nodes[node].edges[pos].child,
            };
            let edges = if s < label.as_str() {
                vec![s_tail, label_tail]
            } else {
                vec![label_tail, s_tail]
            };
            let child = self.push_node(edges);
            let edge = &mut self.nodes[node].edges[pos];
            edge.label = String::from(&s[..split]);
            edge.child = Some(child);
        }
    }

    fn collect_matches(&self, node: usize, s: &str, offset: usize, out: &mut Vec<usize>) {
        let edges = &self.nodes[node].edges;
        if edges.first().map_or(false, |e| e.label.is_empty()) {
            out.push(offset);
        }

        let probe_end = s[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8());
        let probe = &s[offset..probe_end];
        let index = edges.partition_point(|e| e.label.as_str() < probe);
        if index == edges.len() {
            return;
        }
        let edge = &edges[index];
        if edge.label.is_empty() || !s[offset..].starts_with(edge.label.as_str()) {
            return;
        }
        match edge.child {
            None => out.push(offset + edge.label.len()),
            Some(child) => self.collect_matches(child, s, offset + edge.label.len(), out),
        }
    }

    fn max_len_at(&self, node: usize) -> usize {
        self.nodes[node]
            .edges
            .iter()
            .map(|e| e.label.len() + e.child.map_or(0, |c| self.max_len_at(c)))
            .max()
            .unwrap_or(0)
    }

    fn push_terminal_node(&mut self) -> usize {
        self.push_node(vec![Edge {
            label: String::new(),
            child: None,
        }])
    }

    fn push_node(&mut self, edges: Vec<Edge>) -> usize {
        self.nodes.push(Node { edges });
        self.nodes.len() - 1
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

fn common_prefix_bytes(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefixes() {
        let mut tree = PrefixTree::new();
        tree.insert("cat");
        tree.insert("car");
        tree.insert("card");

        assert_eq!(tree.prefix_matches("card", 0), vec![3, 4]);
        assert_eq!(tree.max_len(), 4);
    }

    #[test]
    fn test_empty_tree() {
        let tree = PrefixTree::new();
        assert!(tree.prefix_matches("test", 0).is_empty());
        assert_eq!(tree.max_len(), 0);
    }

    #[test]
    fn test_single_string() {
        let mut tree = PrefixTree::new();
        tree.insert("hello");
        assert_eq!(tree.prefix_matches("hello world", 0), vec![5]);
        assert_eq!(tree.max_len(), 5);
    }

    #[test]
    fn test_empty_string_matches_everywhere() {
        let mut tree = PrefixTree::new();
        tree.insert("");
        assert_eq!(tree.prefix_matches("anything", 0), vec![0]);
    }

    #[test]
    fn test_no_match() {
        let mut tree = PrefixTree::new();
        tree.insert("cat");
        tree.insert("car");
        assert!(tree.prefix_matches("dog", 0).is_empty());
    }

    #[test]
    fn test_stored_string_longer_than_query() {
        let mut tree = PrefixTree::new();
        tree.insert("catalog");
        assert!(tree.prefix_matches("cat", 0).is_empty());
    }

    #[test]
    fn test_overlapping_strings() {
        let mut tree = PrefixTree::new();
        tree.insert("a");
        tree.insert("ab");
        tree.insert("abc");
        assert_eq!(tree.prefix_matches("abcdef", 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_offset() {
        let mut tree = PrefixTree::new();
        tree.insert("test");
        assert_eq!(tree.prefix_matches("xxtest", 2), vec![6]);
    }

    #[test]
    fn test_many_words() {
        let mut tree = PrefixTree::new();
        for word in ["the", "then", "there", "answer", "any", "by", "bye", "their"] {
            tree.insert(word);
        }
        let found = tree.prefix_matches("their", 0);
        assert!(found.contains(&3));
        assert!(found.contains(&5));
        assert!(!found.contains(&4));
    }

    #[test]
    fn test_common_prefix_splits() {
        let mut tree = PrefixTree::new();
        tree.insert("pre");
        tree.insert("prefix");
        tree.insert("prepare");
        assert_eq!(tree.prefix_matches("prefix", 0), vec![3, 6]);
        assert_eq!(tree.max_len(), 7);
    }

    #[test]
    fn test_max_len_growth() {
        let mut tree = PrefixTree::new();
        assert_eq!(tree.max_len(), 0);
        tree.insert("a");
        assert_eq!(tree.max_len(), 1);
        tree.insert("abc");
        assert_eq!(tree.max_len(), 3);
        tree.insert("ab");
        assert_eq!(tree.max_len(), 3);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut tree = PrefixTree::new();
        tree.insert("test");
        tree.insert("test");
        assert_eq!(tree.prefix_matches("test", 0), vec![4]);
    }

    #[test]
    fn test_insertion_order_independence() {
        let words = ["b", "ba", "bat", "batch", "a", "at"];
        let mut forward = PrefixTree::new();
        for w in words {
            forward.insert(w);
        }
        let mut backward = PrefixTree::new();
        for w in words.iter().rev() {
            backward.insert(w);
        }
        for query in ["batch", "at", "ba", "zzz", "a"] {
            assert_eq!(
                forward.prefix_matches(query, 0),
                backward.prefix_matches(query, 0),
                "query {query:?}"
            );
        }
    }
}
