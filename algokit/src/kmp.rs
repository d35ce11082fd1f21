//! Knuth-Morris-Pratt pattern matching
//!
//! The failure function records, for every prefix of the pattern, the
//! length of its longest proper border. On a mismatch the search falls
//! back along borders instead of rescanning the text, giving O(n + m)
//! overall. Works on slices of any comparable element type, so byte
//! strings, char sequences and token streams all match the same way.

/// Longest proper prefix of `pattern[..=i]` that is also its suffix
pub fn failure_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut failure = vec![0; m];
    let mut j = 0;

    for i in 1..m {
        while j > 0 && pattern[i] != pattern[j] {
            j = failure[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        failure[i] = j;
    }
    failure
}

/// Starting positions of every (possibly overlapping) occurrence of
/// `pattern` in `text`, ascending
///
/// An empty pattern matches nowhere.
pub fn kmp_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    let m = pattern.len();
    let failure = failure_function(pattern);
    let mut matches = Vec::new();
    let mut j = 0;

    for (i, item) in text.iter().enumerate() {
        while j > 0 && *item != pattern[j] {
            j = failure[j - 1];
        }
        if *item == pattern[j] {
            j += 1;
        }
        if j == m {
            matches.push(i + 1 - m);
            j = failure[j - 1];
        }
    }
    matches
}

/// Number of occurrences of `pattern` in `text`
pub fn kmp_count<T: PartialEq>(text: &[T], pattern: &[T]) -> usize {
    kmp_search(text, pattern).len()
}
