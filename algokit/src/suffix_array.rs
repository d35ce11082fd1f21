//! Suffix array with LCP via Kasai's algorithm
//!
//! Suffixes are sorted at the byte level with a comparison sort,
//! O(n^2 log n) worst case but fast in practice at contest sizes. The
//! LCP array comes out in O(n) by reusing the previous suffix's overlap.
//! `find_pattern` binary-searches the sorted suffixes.

/// Sorted suffixes of a byte string, with longest-common-prefix data
pub struct SuffixArray {
    text: Vec<u8>,
    sa: Vec<usize>,
    lcp: Vec<usize>,
}

impl SuffixArray {
    /// Build the suffix array and LCP array for `text`
    pub fn new(text: &str) -> Self {
        let text = text.as_bytes().to_vec();
        let n = text.len();

        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));

        // Kasai: rank[i] is the position of suffix i in sa; walking
        // suffixes in text order lets each LCP start from the previous
        // one minus one.
        let mut rank = vec![0; n];
        for (pos, &suffix) in sa.iter().enumerate() {
            rank[suffix] = pos;
        }

        let mut lcp = vec![0; n];
        let mut h = 0;
        for i in 0..n {
            if rank[i] > 0 {
                let j = sa[rank[i] - 1];
                while i + h < n && j + h < n && text[i + h] == text[j + h] {
                    h += 1;
                }
                lcp[rank[i]] = h;
                h = h.saturating_sub(1);
            }
        }

        Self { text, sa, lcp }
    }

    /// Suffix start positions in lexicographic order of the suffixes
    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    /// `lcp[i]` = common prefix length of the suffixes at `sa[i-1]` and
    /// `sa[i]`; `lcp[0]` is 0
    pub fn lcp_array(&self) -> &[usize] {
        &self.lcp
    }

    /// Starting positions of every occurrence of `pattern`, ascending
    pub fn find_pattern(&self, pattern: &str) -> Vec<usize> {
        let pattern = pattern.as_bytes();
        if pattern.is_empty() {
            return Vec::new();
        }

        let n = self.sa.len();
        let start = self.sa.partition_point(|&i| &self.text[i..] < pattern);
        let (mut left, mut right) = (start, n);
        while left < right {
            let mid = (left + right) / 2;
            let suffix = &self.text[self.sa[mid]..];
            let head = &suffix[..pattern.len().min(suffix.len())];
            if head <= pattern {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        let end = left;

        let mut positions: Vec<usize> = self.sa[start..end]
            .iter()
            .copied()
            .filter(|&i| self.text[i..].starts_with(pattern))
            .collect();
        positions.sort_unstable();
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana() {
        let sa = SuffixArray::new("banana");
        assert_eq!(sa.suffix_array(), &[5, 3, 1, 0, 4, 2]);
        assert_eq!(sa.lcp_array(), &[0, 1, 3, 0, 0, 2]);
        assert_eq!(sa.find_pattern("ana"), vec![1, 3]);
    }

    #[test]
    fn test_empty_string() {
        let sa = SuffixArray::new("");
        assert!(sa.suffix_array().is_empty());
        assert!(sa.lcp_array().is_empty());
        assert!(sa.find_pattern("a").is_empty());
    }

    #[test]
    fn test_single_char() {
        let sa = SuffixArray::new("a");
        assert_eq!(sa.suffix_array(), &[0]);
        assert_eq!(sa.lcp_array(), &[0]);
    }

    #[test]
    fn test_repeated_chars() {
        let sa = SuffixArray::new("aaaa");
        assert_eq!(sa.suffix_array(), &[3, 2, 1, 0]);
        assert_eq!(sa.lcp_array(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_pattern_not_found() {
        let sa = SuffixArray::new("hello");
        assert!(sa.find_pattern("world").is_empty());
        assert!(sa.find_pattern("").is_empty());
    }

    #[test]
    fn test_pattern_at_end() {
        let sa = SuffixArray::new("hello");
        assert_eq!(sa.find_pattern("lo"), vec![3]);
    }

    #[test]
    fn test_overlapping_patterns() {
        let sa = SuffixArray::new("aabaabaa");
        assert_eq!(sa.find_pattern("aa"), vec![0, 3, 6]);
    }

    #[test]
    fn test_entire_string() {
        let sa = SuffixArray::new("programming");
        assert_eq!(sa.find_pattern("programming"), vec![0]);
    }

    #[test]
    fn test_lcp_values() {
        let sa = SuffixArray::new("abcab");
        assert_eq!(sa.suffix_array(), &[3, 0, 4, 1, 2]);
        assert_eq!(sa.lcp_array(), &[0, 2, 0, 1, 0]);
    }

    #[test]
    fn test_all_unique_chars() {
        let sa = SuffixArray::new("abcd");
        assert_eq!(sa.suffix_array(), &[0, 1, 2, 3]);
        assert_eq!(sa.lcp_array(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_single_char_occurrences() {
        let sa = SuffixArray::new("racecar");
        assert_eq!(sa.find_pattern("r"), vec![0, 6]);
    }

    #[test]
    fn test_words() {
        let sa = SuffixArray::new("thequickbrownfoxjumpsoverthelazydog");
        assert_eq!(sa.find_pattern("jumps"), vec![16]);
        assert_eq!(sa.find_pattern("the"), vec![0, 25]);
    }

    #[test]
    fn test_agrees_with_kmp() {
        use crate::kmp::kmp_search;

        let text = "abracadabra abracadabra abra";
        let sa = SuffixArray::new(text);
        for pattern in ["abra", "a", "cad", "zzz", "ra a"] {
            assert_eq!(
                sa.find_pattern(pattern),
                kmp_search(text.as_bytes(), pattern.as_bytes()),
                "pattern {pattern:?}"
            );
        }
    }
}
