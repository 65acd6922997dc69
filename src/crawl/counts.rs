// src/crawl/counts.rs
// =============================================================================
// The link count map: normalized URL -> how many times it was linked.
//
// Entries remember the order they were first seen in. The report sorts by
// count with a stable sort, so pages with equal counts come out in the order
// the crawl discovered them.
// =============================================================================

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LinkCounts {
    // key -> position in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl LinkCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more reference to `key`
    ///
    /// Returns true when this is the first time the key is seen.
    pub fn record(&mut self, key: String) -> bool {
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 += 1;
            return false;
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
        true
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries sorted by count, highest first; ties keep first-seen order
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_up() {
        let mut counts = LinkCounts::new();
        assert!(counts.record("a.com".to_string()));
        assert!(!counts.record("a.com".to_string()));
        assert!(counts.record("a.com/x".to_string()));

        assert_eq!(counts.get("a.com"), Some(2));
        assert_eq!(counts.get("a.com/x"), Some(1));
        assert_eq!(counts.get("a.com/y"), None);
        assert_eq!(counts.len(), 2);
        assert!(counts.contains("a.com/x"));
    }

    #[test]
    fn test_iter_keeps_first_seen_order() {
        let mut counts = LinkCounts::new();
        for key in ["c", "a", "b", "a"] {
            counts.record(key.to_string());
        }
        let keys: Vec<_> = counts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let mut counts = LinkCounts::new();
        for key in ["x", "y", "z", "z", "w", "y", "z"] {
            counts.record(key.to_string());
        }
        assert_eq!(
            counts.sorted_by_count(),
            vec![("z", 3), ("y", 2), ("x", 1), ("w", 1)]
        );
    }

    #[test]
    fn test_empty() {
        let counts = LinkCounts::new();
        assert!(counts.is_empty());
        assert!(counts.sorted_by_count().is_empty());
    }
}
