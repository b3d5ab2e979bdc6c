use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Item;

/// Search results keyed by the exact query string
///
/// Entries never expire on their own and are never removed one at a time;
/// the only removal is [`SearchCache::clear`], which drops everything.
#[derive(Debug)]
pub struct SearchCache {
    entries: HashMap<String, Vec<Item>>,
    last_cleared: DateTime<Utc>,
}

/// Snapshot of the cache for display
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub entries: usize,
    pub last_cleared: DateTime<Utc>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            last_cleared: Utc::now(),
        }
    }

    pub fn get(&self, query: &str) -> Option<Vec<Item>> {
        self.entries.get(query).cloned()
    }

    pub fn insert(&mut self, query: &str, items: Vec<Item>) {
        self.entries.insert(query.to_string(), items);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_cleared = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn status(&self) -> CacheStatus {
        CacheStatus {
            entries: self.entries.len(),
            last_cleared: self.last_cleared,
        }
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> Item {
        Item {
            id,
            name: format!("Item {id}"),
            category: "Silk".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_get_missing() {
        assert!(SearchCache::new().get("silk").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = SearchCache::new();
        cache.insert("silk", vec![item(1), item(7)]);

        let cached = cache.get("silk").unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[1].id, 7);
    }

    #[test]
    fn test_keys_are_exact_and_case_sensitive() {
        let mut cache = SearchCache::new();
        cache.insert("Silk", vec![item(1)]);

        assert!(cache.contains("Silk"));
        assert!(!cache.contains("silk"));
        assert!(!cache.contains("Silk "));
    }

    #[test]
    fn test_empty_result_is_cached() {
        let mut cache = SearchCache::new();
        cache.insert("zz", Vec::new());

        assert_eq!(cache.get("zz"), Some(Vec::new()));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut cache = SearchCache::new();
        cache.insert("silk", vec![item(1)]);
        cache.insert("cotton", vec![item(2)]);
        let before = cache.status().last_cleared;

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.status().last_cleared >= before);
    }
}
