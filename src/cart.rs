//! Cart item counter

use crate::error::Result;
use crate::storage::{KeyValueStore, CART_COUNT_KEY};

/// Number of items in the cart, kept in local storage
pub struct CartCounter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CartCounter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current count; anything unparsable counts as zero
    pub fn count(&self) -> u32 {
        self.store
            .get(CART_COUNT_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Add `quantity` items and return the new count
    pub fn add(&self, quantity: u32) -> Result<u32> {
        let count = self.count().saturating_add(quantity);
        self.store.set(CART_COUNT_KEY, &count.to_string())?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use tempfile::TempDir;

    #[test]
    fn test_count_starts_at_zero() {
        let temp_dir = TempDir::new().unwrap();
        let cart = CartCounter::new(FileStore::new(temp_dir.path().join("s.json")));
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_add_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let cart = CartCounter::new(FileStore::new(temp_dir.path().join("s.json")));

        assert_eq!(cart.add(2).unwrap(), 2);
        assert_eq!(cart.add(3).unwrap(), 5);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_garbage_count_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("s.json"));
        store.set(CART_COUNT_KEY, "lots").unwrap();

        let cart = CartCounter::new(store);
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.add(1).unwrap(), 1);
    }
}
