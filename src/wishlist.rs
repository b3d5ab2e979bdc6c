//! Wishlist of product ids
//!
//! Insertion ordered, toggled on and off, and written back to storage in
//! full after every change.

use serde::Serialize;

use crate::catalog::LocalDataset;
use crate::error::Result;
use crate::storage::{KeyValueStore, WISHLIST_KEY};

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Added,
    Removed,
}

/// A wishlist entry with a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistEntry {
    pub id: u64,
    pub name: String,
    pub detail: String,
}

/// Wishlist backed by a key-value store
pub struct Wishlist<S: KeyValueStore> {
    store: S,
    ids: Vec<u64>,
}

impl<S: KeyValueStore> Wishlist<S> {
    /// Load the wishlist; a missing or unreadable entry loads as empty
    pub fn load(store: S) -> Self {
        let ids = match store.get(WISHLIST_KEY) {
            Some(raw) => serde_json::from_str::<Vec<u64>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored wishlist is not a list of ids, ignoring it");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { store, ids }
    }

    /// Add the id if absent, remove it if present, then persist
    pub fn toggle(&mut self, id: u64) -> Result<Toggle> {
        let mut next = self.ids.clone();
        let outcome = match next.iter().position(|&existing| existing == id) {
            Some(index) => {
                next.remove(index);
                Toggle::Removed
            }
            None => {
                next.push(id);
                Toggle::Added
            }
        };

        // Memory only changes once storage has accepted the new list
        self.persist(&next)?;
        self.ids = next;
        tracing::debug!(id, ?outcome, count = self.ids.len(), "wishlist toggled");
        Ok(outcome)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_member(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Entries with names resolved through the catalog
    pub fn entries(&self, catalog: &LocalDataset) -> Vec<WishlistEntry> {
        self.ids
            .iter()
            .map(|&id| match catalog.get(id) {
                Some(item) => WishlistEntry {
                    id,
                    name: item.name.clone(),
                    detail: item.category.clone(),
                },
                None => WishlistEntry {
                    id,
                    name: format!("Sample Product {id}"),
                    detail: "Premium Quality".to_string(),
                },
            })
            .collect()
    }

    fn persist(&self, ids: &[u64]) -> Result<()> {
        let json = serde_json::to_string(ids)?;
        self.store.set(WISHLIST_KEY, &json)
    }
}
