//! Catalog data sources
//!
//! The remote search endpoint and the fixed local dataset used when the
//! remote one is unavailable.

mod client;
pub mod links;
pub mod local;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::CatalogClient;
pub use links::{parse_product_ref, parse_storefront_link, Page, StorefrontLinks};
pub use local::LocalDataset;
pub use types::*;

/// A source of search results for a query
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return matching items in provider order, or an error on any failure
    async fn search(&self, query: &str) -> Result<Vec<Item>>;
}
