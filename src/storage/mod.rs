//! Local key-value storage
//!
//! String values under string keys, persisted as a single JSON object file.
//! Writes are best effort: callers decide whether a failed write matters.

mod file;

pub use file::FileStore;

use crate::error::Result;

/// Key under which the wishlist ids are stored
pub const WISHLIST_KEY: &str = "wishlist";
/// Key under which a remembered login email is stored
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Key under which the cart item count is stored
pub const CART_COUNT_KEY: &str = "cartCount";

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
