mod account;
mod common;
mod config;
mod product;
mod search;
mod wishlist;

pub use self::account::{login, signup, subscribe};
pub use self::common::Context;
pub use self::config::config;
pub use self::product::{buy, cart, product};
pub use self::search::{search, shop};
pub use self::wishlist::wishlist;
