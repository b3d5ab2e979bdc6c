//! Aktara: a terminal storefront client
//!
//! The core is the [`search`] subsystem: debounced queries, an in-memory
//! result cache, a remote catalog endpoint with a local fallback, and a
//! pure render step. Around it sit the wishlist, cart, product page,
//! account forms and the CLI that drives them.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod product;
pub mod search;
pub mod storage;
pub mod wishlist;
