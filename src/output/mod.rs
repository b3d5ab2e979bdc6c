pub mod json;
pub mod pretty;
mod terminal;

pub use terminal::TerminalView;

use url::Url;

use crate::account::AuthOutcome;
use crate::catalog::{Page, StorefrontLinks};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::notify::Toast;
use crate::product::ProductPage;
use crate::search::{CacheStatus, DisplayMode, SearchOutcome};
use crate::wishlist::{Toggle, WishlistEntry};

/// Format a search outcome based on output format
pub fn format_outcome(
    query: &str,
    mode: DisplayMode,
    outcome: &SearchOutcome,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_outcome(query, mode, outcome)),
        OutputFormat::Json => json::format_outcome(query, mode, outcome),
    }
}

/// Format the wishlist based on output format
pub fn format_wishlist(entries: &[WishlistEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_wishlist(entries)),
        OutputFormat::Json => json::format_wishlist(entries),
    }
}

/// Format a wishlist toggle based on output format
pub fn format_toggle(id: u64, toggle: Toggle, count: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_toggle(id, toggle, count)),
        OutputFormat::Json => json::format_toggle(id, toggle, count),
    }
}

/// Format the wishlist count based on output format
pub fn format_count(count: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_count(count)),
        OutputFormat::Json => json::format_json(&serde_json::json!({ "count": count })),
    }
}

/// Format a product page based on output format
pub fn format_product(
    page: &ProductPage,
    links: &StorefrontLinks,
    wishlisted: bool,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_product(page, links, wishlisted)),
        OutputFormat::Json => {
            let url = links.url(Page::Product { id: page.item.id })?;
            json::format_product(page, Some(&url), wishlisted)
        }
    }
}

/// Format the cart count based on output format
pub fn format_cart(count: u32, toast: Option<&Toast>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cart(count, toast)),
        OutputFormat::Json => json::format_cart(count, toast),
    }
}

/// Format a checkout link based on output format
pub fn format_checkout(url: &Url, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_checkout(url)),
        OutputFormat::Json => json::format_json(&serde_json::json!({ "checkout": url.as_str() })),
    }
}

/// Format a login or signup result based on output format
pub fn format_auth(outcome: &AuthOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_auth(outcome)),
        OutputFormat::Json => json::format_auth(outcome),
    }
}

/// Format a toast based on output format
pub fn format_toast(toast: &Toast, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_toast(toast)),
        OutputFormat::Json => json::format_json(toast),
    }
}

/// Format the search cache status based on output format
pub fn format_cache_status(status: &CacheStatus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cache_status(status)),
        OutputFormat::Json => json::format_json(status),
    }
}
