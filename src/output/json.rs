use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::account::AuthOutcome;
use crate::error::Result;
use crate::notify::Toast;
use crate::product::ProductPage;
use crate::search::{DisplayMode, SearchOutcome};
use crate::wishlist::{Toggle, WishlistEntry};

/// Format a search outcome as JSON
pub fn format_outcome(query: &str, mode: DisplayMode, outcome: &SearchOutcome) -> Result<String> {
    let value = json!({
        "query": query,
        "mode": mode,
        "result": outcome,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format wishlist entries as JSON
pub fn format_wishlist(entries: &[WishlistEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Format a wishlist toggle as JSON
pub fn format_toggle(id: u64, toggle: Toggle, count: usize) -> Result<String> {
    let value = json!({
        "id": id,
        "action": toggle,
        "count": count,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format a product page as JSON
pub fn format_product(page: &ProductPage, url: Option<&Url>, wishlisted: bool) -> Result<String> {
    let value = json!({
        "product": page,
        "url": url.map(Url::as_str),
        "wishlisted": wishlisted,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format the cart count as JSON
pub fn format_cart(count: u32, toast: Option<&Toast>) -> Result<String> {
    let value = json!({
        "count": count,
        "toast": toast,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn format_auth(outcome: &AuthOutcome) -> Result<String> {
    let value = json!({
        "success": outcome.succeeded(),
        "outcome": outcome,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format any serializable value as JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocalDataset;
    use crate::search::{render, ResultSource};

    #[test]
    fn test_format_outcome_json_shape() {
        let outcome = SearchOutcome::Rendered {
            source: ResultSource::Remote,
            view: render(&LocalDataset::new().filter("Cotton")),
        };
        let output = format_outcome("Cotton", DisplayMode::Mobile, &outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["mode"], "mobile");
        assert_eq!(value["result"]["outcome"], "rendered");
        assert_eq!(value["result"]["source"], "remote");
        assert_eq!(value["result"]["view"]["kind"], "rows");
        assert_eq!(value["result"]["view"]["rows"][1]["id"], 8);
    }

    #[test]
    fn test_format_outcome_hidden_json() {
        let output = format_outcome("a", DisplayMode::Desktop, &SearchOutcome::Hidden).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["result"]["outcome"], "hidden");
    }

    #[test]
    fn test_format_toggle_json() {
        let output = format_toggle(2, Toggle::Added, 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["action"], "added");
        assert_eq!(value["count"], 1);
    }

    #[test]
    fn test_format_cart_json_toast() {
        let toast = Toast::success("Product added to cart!");
        let output = format_cart(4, Some(&toast)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["toast"]["kind"], "success");
        assert_eq!(value["count"], 4);
    }
}
