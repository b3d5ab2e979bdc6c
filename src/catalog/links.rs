//! Storefront page links
//!
//! Builds and parses the storefront's page URLs:
//! - Product detail: `{base}/product.html?id={id}`
//! - Checkout: `{base}/cart.html?id={id}`
//! - Home: `{base}/index.html`

use url::Url;

use crate::error::{AktaraError, Result};

const PRODUCT_PAGE: &str = "product.html";
const CHECKOUT_PAGE: &str = "cart.html";
const HOME_PAGE: &str = "index.html";

/// A storefront page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Product detail view for an item id
    Product { id: u64 },
    /// Checkout view, optionally for a single item
    Checkout { id: Option<u64> },
    /// Landing page
    Home,
}

impl Page {
    /// Path and query relative to the storefront root
    pub fn href(&self) -> String {
        match self {
            Page::Product { id } => format!("{PRODUCT_PAGE}?id={id}"),
            Page::Checkout { id: Some(id) } => format!("{CHECKOUT_PAGE}?id={id}"),
            Page::Checkout { id: None } => CHECKOUT_PAGE.to_string(),
            Page::Home => HOME_PAGE.to_string(),
        }
    }

    /// The product id carried by this page, if any
    pub fn product_id(&self) -> Option<u64> {
        match self {
            Page::Product { id } => Some(*id),
            Page::Checkout { id } => *id,
            Page::Home => None,
        }
    }
}

/// Resolves pages against the configured storefront base URL
#[derive(Debug, Clone)]
pub struct StorefrontLinks {
    base: Url,
}

impl StorefrontLinks {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|_| AktaraError::Config(format!("Invalid base URL: {base_url}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    /// Absolute URL for a page
    pub fn url(&self, page: Page) -> Result<Url> {
        self.base
            .join(&page.href())
            .map_err(|e| AktaraError::Config(format!("Invalid page URL: {e}")))
    }
}

/// Parse a storefront page URL into a [`Page`]
pub fn parse_storefront_link(input: &str) -> Result<Page> {
    let url = Url::parse(input)
        .map_err(|_| AktaraError::InvalidArgument(format!("Invalid URL: {input}")))?;

    let page = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    let id = url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| {
            value.parse::<u64>().map_err(|_| {
                AktaraError::InvalidArgument(format!("Invalid product id '{value}' in {input}"))
            })
        })
        .transpose()?;

    match (page, id) {
        (PRODUCT_PAGE, Some(id)) => Ok(Page::Product { id }),
        (PRODUCT_PAGE, None) => Err(AktaraError::InvalidArgument(format!(
            "Product link has no id: {input}"
        ))),
        (CHECKOUT_PAGE, id) => Ok(Page::Checkout { id }),
        ("" | HOME_PAGE, _) => Ok(Page::Home),
        _ => Err(AktaraError::InvalidArgument(format!(
            "Unrecognized storefront link: {input}. Expected /{PRODUCT_PAGE}?id=N or /{CHECKOUT_PAGE}"
        ))),
    }
}

/// Accept either a bare product id or a product/checkout link
pub fn parse_product_ref(input: &str) -> Result<u64> {
    if let Ok(id) = input.trim().parse::<u64>() {
        return Ok(id);
    }

    parse_storefront_link(input.trim())?
        .product_id()
        .ok_or_else(|| AktaraError::InvalidArgument(format!("Link has no product id: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_href() {
        assert_eq!(Page::Product { id: 7 }.href(), "product.html?id=7");
    }

    #[test]
    fn test_checkout_href() {
        assert_eq!(Page::Checkout { id: Some(3) }.href(), "cart.html?id=3");
        assert_eq!(Page::Checkout { id: None }.href(), "cart.html");
    }

    #[test]
    fn test_url_resolves_against_base_path() {
        let links = StorefrontLinks::new("https://shop.example/aktara").unwrap();
        let url = links.url(Page::Product { id: 2 }).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/aktara/product.html?id=2");
    }

    #[test]
    fn test_parse_product_link() {
        let page = parse_storefront_link("https://shop.example/product.html?id=7").unwrap();
        assert_eq!(page, Page::Product { id: 7 });
        assert_eq!(page.product_id(), Some(7));
    }

    #[test]
    fn test_parse_checkout_link() {
        let page = parse_storefront_link("https://shop.example/cart.html").unwrap();
        assert_eq!(page, Page::Checkout { id: None });
    }

    #[test]
    fn test_parse_home_link() {
        assert_eq!(
            parse_storefront_link("https://shop.example/").unwrap(),
            Page::Home
        );
    }

    #[test]
    fn test_parse_product_link_without_id() {
        let result = parse_storefront_link("https://shop.example/product.html");
        assert!(result.unwrap_err().to_string().contains("has no id"));
    }

    #[test]
    fn test_parse_product_link_bad_id() {
        let result = parse_storefront_link("https://shop.example/product.html?id=abc");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_page() {
        let result = parse_storefront_link("https://shop.example/about.html");
        assert!(result.unwrap_err().to_string().contains("Unrecognized"));
    }

    #[test]
    fn test_parse_product_ref_accepts_id_or_link() {
        assert_eq!(parse_product_ref("5").unwrap(), 5);
        assert_eq!(
            parse_product_ref("https://shop.example/product.html?id=6").unwrap(),
            6
        );
        assert!(parse_product_ref("https://shop.example/").is_err());
        assert!(parse_product_ref("not-a-url").is_err());
    }

    #[test]
    fn test_roundtrip_through_links() {
        let links = StorefrontLinks::new("http://localhost:8080").unwrap();
        let url = links.url(Page::Checkout { id: Some(4) }).unwrap();
        assert_eq!(
            parse_storefront_link(url.as_str()).unwrap(),
            Page::Checkout { id: Some(4) }
        );
    }
}
