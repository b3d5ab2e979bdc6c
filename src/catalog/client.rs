use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::types::{Item, SearchResponse};
use super::SearchProvider;
use crate::config::Config;
use crate::error::{AktaraError, Result};

const SEARCH_PATH: &str = "api/search";
const USER_AGENT: &str = concat!("aktara/", env!("CARGO_PKG_VERSION"));

/// Client for the storefront's search endpoint
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl CatalogClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.api.base_url,
            config.api.token.clone(),
            config.search.timeout(),
        )
    }

    /// Create a client for an explicit base URL
    pub fn with_base_url(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// The full search URL for a query
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| AktaraError::Config(format!("Invalid search URL: {e}")))?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body
    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref token) = self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AktaraError::api(status.as_u16(), message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(AktaraError::Json)
    }
}

#[async_trait]
impl SearchProvider for CatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<Item>> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "remote search");
        let response: SearchResponse = self.get(url).await?;
        Ok(response.results)
    }
}

/// Parse a base URL, making sure relative joins keep its path
fn parse_base_url(input: &str) -> Result<Url> {
    let mut url = Url::parse(input)
        .map_err(|_| AktaraError::Config(format!("Invalid base URL: {input}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
