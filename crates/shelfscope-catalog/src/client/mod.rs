//! HTTP client for the public catalog REST API.
//!
//! Wraps `reqwest` with catalog-specific URL building, status handling and
//! typed response deserialization. Every request is a single GET attempt.

mod fetchers;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shelfscope_core::{
    CategoryInfo, CurrencyInfo, Description, Item, ItemStub, SearchResponse, SellerInfo, SiteInfo,
};

use crate::error::CatalogError;

pub const DEFAULT_BASE_URL: &str = "https://api.mercadolibre.com/";

/// Maximum number of top-selling peers requested per category search.
pub const TOP_SELLERS_LIMIT: u32 = 10;

/// Client for the catalog REST API.
///
/// Use [`CatalogClient::new`] for production or
/// [`CatalogClient::with_base_url`] to point at a mock server in tests.
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client pointed at the production catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so appended segments extend the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// `GET /items/{id}`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] on HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::Deserialize`] if the body is not an item record.
    pub async fn get_item(&self, item_id: &str) -> Result<Item, CatalogError> {
        let url = self.resource_url(&["items", item_id])?;
        self.get_json(url, &format!("item {item_id}")).await
    }

    /// `GET /items/{id}/description`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_description(&self, item_id: &str) -> Result<Description, CatalogError> {
        let url = self.resource_url(&["items", item_id, "description"])?;
        self.get_json(url, &format!("description of {item_id}"))
            .await
    }

    /// `GET /categories/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_category(&self, category_id: &str) -> Result<CategoryInfo, CatalogError> {
        let url = self.resource_url(&["categories", category_id])?;
        self.get_json(url, &format!("category {category_id}"))
            .await
    }

    /// `GET /currencies/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_currency(&self, currency_id: &str) -> Result<CurrencyInfo, CatalogError> {
        let url = self.resource_url(&["currencies", currency_id])?;
        self.get_json(url, &format!("currency {currency_id}"))
            .await
    }

    /// `GET /users/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_seller(&self, seller_id: i64) -> Result<SellerInfo, CatalogError> {
        let seller_id = seller_id.to_string();
        let url = self.resource_url(&["users", seller_id.as_str()])?;
        self.get_json(url, &format!("seller {seller_id}")).await
    }

    /// `GET /sites/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_site(&self, site_id: &str) -> Result<SiteInfo, CatalogError> {
        let url = self.resource_url(&["sites", site_id])?;
        self.get_json(url, &format!("site {site_id}")).await
    }

    /// Category search sorted by descending sold quantity, capped at
    /// [`TOP_SELLERS_LIMIT`] results.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get_item`].
    pub async fn get_top_selling(
        &self,
        site_id: &str,
        category_id: &str,
    ) -> Result<Vec<ItemStub>, CatalogError> {
        let url = self.top_selling_url(site_id, category_id)?;
        let response: SearchResponse = self
            .get_json(url, &format!("top sellers of {site_id}/{category_id}"))
            .await?;
        Ok(response.results)
    }

    fn top_selling_url(&self, site_id: &str, category_id: &str) -> Result<Url, CatalogError> {
        let mut url = self.resource_url(&["sites", site_id, "search"])?;
        url.query_pairs_mut()
            .append_pair("category", category_id)
            .append_pair("sort", "sold_quantity_desc")
            .append_pair("limit", &TOP_SELLERS_LIMIT.to_string());
        Ok(url)
    }

    /// Appends percent-encoded path segments to the base URL.
    fn resource_url(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET request, maps non-2xx statuses to typed errors, and
    /// deserializes the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, "catalog request");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
