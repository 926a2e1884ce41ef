//! Failure-absorbing fetchers.
//!
//! Each `fetch_*` wraps the matching `get_*` call and turns any error
//! (transport, status, decoding) into the resource's "unavailable" value:
//! `None` for records, the placeholder [`Description`] for descriptions, and
//! an empty list for the top-sellers search. Failures are logged at `warn`.

use shelfscope_core::{
    CategoryInfo, CurrencyInfo, Description, Item, ItemStub, SellerInfo, SiteInfo,
};

use super::CatalogClient;
use crate::error::CatalogError;

fn absorb<T>(resource: &'static str, id: &str, result: Result<T, CatalogError>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(resource, id, error = %e, "catalog fetch failed");
            None
        }
    }
}

impl CatalogClient {
    pub async fn fetch_item(&self, item_id: &str) -> Option<Item> {
        absorb("item", item_id, self.get_item(item_id).await)
    }

    /// Never fails: a missing description yields [`Description::unavailable`].
    pub async fn fetch_description(&self, item_id: &str) -> Description {
        absorb("description", item_id, self.get_description(item_id).await)
            .unwrap_or_else(Description::unavailable)
    }

    pub async fn fetch_category(&self, category_id: &str) -> Option<CategoryInfo> {
        absorb("category", category_id, self.get_category(category_id).await)
    }

    pub async fn fetch_currency(&self, currency_id: &str) -> Option<CurrencyInfo> {
        absorb("currency", currency_id, self.get_currency(currency_id).await)
    }

    pub async fn fetch_seller(&self, seller_id: i64) -> Option<SellerInfo> {
        absorb(
            "seller",
            &seller_id.to_string(),
            self.get_seller(seller_id).await,
        )
    }

    pub async fn fetch_site(&self, site_id: &str) -> Option<SiteInfo> {
        absorb("site", site_id, self.get_site(site_id).await)
    }

    /// Top sellers of a category; an empty list when the search fails.
    pub async fn fetch_top_selling(&self, site_id: &str, category_id: &str) -> Vec<ItemStub> {
        absorb(
            "top_sellers",
            category_id,
            self.get_top_selling(site_id, category_id).await,
        )
        .unwrap_or_default()
    }
}
