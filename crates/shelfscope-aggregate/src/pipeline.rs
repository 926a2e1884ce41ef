//! Aggregation run orchestration.

use chrono::{DateTime, Utc};
use futures::future::OptionFuture;
use shelfscope_catalog::CatalogClient;
use shelfscope_core::{
    extract_product_id, EnrichedPeerItem, Item, ProductBundle, ProductIdentifier,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::enrich::enrich_peers;
use crate::error::AggregateError;
use crate::render::BundleRenderer;

/// Run one aggregation for the product on `page_url`.
///
/// 1. Extract the product identifier from the URL.
/// 2. Fetch the item and its description concurrently.
/// 3. Fetch category, currency, seller and site concurrently, each only if
///    the item carries the corresponding id.
/// 4. If the item has both a site and a category, search the category's top
///    sellers and enrich them.
///
/// `now` is the reference instant for peer listing ages.
///
/// # Errors
///
/// - [`AggregateError::Unidentifiable`] if the URL has no product identifier;
///   nothing is fetched.
/// - [`AggregateError::ItemUnavailable`] if the item fetch fails; no
///   reference or peer fetch is attempted.
///
/// Every other failure degrades the bundle instead of aborting.
pub async fn aggregate(
    client: &CatalogClient,
    page_url: &str,
    now: DateTime<Utc>,
) -> Result<ProductBundle, AggregateError> {
    let Some(product_id) = extract_product_id(page_url) else {
        tracing::error!(url = page_url, "no product identifier in page URL");
        return Err(AggregateError::Unidentifiable {
            url: page_url.to_owned(),
        });
    };

    let span = tracing::info_span!(
        "aggregate",
        run_id = %Uuid::new_v4(),
        product = %product_id,
        site = product_id.site_prefix()
    );
    run(client, product_id, now).instrument(span).await
}

/// Aggregate with the current time, then hand the bundle to `renderer`.
///
/// The renderer is only invoked when aggregation succeeds.
///
/// # Errors
///
/// Propagates [`aggregate`]'s aborts, and wraps a renderer failure in
/// [`AggregateError::Render`].
pub async fn inspect<R: BundleRenderer>(
    client: &CatalogClient,
    page_url: &str,
    renderer: &mut R,
) -> Result<(), AggregateError> {
    let bundle = aggregate(client, page_url, Utc::now()).await?;
    renderer
        .render(&bundle)
        .map_err(|e| AggregateError::Render(e.to_string()))
}

async fn run(
    client: &CatalogClient,
    product_id: ProductIdentifier,
    now: DateTime<Utc>,
) -> Result<ProductBundle, AggregateError> {
    let (item, description) = tokio::join!(
        client.fetch_item(product_id.as_str()),
        client.fetch_description(product_id.as_str()),
    );
    let Some(item) = item else {
        tracing::error!("item fetch failed; aborting run");
        return Err(AggregateError::ItemUnavailable {
            id: product_id.to_string(),
        });
    };

    let category = OptionFuture::from(
        item.category_id
            .as_deref()
            .map(|id| client.fetch_category(id)),
    );
    let currency = OptionFuture::from(
        item.currency_id
            .as_deref()
            .map(|id| client.fetch_currency(id)),
    );
    let seller = OptionFuture::from(item.seller_id.map(|id| client.fetch_seller(id)));
    let site = OptionFuture::from(item.site_id.as_deref().map(|id| client.fetch_site(id)));
    let (category, currency, seller, site) = tokio::join!(category, currency, seller, site);
    let (category, currency, seller, site) = (
        category.flatten(),
        currency.flatten(),
        seller.flatten(),
        site.flatten(),
    );

    let peers = fetch_peers(client, &item, now).await;

    tracing::info!(
        category = category.is_some(),
        currency = currency.is_some(),
        seller = seller.is_some(),
        site = site.is_some(),
        peers = peers.len(),
        "aggregation complete"
    );

    Ok(ProductBundle {
        product_id,
        item,
        description,
        category,
        currency,
        seller,
        site,
        peers,
    })
}

async fn fetch_peers(
    client: &CatalogClient,
    item: &Item,
    now: DateTime<Utc>,
) -> Vec<EnrichedPeerItem> {
    let (Some(site_id), Some(category_id)) = (item.site_id.as_deref(), item.category_id.as_deref())
    else {
        tracing::debug!("item has no site or category; skipping top sellers");
        return Vec::new();
    };

    let stubs = client.fetch_top_selling(site_id, category_id).await;
    if stubs.is_empty() {
        tracing::debug!(category = category_id, "no top sellers found");
        return Vec::new();
    }

    enrich_peers(client, &stubs, now).await
}
