//! Peer enrichment fan-out.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use shelfscope_catalog::CatalogClient;
use shelfscope_core::{enrich_peer, EnrichedPeerItem, ItemStub};

/// Fetches full detail for every stub concurrently and enriches each one.
///
/// The output has one entry per stub, in input order; `rank` is the 1-based
/// input position. A failed detail fetch degrades only its own entry.
pub async fn enrich_peers(
    client: &CatalogClient,
    stubs: &[ItemStub],
    now: DateTime<Utc>,
) -> Vec<EnrichedPeerItem> {
    let details = join_all(stubs.iter().map(|stub| client.fetch_item(&stub.id))).await;

    let peers: Vec<EnrichedPeerItem> = stubs
        .iter()
        .zip(&details)
        .enumerate()
        .map(|(idx, (stub, detail))| enrich_peer(idx + 1, stub, detail.as_ref(), now))
        .collect();

    let degraded = peers.iter().filter(|p| p.is_degraded()).count();
    if degraded > 0 {
        tracing::warn!(
            degraded,
            total = peers.len(),
            "some peer detail fetches failed"
        );
    }

    peers
}
